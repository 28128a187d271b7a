//! Proxy error types.
//!
//! Every failure mode renders as the uniform JSON envelope
//! `{"error": ..., "details": ...}`: the inbound connection is always
//! answered, never crashed.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

pub type ProxyResult<T> = Result<T, ProxyError>;

#[derive(Debug, Error)]
pub enum ProxyError {
    /// Only POST is accepted on the upload route.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// The inbound multipart form could not be parsed.
    #[error("invalid multipart form: {0}")]
    BadForm(String),

    /// The upstream host could not be reached or answered with a
    /// transport error.
    #[error("upstream request failed: {0}")]
    Upstream(String),

    /// The upstream response body was not decodable JSON.
    #[error("failed to decode upstream response: {0}")]
    UpstreamBody(String),

    /// Missing or invalid configuration.
    #[error("configuration error: {0}")]
    Config(String),
}

impl ProxyError {
    fn status(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let body = match &self {
            Self::MethodNotAllowed => json!({ "error": "Method not allowed" }),
            other => json!({ "error": "Proxy error", "details": other.to_string() }),
        };

        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_not_allowed_maps_to_405() {
        assert_eq!(
            ProxyError::MethodNotAllowed.status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
    }

    #[test]
    fn test_everything_else_maps_to_500() {
        assert_eq!(
            ProxyError::Upstream("connection refused".to_string()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ProxyError::BadForm("truncated".to_string()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
