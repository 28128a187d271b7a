//! HTTP surface of the upload proxy.
//!
//! One route: `POST /api/analysis` with a multipart body. Anything else
//! on the route is rejected with the 405 JSON envelope.

use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};

use crate::error::{ProxyError, ProxyResult};
use crate::forward::{AnalysisForm, Forwarder, ImagePart};

/// Builds the proxy router over a configured forwarder.
pub fn router(forwarder: Forwarder) -> Router {
    Router::new()
        .route(
            "/api/analysis",
            post(analysis_handler).fallback(method_not_allowed),
        )
        .with_state(forwarder)
}

async fn analysis_handler(
    State(forwarder): State<Forwarder>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    // A non-multipart body must still come back as the JSON envelope, so
    // the extractor's rejection is caught here instead of short-circuiting
    // the handler
    let outcome = match multipart {
        Ok(multipart) => proxy_upload(forwarder, multipart).await,
        Err(rejection) => Err(ProxyError::BadForm(rejection.body_text())),
    };

    match outcome {
        Ok(response) => response,
        Err(err) => {
            tracing::error!(error = %err, "analysis upload failed");
            err.into_response()
        }
    }
}

async fn method_not_allowed() -> ProxyError {
    ProxyError::MethodNotAllowed
}

async fn proxy_upload(forwarder: Forwarder, mut multipart: Multipart) -> ProxyResult<Response> {
    let form = read_form(&mut multipart).await?;
    let (status, body) = forwarder.forward(form).await?;

    // reqwest and axum share the http crate, but convert defensively in
    // case the status is an extension code
    let status =
        StatusCode::from_u16(status.as_u16()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    Ok((status, Json(body)).into_response())
}

async fn read_form(multipart: &mut Multipart) -> ProxyResult<AnalysisForm> {
    let bad_form = |err: axum::extract::multipart::MultipartError| {
        ProxyError::BadForm(err.to_string())
    };

    let mut form = AnalysisForm::default();

    while let Some(field) = multipart.next_field().await.map_err(bad_form)? {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };

        match name.as_str() {
            "username" => form.username = Some(field.text().await.map_err(bad_form)?),
            "email" => form.email = Some(field.text().await.map_err(bad_form)?),
            "description" => form.description = Some(field.text().await.map_err(bad_form)?),
            "image" => {
                let file_name = field.file_name().unwrap_or("upload.bin").to_string();
                let bytes = field.bytes().await.map_err(bad_form)?.to_vec();
                form.image = Some(ImagePart { file_name, bytes });
            }
            // Unknown fields are drained and ignored
            _ => {
                let _ = field.bytes().await.map_err(bad_form)?;
            }
        }
    }

    Ok(form)
}
