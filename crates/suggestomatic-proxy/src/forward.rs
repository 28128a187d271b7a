//! Upstream forwarding.
//!
//! One configurable forwarding function: rebuild the multipart body with
//! the original field names, attach the credential header, relay the
//! upstream status and JSON body verbatim. No retry, no caching.

use std::time::Duration;

use reqwest::multipart;
use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::config::ProxyConfig;
use crate::error::{ProxyError, ProxyResult};

/// The original proxy left the upstream call unbounded; a fixed timeout
/// keeps a stalled analysis from pinning a handler forever. Uploading an
/// image and waiting for the analysis can legitimately take a while, so
/// this is generous rather than a few seconds.
const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(30);

/// Fields accepted by the analysis upload form.
#[derive(Debug, Default)]
pub struct AnalysisForm {
    pub username: Option<String>,
    pub email: Option<String>,
    pub description: Option<String>,
    pub image: Option<ImagePart>,
}

/// The uploaded image with its original filename.
#[derive(Debug)]
pub struct ImagePart {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Stateless forwarder to the fixed external analysis endpoint.
#[derive(Clone)]
pub struct Forwarder {
    client: Client,
    upstream_url: String,
    api_token: String,
}

impl Forwarder {
    pub fn new(config: &ProxyConfig) -> ProxyResult<Self> {
        let client = Client::builder()
            .timeout(UPSTREAM_TIMEOUT)
            .build()
            .map_err(|err| ProxyError::Config(format!("failed to build HTTP client: {err}")))?;

        Ok(Self {
            client,
            upstream_url: config.upstream_url.clone(),
            api_token: config.api_token.clone(),
        })
    }

    /// Re-encodes the form as a fresh multipart body and performs a single
    /// best-effort forward.
    ///
    /// Returns the upstream status code and decoded JSON body unchanged.
    /// The content-type (including the multipart boundary) is set by the
    /// client from the rebuilt body.
    pub async fn forward(&self, form: AnalysisForm) -> ProxyResult<(StatusCode, Value)> {
        let mut parts = multipart::Form::new();

        if let Some(username) = form.username {
            parts = parts.text("username", username);
        }
        if let Some(email) = form.email {
            parts = parts.text("email", email);
        }
        if let Some(description) = form.description {
            parts = parts.text("description", description);
        }
        if let Some(image) = form.image {
            let mime = mime_guess::from_path(&image.file_name).first_or_octet_stream();
            let part = multipart::Part::bytes(image.bytes)
                .file_name(image.file_name)
                .mime_str(mime.essence_str())
                .map_err(|err| ProxyError::BadForm(format!("invalid image content type: {err}")))?;
            parts = parts.part("image", part);
        }

        let response = self
            .client
            .post(&self.upstream_url)
            .header("Authorization", format!("Token {}", self.api_token))
            .multipart(parts)
            .send()
            .await
            .map_err(|err| ProxyError::Upstream(err.to_string()))?;

        let status = response.status();
        let body: Value = response
            .json()
            .await
            .map_err(|err| ProxyError::UpstreamBody(err.to_string()))?;

        Ok((status, body))
    }
}
