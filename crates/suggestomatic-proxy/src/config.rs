//! Proxy configuration from environment variables.

use std::env;

use crate::error::{ProxyError, ProxyResult};

const DEFAULT_UPSTREAM_URL: &str =
    "https://q7olippj80.execute-api.ap-south-1.amazonaws.com/dev/api/analysis/";
const DEFAULT_PORT: u16 = 3001;

/// Runtime configuration for the upload proxy.
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    /// Fixed external analysis endpoint the proxy forwards to.
    pub upstream_url: String,
    /// Secret sent upstream as `Authorization: Token <secret>`.
    pub api_token: String,
    /// Port to listen on.
    pub port: u16,
}

impl ProxyConfig {
    /// Loads configuration from environment variables.
    ///
    /// - `ANALYSIS_API_TOKEN` (required)
    /// - `ANALYSIS_UPSTREAM_URL` (defaults to the analysis endpoint)
    /// - `PROXY_PORT` (defaults to 3001)
    pub fn try_from_env() -> ProxyResult<Self> {
        let api_token = env::var("ANALYSIS_API_TOKEN").map_err(|_| {
            ProxyError::Config("ANALYSIS_API_TOKEN not found in environment".to_string())
        })?;

        let upstream_url =
            env::var("ANALYSIS_UPSTREAM_URL").unwrap_or_else(|_| DEFAULT_UPSTREAM_URL.to_string());

        let port = env::var("PROXY_PORT")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Ok(Self {
            upstream_url,
            api_token,
            port,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ProxyConfig {
            upstream_url: DEFAULT_UPSTREAM_URL.to_string(),
            api_token: "secret".to_string(),
            port: DEFAULT_PORT,
        };

        assert!(config.upstream_url.ends_with("/api/analysis/"));
        assert_eq!(config.port, 3001);
    }
}
