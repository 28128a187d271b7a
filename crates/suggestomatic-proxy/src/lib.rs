//! Upload proxy for the skin analysis demo screen.
//!
//! A stateless forwarding service: one route accepts a multipart form
//! (`username`, `email`, optional `description`, optional `image` file),
//! rebuilds the multipart body, relays it to a fixed external analysis
//! endpoint with a static credential header, and returns the upstream
//! status code and JSON body unchanged. The upstream API itself is an
//! opaque collaborator; nothing here interprets its response.

use axum::http::header::CONTENT_TYPE;
use axum::http::Method;
use tokio::net::TcpListener;
use tokio::signal::ctrl_c;
#[cfg(unix)]
use tokio::signal::unix::{signal, SignalKind};
use tower_http::cors::CorsLayer;
use tracing::info;

pub mod config;
pub mod error;
pub mod forward;
pub mod routes;

pub use config::ProxyConfig;
pub use error::{ProxyError, ProxyResult};
pub use forward::{AnalysisForm, Forwarder, ImagePart};
pub use routes::router;

/// Reads configuration from the environment and serves the proxy until
/// interrupted.
pub async fn start_server() -> anyhow::Result<()> {
    let config = ProxyConfig::try_from_env()?;
    let forwarder = Forwarder::new(&config)?;

    // The browser demo calls this cross-origin
    let cors = CorsLayer::new()
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    let app = router(forwarder).layer(cors);

    let address = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&address).await?;
    info!("Upload proxy listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Upload proxy shut down");
    Ok(())
}

async fn shutdown_signal() {
    let interrupt = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = interrupt => {},
        _ = terminate => {},
    }
}
