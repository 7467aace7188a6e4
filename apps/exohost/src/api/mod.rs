//! # HTTP API
//!
//! axum server exposing the calculator form and a JSON endpoint.
//!
//! | Method | Path               | Purpose                         |
//! |--------|--------------------|---------------------------------|
//! | GET    | `/`                | Form page with placeholder      |
//! | POST   | `/calculate`       | Form submit, page with result   |
//! | POST   | `/api/probability` | JSON evaluation                 |
//! | GET    | `/health`          | Liveness                        |

pub mod handlers;
pub mod types;

use axum::routing::{get, post};
use axum::Router;
use exohost_core::Model;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Default bind host.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default bind port.
pub const DEFAULT_PORT: u16 = 7860;

/// Shared handler state. The model is immutable and `Copy`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppState {
    pub model: Model,
}

impl AppState {
    #[must_use]
    pub fn new(model: Model) -> Self {
        Self { model }
    }
}

/// Where the server listens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// `host:port` as passed to the listener.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Build the router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/calculate", post(handlers::calculate))
        .route("/api/probability", post(handlers::probability))
        .route("/health", get(handlers::health))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

/// Bind and serve until Ctrl-C or SIGTERM.
pub async fn run_server(config: &ServerConfig, state: AppState) -> std::io::Result<()> {
    let listener = TcpListener::bind(config.bind_address()).await?;
    let local: SocketAddr = listener.local_addr()?;
    tracing::info!(address = %local, "listening");

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_binds_loopback() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_address(), "127.0.0.1:7860");
    }

    #[test]
    fn default_state_uses_published_model() {
        assert_eq!(AppState::default().model, Model::published());
    }
}
