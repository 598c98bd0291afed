//! HTTP Server
//!
//! Builds the router and runs it until shutdown.

use std::future::Future;
use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::engine::Engine;
use crate::error::{Result, StashError};

use super::handlers::{
    delete_file, extract_file, method_not_allowed, save_file, DELETE_PATH, EXTRACT_PATH,
    SAVE_PATH,
};

/// Build the application router for `engine`
pub fn router(engine: Arc<Engine>) -> Router {
    let body_limit = engine.config().max_body_bytes;

    Router::new()
        .route(SAVE_PATH, post(save_file))
        .route(DELETE_PATH, post(delete_file))
        .route(EXTRACT_PATH, post(extract_file))
        .method_not_allowed_fallback(method_not_allowed)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(engine)
}

/// HTTP server for filestash
pub struct Server {
    engine: Arc<Engine>,
}

impl Server {
    /// Create a new server for the given engine
    pub fn new(engine: Arc<Engine>) -> Self {
        Self { engine }
    }

    /// Serve until SIGTERM or Ctrl+C
    pub async fn run(self) -> Result<()> {
        self.run_until(shutdown_signal()).await
    }

    /// Serve until `shutdown` resolves, then finish in-flight requests
    pub async fn run_until<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.engine.config().listen_addr.clone();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| StashError::Network(format!("failed to bind {addr}: {e}")))?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, router(self.engine))
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| StashError::Network(e.to_string()))?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
pub async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down gracefully...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down gracefully...");
        },
    }
}
