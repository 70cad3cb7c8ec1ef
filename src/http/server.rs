//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router (one route plus a 404 fallback)
//! - Wire up middleware (tracing, request timeout)
//! - Serve connections on a bound listener until shut down

use axum::{routing::any, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::http::ping::{not_found, ping};

/// HTTP server answering the liveness check.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            router: Self::build_router(&config),
        }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// `/ping` takes every method so that axum never answers with `405`
    /// or an `Allow` header; the handler itself picks `GET`. Every other
    /// path falls back to `404`.
    #[allow(deprecated)]
    fn build_router(config: &ServerConfig) -> Router {
        let router = Router::new()
            .route("/ping", any(ping))
            .fallback(not_found);

        let timeout = TimeoutLayer::new(config.timeouts.request());
        if config.observability.trace_requests {
            router.layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(timeout),
            )
        } else {
            router.layer(timeout)
        }
    }

    /// A clone of the fully layered router.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server on the given listener until `shutdown` fires or its
    /// sender is dropped, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("HTTP server draining");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
