//! Startup orchestration.
//!
//! # Responsibilities
//! - Validate configuration
//! - Bind the listener (`Starting`)
//! - Spawn the serve loop (`Serving`) and hand back a [`ServerHandle`]
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal, nothing is retried
//! - The startup line on stdout is printed only once the port is bound

use std::future::Future;
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;
use tokio::task::{JoinError, JoinHandle};

use crate::config::validation::join_errors;
use crate::config::{validate_config, ServerConfig, ValidationError};
use crate::http::HttpServer;
use crate::lifecycle::signals::ShutdownSignal;
use crate::lifecycle::Shutdown;
use crate::net::{self, ListenerError};

/// Errors that keep the server from reaching the serving state.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Invalid configuration: {}", join_errors(.0))]
    InvalidConfig(Vec<ValidationError>),
    #[error(transparent)]
    Listener(#[from] ListenerError),
}

/// Errors reported when stopping a running server.
#[derive(Debug, Error)]
pub enum ServeError {
    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Server task failed: {0}")]
    Join(#[from] JoinError),
    #[error("Requests still in flight after {0:?}, server task aborted")]
    GraceExceeded(Duration),
}

/// A running server.
///
/// Dropping the handle without calling [`ServerHandle::shutdown`] closes the
/// shutdown channel, so the server stops accepting and drains on its own.
#[derive(Debug)]
pub struct ServerHandle {
    local_addr: SocketAddr,
    shutdown: Shutdown,
    task: JoinHandle<Result<(), std::io::Error>>,
    grace: Duration,
}

impl ServerHandle {
    /// Bind the configured address and start serving in a background task.
    pub async fn start(config: ServerConfig) -> Result<Self, StartupError> {
        validate_config(&config).map_err(StartupError::InvalidConfig)?;

        let listener = net::bind(&config.listener).await?;
        let local_addr = listener.local_addr().map_err(|source| ListenerError::Bind {
            address: config.listener.address(),
            source,
        })?;

        let grace = config.timeouts.shutdown_grace();
        let shutdown = Shutdown::new();
        let server = HttpServer::new(config);
        let task = tokio::spawn(server.run(listener, shutdown.subscribe()));

        Ok(Self {
            local_addr,
            shutdown,
            task,
            grace,
        })
    }

    /// The address actually bound (resolves port `0`).
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub fn port(&self) -> u16 {
        self.local_addr.port()
    }

    /// Whether the serve loop is still running.
    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }

    /// Stop accepting, drain in-flight requests, and wait for the serve loop.
    ///
    /// The loop is aborted if draining takes longer than the grace period.
    pub async fn shutdown(mut self) -> Result<(), ServeError> {
        tracing::info!(address = %self.local_addr, "Stopping server");
        tracing::debug!(
            subscribers = self.shutdown.receiver_count(),
            "Broadcasting shutdown"
        );
        self.shutdown.trigger();

        match tokio::time::timeout(self.grace, &mut self.task).await {
            Ok(joined) => {
                joined??;
                Ok(())
            }
            Err(_) => {
                tracing::warn!(grace = ?self.grace, "Grace period elapsed, aborting server");
                self.task.abort();
                Err(ServeError::GraceExceeded(self.grace))
            }
        }
    }
}

/// Print the single startup line to standard output.
pub fn announce(port: u16) {
    println!("Server running on port {}", port);
}

/// Start the server, announce it, and serve until `stop` resolves.
pub async fn run_until<F>(config: ServerConfig, stop: F) -> Result<(), StartupError>
where
    F: Future<Output = ()>,
{
    let handle = ServerHandle::start(config).await?;
    announce(handle.port());

    stop.await;

    if let Err(e) = handle.shutdown().await {
        tracing::warn!(error = %e, "Server did not shut down cleanly");
    }
    Ok(())
}

/// Start the server and serve until SIGINT/SIGTERM.
///
/// Signal handlers are registered before the listener is bound, so they are
/// in place by the time the startup line is printed.
pub async fn run(config: ServerConfig) -> Result<(), StartupError> {
    let signal = ShutdownSignal::install();
    run_until(config, signal.recv()).await
}
