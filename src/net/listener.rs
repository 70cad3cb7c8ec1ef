//! TCP listener setup.
//!
//! # Responsibilities
//! - Resolve and bind the configured `host:port`
//! - Report bind failures (port in use, permission denied) with the address

use tokio::net::TcpListener;
use thiserror::Error;

use crate::config::ListenerConfig;

/// Error type for listener operations.
#[derive(Debug, Error)]
pub enum ListenerError {
    /// Failed to bind to address.
    #[error("Failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },
}

impl ListenerError {
    /// The underlying IO error kind (e.g. `AddrInUse`).
    pub fn kind(&self) -> std::io::ErrorKind {
        match self {
            ListenerError::Bind { source, .. } => source.kind(),
        }
    }
}

/// Bind a TCP listener to the configured address.
pub async fn bind(config: &ListenerConfig) -> Result<TcpListener, ListenerError> {
    let address = config.address();
    let bind_error = |source| ListenerError::Bind {
        address: address.clone(),
        source,
    };

    let listener = TcpListener::bind((config.host.as_str(), config.port))
        .await
        .map_err(bind_error)?;
    let local_addr = listener.local_addr().map_err(bind_error)?;

    tracing::info!(address = %local_addr, "Listener bound");

    Ok(listener)
}
