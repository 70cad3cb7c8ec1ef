//! OS signal handling.
//!
//! SIGINT (Ctrl+C) and, on Unix, SIGTERM both end the serve loop. The
//! handlers are registered by [`ShutdownSignal::install`], before the
//! startup line is printed, so a signal sent as soon as the line appears is
//! never lost to the default action. A handler that fails to install is
//! logged and never fires; the other one still works.

#[cfg(unix)]
use tokio::signal::unix::{signal, Signal, SignalKind};

/// Registered termination signal handlers.
#[derive(Debug)]
pub struct ShutdownSignal {
    #[cfg(unix)]
    interrupt: Option<Signal>,
    #[cfg(unix)]
    terminate: Option<Signal>,
}

impl ShutdownSignal {
    /// Register the handlers now. Must be called from within a Tokio runtime.
    #[cfg(unix)]
    pub fn install() -> Self {
        Self {
            interrupt: register(SignalKind::interrupt(), "SIGINT"),
            terminate: register(SignalKind::terminate(), "SIGTERM"),
        }
    }

    #[cfg(not(unix))]
    pub fn install() -> Self {
        Self {}
    }

    /// Wait until a termination signal arrives.
    #[cfg(unix)]
    pub async fn recv(self) {
        tokio::select! {
            _ = wait(self.interrupt) => tracing::info!(signal = "SIGINT", "Shutdown signal received"),
            _ = wait(self.terminate) => tracing::info!(signal = "SIGTERM", "Shutdown signal received"),
        }
    }

    #[cfg(not(unix))]
    pub async fn recv(self) {
        match tokio::signal::ctrl_c().await {
            Ok(()) => tracing::info!(signal = "SIGINT", "Shutdown signal received"),
            Err(e) => {
                tracing::error!(error = %e, "Failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
        }
    }
}

#[cfg(unix)]
fn register(kind: SignalKind, name: &'static str) -> Option<Signal> {
    match signal(kind) {
        Ok(handler) => Some(handler),
        Err(e) => {
            tracing::error!(signal = name, error = %e, "Failed to install signal handler");
            None
        }
    }
}

#[cfg(unix)]
async fn wait(handler: Option<Signal>) {
    match handler {
        Some(mut handler) => {
            handler.recv().await;
        }
        None => std::future::pending::<()>().await,
    }
}
