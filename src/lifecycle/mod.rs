//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Validate config → Bind listener → Spawn serve loop → ServerHandle
//!
//! Shutdown (shutdown.rs):
//!     trigger() or handle dropped → Stop accepting → Drain → Exit
//!
//! Signals (signals.rs):
//!     Handlers registered before bind → SIGTERM/SIGINT → graceful shutdown
//! ```
//!
//! # Design Decisions
//! - The running server is an explicit handle owned by the caller
//! - Bind failure is fatal and surfaces as `StartupError`
//! - Shutdown has a grace period: the serve task is aborted after it

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
pub use signals::ShutdownSignal;
pub use startup::{run, run_until, ServeError, ServerHandle, StartupError};
