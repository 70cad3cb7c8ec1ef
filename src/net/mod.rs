//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! ListenerConfig (host, port)
//!     → listener.rs (resolve, bind)
//!     → TcpListener handed to the HTTP layer
//! ```
//!
//! # Design Decisions
//! - Binding is the only fatal runtime error; it is never retried
//! - Plaintext TCP only

pub mod listener;

pub use listener::{bind, ListenerError};
