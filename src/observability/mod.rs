//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured `tracing` events, written to stderr
//! - stdout is reserved for the single startup line
//! - Per-request spans come from `tower_http::trace::TraceLayer`

pub mod logging;
