//! Minimal liveness-check HTTP server.
//!
//! Answers `GET /ping` with `{"message":"pong"}` and everything else with
//! an empty `404`.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;

pub use config::ServerConfig;
pub use http::{HttpServer, PingResponse};
pub use lifecycle::{run, ServerHandle, Shutdown};
