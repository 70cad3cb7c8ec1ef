//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TcpListener
//!     → server.rs (axum::serve, middleware, graceful shutdown)
//!     → Router: "/ping" → ping.rs
//!               anything else → 404, empty body
//!     → Send to client
//! ```

pub mod ping;
pub mod server;

pub use ping::PingResponse;
pub use server::HttpServer;
