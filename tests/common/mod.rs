//! Shared utilities for integration tests.

use std::time::Duration;

use ping_server::{ServerConfig, ServerHandle};

/// Start a server on an OS-assigned loopback port.
pub async fn start_server() -> ServerHandle {
    ServerHandle::start(ServerConfig::with_port(0))
        .await
        .expect("server failed to start")
}

/// Client that never goes through a system proxy and gives up after 2s.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .timeout(Duration::from_secs(2))
        .build()
        .unwrap()
}

#[allow(dead_code)]
pub fn url(handle: &ServerHandle, path: &str) -> String {
    format!("http://{}{}", handle.local_addr(), path)
}
