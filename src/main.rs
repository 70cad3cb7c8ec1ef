//! Ping server binary.
//!
//! ```text
//! ping-server [--config <PATH>] [--host <HOST>] [--port <PORT>]
//! ```
//!
//! Prints `Server running on port <port>` once bound, then serves until
//! SIGINT/SIGTERM. Logs go to stderr.

use clap::Parser;
use std::path::PathBuf;

use ping_server::config::{load_config, ServerConfig};
use ping_server::{lifecycle, observability};

#[derive(Parser, Debug)]
#[command(name = "ping-server")]
#[command(version, about = "Liveness-check HTTP server", long_about = None)]
struct Cli {
    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Bind host (default 127.0.0.1)
    #[arg(long)]
    host: Option<String>,

    /// Listen port (default 8000)
    #[arg(short, long)]
    port: Option<u16>,
}

impl Cli {
    /// Defaults, then the config file, then flags.
    fn resolve_config(&self) -> Result<ServerConfig, Box<dyn std::error::Error>> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => ServerConfig::default(),
        };

        if let Some(host) = &self.host {
            config.listener.host = host.clone();
        }
        if let Some(port) = self.port {
            config.listener.port = port;
        }

        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    observability::logging::init(&config.observability)?;

    tracing::info!(
        host = %config.listener.host,
        port = config.listener.port,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    lifecycle::run(config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
