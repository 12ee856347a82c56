//! Simple MCP Server Entry Point
//!
//! Starts the HTTP server after reading its bind configuration from the
//! environment.
//!
//! Environment Variables:
//! - HOST: Bind address (default: "127.0.0.1")
//! - PORT: Port number (default: 8000)
//! - WORKER_THREADS: Override the HTTP worker count (default: CPU count, max 16)
//! - RUST_LOG: Log filter for the tracing subscriber (default: "info")

use simple_mcp_server::core::{server, utils};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Initialize structured logging. The actix request logger emits through
    // the `log` bridge and lands in the same subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let host = utils::get_env_var("HOST", "127.0.0.1");
    let port = utils::get_env_var("PORT", "8000")
        .parse::<u16>()
        .unwrap_or(8000);

    server::run_server_http(host, port).await
}
