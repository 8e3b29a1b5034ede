//! # JPI MCP Server
//!
//! Binary entry point: reads the connection settings from the environment,
//! builds the MCP server and serves it over stdio.
//!
//! ## Usage
//!
//! ```bash
//! JPI_API_TOKEN=<api-key> cargo run --bin jpi-mcp
//! ```
//!
//! `JPI_BASE_URL` overrides the default `https://api.just-plan-it.com`,
//! which is useful for staging accounts and tests.
//!
//! Logging goes to stderr via `env_logger`, so the MCP protocol on stdout
//! stays clean. Set `RUST_LOG=jpi_mcp=debug` to see per-request lines.

use std::process::exit;

use log::error;

use jpi_mcp::client::JpiClient;
use jpi_mcp::config::JpiClientConfig;
use jpi_mcp::mcp::JpiMcpServer;

#[tokio::main]
async fn main() {
    env_logger::init();

    let config = match JpiClientConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            exit(1);
        }
    };

    let server = JpiMcpServer::new(JpiClient::new(config));
    if let Err(e) = server.run_stdio().await {
        error!("stdio transport failed: {e}");
        exit(1);
    }
}
