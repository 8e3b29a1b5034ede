//! MCP server for the Just Plan It (JPI) production scheduling API.
//!
//! The crate is a thin, fully typed bridge: it holds no scheduling state of
//! its own. Every entity lives in the remote JPI account; this server
//! exposes the REST endpoints as MCP tools, validates and shapes the
//! payloads, and relays results back to the agent.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐    ┌───────────────┐    ┌──────────────┐    ┌─────────┐
//! │  AI Agent   │───▶│  mcp (tools,  │───▶│  client      │───▶│ JPI API │
//! │  (stdio)    │    │  dispatch)    │    │  (reqwest)   │    │ (REST)  │
//! └─────────────┘    └───────────────┘    └──────────────┘    └─────────┘
//! ```
//!
//! - [`types`] - the remote data model: get/post/patch shapes per entity
//!   family, PascalCase on the wire
//! - [`client`] - one async method per REST endpoint
//! - [`mcp`] - tool catalog, dispatch and the stdio JSON-RPC transport
//! - [`config`] / [`error`] - connection settings and the error type
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use jpi_mcp::client::JpiClient;
//! use jpi_mcp::config::JpiClientConfig;
//! use jpi_mcp::mcp::JpiMcpServer;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = JpiClientConfig::from_env()?;
//!     let server = JpiMcpServer::new(JpiClient::new(config));
//!     server.run_stdio().await?;
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod mcp;
pub mod types;

pub use client::JpiClient;
pub use config::JpiClientConfig;
pub use error::{JpiError, JpiResult};
pub use mcp::{JpiMcpServer, JpiToolResult, McpServerInfo};
