//! MCP (Model Context Protocol) surface of the JPI client.
//!
//! This module exposes every JPI REST endpoint as a structured tool that AI
//! agents can discover and execute, plus a few locally computed views that
//! condense the job list for token-constrained callers.
//!
//! ## Module Structure
//!
//! - `core` - Core types (McpServerInfo, JpiToolResult, JpiMcpServer)
//! - `protocol` - Tool discovery and dispatch
//! - `stdio` - Line-delimited JSON-RPC transport over stdin/stdout
//! - `tools/` - JSON schema definitions for tool discovery, one file per
//!   entity family
//! - `handlers/` - Tool execution handlers, mirroring the tools/ layout
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use jpi_mcp::client::JpiClient;
//! use jpi_mcp::config::JpiClientConfig;
//! use jpi_mcp::mcp::JpiMcpServer;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = JpiClientConfig::new("https://api.just-plan-it.com", "secret");
//!     let server = JpiMcpServer::new(JpiClient::new(config));
//!
//!     let result = server
//!         .execute_tool("jpi_get_job", json!({"guid": "1f0c..."}))
//!         .await;
//!     if result.success {
//!         println!("{}", result.content);
//!     }
//! }
//! ```

pub mod core;
pub mod handlers;
pub mod protocol;
pub mod stdio;
pub mod tools;

#[cfg(test)]
mod tests;

pub use core::{JpiMcpServer, JpiToolResult, McpServerInfo};
