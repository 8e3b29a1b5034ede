//! Core MCP types.
//!
//! The foundational pieces the protocol and handler modules build on: the
//! server wrapper around a [`JpiClient`], its discovery metadata, and the
//! structured result every tool execution returns.

use serde_json::Value;

use crate::client::JpiClient;

/// Metadata the MCP handshake reports to connecting agents.
#[derive(Debug, Clone)]
pub struct McpServerInfo {
    pub name: String,
    pub version: String,
    pub description: String,
}

impl Default for McpServerInfo {
    fn default() -> Self {
        Self {
            name: "jpi-mcp".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            description: "MCP server for the Just Plan It production scheduling API".to_string(),
        }
    }
}

/// Outcome of one tool execution.
///
/// `content` carries the remote entity data on success or a structured
/// error object on failure; `metadata` adds operation context agents can
/// use for decision making.
#[derive(Debug, Clone)]
pub struct JpiToolResult {
    pub success: bool,
    pub content: Value,
    pub metadata: Option<Value>,
}

/// MCP server wrapper around the JPI REST client.
///
/// This is the main entry point of the crate: it owns the HTTP client and
/// exposes the tool catalog plus the dispatch and transport methods defined
/// in the `protocol` and `stdio` modules.
pub struct JpiMcpServer {
    pub(crate) client: JpiClient,
    pub(crate) server_info: McpServerInfo,
}

impl JpiMcpServer {
    pub fn new(client: JpiClient) -> Self {
        Self {
            client,
            server_info: McpServerInfo::default(),
        }
    }

    /// Like [`Self::new`] but with custom handshake metadata.
    pub fn with_info(client: JpiClient, server_info: McpServerInfo) -> Self {
        Self {
            client,
            server_info,
        }
    }

    pub fn server_info(&self) -> &McpServerInfo {
        &self.server_info
    }
}
