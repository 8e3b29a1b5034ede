//! Change-log event tool handlers.

use serde_json::Value;

use super::{api_result, require_str};
use crate::mcp::core::{JpiMcpServer, JpiToolResult};

pub async fn handle_get_events(server: &JpiMcpServer, arguments: Value) -> JpiToolResult {
    let created_after = match require_str(&arguments, "createdAfter") {
        Ok(v) => v,
        Err(e) => return e,
    };
    api_result("get_events", server.client.get_events(created_after).await)
}

pub async fn handle_get_events_filtered(server: &JpiMcpServer, arguments: Value) -> JpiToolResult {
    let created_after = match require_str(&arguments, "createdAfter") {
        Ok(v) => v,
        Err(e) => return e,
    };
    let event_type = match require_str(&arguments, "eventType") {
        Ok(v) => v,
        Err(e) => return e,
    };
    api_result(
        "get_events_filtered",
        server
            .client
            .get_events_filtered(created_after, event_type)
            .await,
    )
}
