//! Settings tool handlers.

use serde_json::Value;

use super::{api_result, parse_payload};
use crate::mcp::core::{JpiMcpServer, JpiToolResult};
use crate::types::SettingsPatch;

pub async fn handle_get_settings(server: &JpiMcpServer, _arguments: Value) -> JpiToolResult {
    api_result("get_settings", server.client.get_settings().await)
}

pub async fn handle_update_settings(server: &JpiMcpServer, arguments: Value) -> JpiToolResult {
    let data: SettingsPatch = match parse_payload(arguments) {
        Ok(d) => d,
        Err(e) => return e,
    };
    api_result("update_settings", server.client.update_settings(&data).await)
}
