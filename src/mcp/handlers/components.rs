//! Component tool handlers.

use serde_json::Value;

use super::{api_result, parse_payload, require_str};
use crate::mcp::core::{JpiMcpServer, JpiToolResult};
use crate::types::{ComponentPatch, ComponentTaskPatch, NewComponent, NewComponentTask};

pub async fn handle_list_components(server: &JpiMcpServer, _arguments: Value) -> JpiToolResult {
    api_result("list_components", server.client.list_components().await)
}

pub async fn handle_create_component(server: &JpiMcpServer, arguments: Value) -> JpiToolResult {
    let data: NewComponent = match parse_payload(arguments) {
        Ok(d) => d,
        Err(e) => return e,
    };
    api_result("create_component", server.client.create_component(&data).await)
}

pub async fn handle_get_component(server: &JpiMcpServer, arguments: Value) -> JpiToolResult {
    let guid = match require_str(&arguments, "guid") {
        Ok(g) => g,
        Err(e) => return e,
    };
    api_result("get_component", server.client.get_component(guid).await)
}

pub async fn handle_update_component(server: &JpiMcpServer, arguments: Value) -> JpiToolResult {
    let guid = match require_str(&arguments, "guid") {
        Ok(g) => g.to_string(),
        Err(e) => return e,
    };
    let data: ComponentPatch = match parse_payload(arguments) {
        Ok(d) => d,
        Err(e) => return e,
    };
    api_result(
        "update_component",
        server.client.update_component(&guid, &data).await,
    )
}

pub async fn handle_delete_component(server: &JpiMcpServer, arguments: Value) -> JpiToolResult {
    let guid = match require_str(&arguments, "guid") {
        Ok(g) => g,
        Err(e) => return e,
    };
    api_result("delete_component", server.client.delete_component(guid).await)
}

pub async fn handle_get_component_task(server: &JpiMcpServer, arguments: Value) -> JpiToolResult {
    let component_guid = match require_str(&arguments, "componentGuid") {
        Ok(g) => g,
        Err(e) => return e,
    };
    let task_guid = match require_str(&arguments, "taskGuid") {
        Ok(g) => g,
        Err(e) => return e,
    };
    api_result(
        "get_component_task",
        server.client.get_component_task(component_guid, task_guid).await,
    )
}

pub async fn handle_add_component_task(server: &JpiMcpServer, arguments: Value) -> JpiToolResult {
    let component_guid = match require_str(&arguments, "componentGuid") {
        Ok(g) => g.to_string(),
        Err(e) => return e,
    };
    let data: NewComponentTask = match parse_payload(arguments) {
        Ok(d) => d,
        Err(e) => return e,
    };
    api_result(
        "add_component_task",
        server.client.add_component_task(&component_guid, &data).await,
    )
}

pub async fn handle_update_component_task(
    server: &JpiMcpServer,
    arguments: Value,
) -> JpiToolResult {
    let component_guid = match require_str(&arguments, "componentGuid") {
        Ok(g) => g.to_string(),
        Err(e) => return e,
    };
    let task_guid = match require_str(&arguments, "taskGuid") {
        Ok(g) => g.to_string(),
        Err(e) => return e,
    };
    let data: ComponentTaskPatch = match parse_payload(arguments) {
        Ok(d) => d,
        Err(e) => return e,
    };
    api_result(
        "update_component_task",
        server
            .client
            .update_component_task(&component_guid, &task_guid, &data)
            .await,
    )
}

pub async fn handle_delete_component_task(
    server: &JpiMcpServer,
    arguments: Value,
) -> JpiToolResult {
    let component_guid = match require_str(&arguments, "componentGuid") {
        Ok(g) => g,
        Err(e) => return e,
    };
    let task_guid = match require_str(&arguments, "taskGuid") {
        Ok(g) => g,
        Err(e) => return e,
    };
    api_result(
        "delete_component_task",
        server
            .client
            .delete_component_task(component_guid, task_guid)
            .await,
    )
}
