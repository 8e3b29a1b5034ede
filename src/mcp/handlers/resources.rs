//! Resource, resource group and resource category tool handlers.

use serde_json::Value;

use super::{api_result, parse_payload, require_str};
use crate::mcp::core::{JpiMcpServer, JpiToolResult};
use crate::types::{
    NewResource, NewResourceCategory, NewResourceGroup, ResourceCategoryPatch, ResourceGroupPatch,
    ResourcePatch,
};

pub async fn handle_list_resource_categories(
    server: &JpiMcpServer,
    _arguments: Value,
) -> JpiToolResult {
    api_result(
        "list_resource_categories",
        server.client.list_resource_categories().await,
    )
}

pub async fn handle_create_resource_category(
    server: &JpiMcpServer,
    arguments: Value,
) -> JpiToolResult {
    let data: NewResourceCategory = match parse_payload(arguments) {
        Ok(d) => d,
        Err(e) => return e,
    };
    api_result(
        "create_resource_category",
        server.client.create_resource_category(&data).await,
    )
}

pub async fn handle_get_resource_category(
    server: &JpiMcpServer,
    arguments: Value,
) -> JpiToolResult {
    let guid = match require_str(&arguments, "guid") {
        Ok(g) => g,
        Err(e) => return e,
    };
    api_result(
        "get_resource_category",
        server.client.get_resource_category(guid).await,
    )
}

pub async fn handle_update_resource_category(
    server: &JpiMcpServer,
    arguments: Value,
) -> JpiToolResult {
    let guid = match require_str(&arguments, "guid") {
        Ok(g) => g.to_string(),
        Err(e) => return e,
    };
    let data: ResourceCategoryPatch = match parse_payload(arguments) {
        Ok(d) => d,
        Err(e) => return e,
    };
    api_result(
        "update_resource_category",
        server.client.update_resource_category(&guid, &data).await,
    )
}

pub async fn handle_delete_resource_category(
    server: &JpiMcpServer,
    arguments: Value,
) -> JpiToolResult {
    let guid = match require_str(&arguments, "guid") {
        Ok(g) => g,
        Err(e) => return e,
    };
    api_result(
        "delete_resource_category",
        server.client.delete_resource_category(guid).await,
    )
}

pub async fn handle_list_resource_groups(
    server: &JpiMcpServer,
    _arguments: Value,
) -> JpiToolResult {
    api_result(
        "list_resource_groups",
        server.client.list_resource_groups().await,
    )
}

pub async fn handle_create_resource_group(
    server: &JpiMcpServer,
    arguments: Value,
) -> JpiToolResult {
    let data: NewResourceGroup = match parse_payload(arguments) {
        Ok(d) => d,
        Err(e) => return e,
    };
    api_result(
        "create_resource_group",
        server.client.create_resource_group(&data).await,
    )
}

pub async fn handle_get_resource_group(server: &JpiMcpServer, arguments: Value) -> JpiToolResult {
    let guid = match require_str(&arguments, "guid") {
        Ok(g) => g,
        Err(e) => return e,
    };
    api_result(
        "get_resource_group",
        server.client.get_resource_group(guid).await,
    )
}

pub async fn handle_update_resource_group(
    server: &JpiMcpServer,
    arguments: Value,
) -> JpiToolResult {
    let guid = match require_str(&arguments, "guid") {
        Ok(g) => g.to_string(),
        Err(e) => return e,
    };
    let data: ResourceGroupPatch = match parse_payload(arguments) {
        Ok(d) => d,
        Err(e) => return e,
    };
    api_result(
        "update_resource_group",
        server.client.update_resource_group(&guid, &data).await,
    )
}

pub async fn handle_delete_resource_group(
    server: &JpiMcpServer,
    arguments: Value,
) -> JpiToolResult {
    let guid = match require_str(&arguments, "guid") {
        Ok(g) => g,
        Err(e) => return e,
    };
    api_result(
        "delete_resource_group",
        server.client.delete_resource_group(guid).await,
    )
}

pub async fn handle_list_resources(server: &JpiMcpServer, _arguments: Value) -> JpiToolResult {
    api_result("list_resources", server.client.list_resources().await)
}

pub async fn handle_create_resource(server: &JpiMcpServer, arguments: Value) -> JpiToolResult {
    let data: NewResource = match parse_payload(arguments) {
        Ok(d) => d,
        Err(e) => return e,
    };
    api_result("create_resource", server.client.create_resource(&data).await)
}

pub async fn handle_get_resource(server: &JpiMcpServer, arguments: Value) -> JpiToolResult {
    let guid = match require_str(&arguments, "guid") {
        Ok(g) => g,
        Err(e) => return e,
    };
    api_result("get_resource", server.client.get_resource(guid).await)
}

pub async fn handle_update_resource(server: &JpiMcpServer, arguments: Value) -> JpiToolResult {
    let guid = match require_str(&arguments, "guid") {
        Ok(g) => g.to_string(),
        Err(e) => return e,
    };
    let data: ResourcePatch = match parse_payload(arguments) {
        Ok(d) => d,
        Err(e) => return e,
    };
    api_result(
        "update_resource",
        server.client.update_resource(&guid, &data).await,
    )
}

pub async fn handle_delete_resource(server: &JpiMcpServer, arguments: Value) -> JpiToolResult {
    let guid = match require_str(&arguments, "guid") {
        Ok(g) => g,
        Err(e) => return e,
    };
    api_result("delete_resource", server.client.delete_resource(guid).await)
}
