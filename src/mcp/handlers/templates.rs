//! Job template tool handlers.

use serde_json::Value;

use super::{api_result, parse_payload, require_str};
use crate::mcp::core::{JpiMcpServer, JpiToolResult};
use crate::types::{
    NewTemplate, NewTemplateComponentRef, NewTemplateTask, TemplateComponentRefPatch,
    TemplatePatch, TemplateTaskPatch,
};

pub async fn handle_list_templates(server: &JpiMcpServer, _arguments: Value) -> JpiToolResult {
    api_result("list_templates", server.client.list_templates().await)
}

pub async fn handle_create_template(server: &JpiMcpServer, arguments: Value) -> JpiToolResult {
    let data: NewTemplate = match parse_payload(arguments) {
        Ok(d) => d,
        Err(e) => return e,
    };
    api_result("create_template", server.client.create_template(&data).await)
}

pub async fn handle_get_template(server: &JpiMcpServer, arguments: Value) -> JpiToolResult {
    let guid = match require_str(&arguments, "guid") {
        Ok(g) => g,
        Err(e) => return e,
    };
    api_result("get_template", server.client.get_template(guid).await)
}

pub async fn handle_update_template(server: &JpiMcpServer, arguments: Value) -> JpiToolResult {
    let guid = match require_str(&arguments, "guid") {
        Ok(g) => g.to_string(),
        Err(e) => return e,
    };
    let data: TemplatePatch = match parse_payload(arguments) {
        Ok(d) => d,
        Err(e) => return e,
    };
    api_result(
        "update_template",
        server.client.update_template(&guid, &data).await,
    )
}

pub async fn handle_delete_template(server: &JpiMcpServer, arguments: Value) -> JpiToolResult {
    let guid = match require_str(&arguments, "guid") {
        Ok(g) => g,
        Err(e) => return e,
    };
    api_result("delete_template", server.client.delete_template(guid).await)
}

pub async fn handle_get_template_task(server: &JpiMcpServer, arguments: Value) -> JpiToolResult {
    let template_guid = match require_str(&arguments, "templateGuid") {
        Ok(g) => g,
        Err(e) => return e,
    };
    let task_guid = match require_str(&arguments, "taskGuid") {
        Ok(g) => g,
        Err(e) => return e,
    };
    api_result(
        "get_template_task",
        server.client.get_template_task(template_guid, task_guid).await,
    )
}

pub async fn handle_add_template_task(server: &JpiMcpServer, arguments: Value) -> JpiToolResult {
    let template_guid = match require_str(&arguments, "templateGuid") {
        Ok(g) => g.to_string(),
        Err(e) => return e,
    };
    let data: NewTemplateTask = match parse_payload(arguments) {
        Ok(d) => d,
        Err(e) => return e,
    };
    api_result(
        "add_template_task",
        server.client.add_template_task(&template_guid, &data).await,
    )
}

pub async fn handle_update_template_task(
    server: &JpiMcpServer,
    arguments: Value,
) -> JpiToolResult {
    let template_guid = match require_str(&arguments, "templateGuid") {
        Ok(g) => g.to_string(),
        Err(e) => return e,
    };
    let task_guid = match require_str(&arguments, "taskGuid") {
        Ok(g) => g.to_string(),
        Err(e) => return e,
    };
    let data: TemplateTaskPatch = match parse_payload(arguments) {
        Ok(d) => d,
        Err(e) => return e,
    };
    api_result(
        "update_template_task",
        server
            .client
            .update_template_task(&template_guid, &task_guid, &data)
            .await,
    )
}

pub async fn handle_delete_template_task(
    server: &JpiMcpServer,
    arguments: Value,
) -> JpiToolResult {
    let template_guid = match require_str(&arguments, "templateGuid") {
        Ok(g) => g,
        Err(e) => return e,
    };
    let task_guid = match require_str(&arguments, "taskGuid") {
        Ok(g) => g,
        Err(e) => return e,
    };
    api_result(
        "delete_template_task",
        server
            .client
            .delete_template_task(template_guid, task_guid)
            .await,
    )
}

pub async fn handle_get_tcr(server: &JpiMcpServer, arguments: Value) -> JpiToolResult {
    let template_guid = match require_str(&arguments, "templateGuid") {
        Ok(g) => g,
        Err(e) => return e,
    };
    let tcr_guid = match require_str(&arguments, "tcrGuid") {
        Ok(g) => g,
        Err(e) => return e,
    };
    api_result("get_tcr", server.client.get_tcr(template_guid, tcr_guid).await)
}

pub async fn handle_add_tcr(server: &JpiMcpServer, mut arguments: Value) -> JpiToolResult {
    let template_guid = match require_str(&arguments, "templateGuid") {
        Ok(g) => g.to_string(),
        Err(e) => return e,
    };
    // The tool takes ComponentGuid, the wire shape calls it Component.
    if let Some(obj) = arguments.as_object_mut()
        && let Some(guid) = obj.remove("ComponentGuid")
    {
        obj.entry("Component").or_insert(guid);
    }
    let data: NewTemplateComponentRef = match parse_payload(arguments) {
        Ok(d) => d,
        Err(e) => return e,
    };
    api_result("add_tcr", server.client.add_tcr(&template_guid, &data).await)
}

pub async fn handle_update_tcr(server: &JpiMcpServer, arguments: Value) -> JpiToolResult {
    let template_guid = match require_str(&arguments, "templateGuid") {
        Ok(g) => g.to_string(),
        Err(e) => return e,
    };
    let tcr_guid = match require_str(&arguments, "tcrGuid") {
        Ok(g) => g.to_string(),
        Err(e) => return e,
    };
    let data: TemplateComponentRefPatch = match parse_payload(arguments) {
        Ok(d) => d,
        Err(e) => return e,
    };
    api_result(
        "update_tcr",
        server.client.update_tcr(&template_guid, &tcr_guid, &data).await,
    )
}

pub async fn handle_delete_tcr(server: &JpiMcpServer, arguments: Value) -> JpiToolResult {
    let template_guid = match require_str(&arguments, "templateGuid") {
        Ok(g) => g,
        Err(e) => return e,
    };
    let tcr_guid = match require_str(&arguments, "tcrGuid") {
        Ok(g) => g,
        Err(e) => return e,
    };
    api_result(
        "delete_tcr",
        server.client.delete_tcr(template_guid, tcr_guid).await,
    )
}
