//! Locally answered overview tool. No remote round trip.

use serde_json::{Value, json};

use crate::mcp::core::{JpiMcpServer, JpiToolResult};

pub async fn handle_api_info(server: &JpiMcpServer, _arguments: Value) -> JpiToolResult {
    JpiToolResult {
        success: true,
        content: json!({
            "name": "Just Plan It (JPI) API",
            "version": "v1",
            "baseUrl": server.client.base_url(),
            "categories": {
                "components": "9 endpoints - Reusable building blocks",
                "jobs": "27 endpoints - Work orders and production orders",
                "templates": "13 endpoints - Reusable job definitions",
                "events": "2 endpoints - Change tracking",
                "resourceCategories": "5 endpoints - Category management",
                "resourceGroups": "5 endpoints - Group management",
                "resources": "5 endpoints - Machine/worker management",
                "settings": "2 endpoints - Application configuration"
            },
            "totalEndpoints": 69
        }),
        metadata: Some(json!({"operation": "api_info"})),
    }
}
