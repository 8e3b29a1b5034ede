//! Change-log event tool schema definitions.

use serde_json::{Value, json};

pub fn get_events_tool() -> Value {
    json!({
        "name": "jpi_get_events",
        "description": "Get JPI events (change log) created after a specific timestamp.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "createdAfter": {"type": "string", "description": "ISO 8601 timestamp - get events created after this time"}
            },
            "required": ["createdAfter"]
        }
    })
}

pub fn get_events_filtered_tool() -> Value {
    json!({
        "name": "jpi_get_events_filtered",
        "description": "Get JPI events filtered by event type.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "createdAfter": {"type": "string", "description": "ISO 8601 timestamp"},
                "eventType": {
                    "type": "string",
                    "description": "Event type filter (JobCreated, JobUpdated, JobDeleted, TaskCreated, TaskUpdated, TaskDeleted, ResourceCreated, ResourceUpdated, ResourceDeleted, etc.)",
                    "enum": [
                        "JobCreated", "JobUpdated", "JobDeleted",
                        "TaskCreated", "TaskUpdated", "TaskDeleted",
                        "ComponentCreated", "ComponentUpdated", "ComponentDeleted",
                        "ResourceCreated", "ResourceUpdated", "ResourceDeleted",
                        "ResourceGroupCreated", "ResourceGroupUpdated", "ResourceGroupDeleted",
                        "ResourceCategoryCreated", "ResourceCategoryUpdated", "ResourceCategoryDeleted",
                        "JobTemplateCreated", "JobTemplateUpdated", "JobTemplateDeleted"
                    ]
                }
            },
            "required": ["createdAfter", "eventType"]
        }
    })
}
