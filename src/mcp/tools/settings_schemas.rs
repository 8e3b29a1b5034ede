//! Settings tool schema definitions.

use serde_json::{Value, json};

pub fn get_settings_tool() -> Value {
    json!({
        "name": "jpi_get_settings",
        "description": "Get the JPI application settings including custom fields, planning configuration, and display options.",
        "inputSchema": {
            "type": "object",
            "properties": {},
            "required": []
        }
    })
}

pub fn update_settings_tool() -> Value {
    json!({
        "name": "jpi_update_settings",
        "description": "Update JPI application settings.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "PlanningStart": {"type": "string", "description": "Planning start date"},
                "PlanningHorizon": {"type": "number", "description": "Planning horizon in days"},
                "Locale": {"type": "string", "description": "Locale setting"}
            },
            "required": []
        }
    })
}
