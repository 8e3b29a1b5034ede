//! Discovery schema for the locally answered API overview tool.

use serde_json::{Value, json};

pub fn api_info_tool() -> Value {
    json!({
        "name": "jpi_api_info",
        "description": "Get information about the JPI API and available endpoints. Use this to understand what operations are available.",
        "inputSchema": {
            "type": "object",
            "properties": {},
            "required": []
        }
    })
}
