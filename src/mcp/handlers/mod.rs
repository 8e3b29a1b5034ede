//! Tool execution handlers.
//!
//! One module per entity family, mirroring `tools/`. Handlers validate the
//! routing parameters themselves (early return with a `Missing X parameter`
//! error), deserialize payload bags into the typed shapes so serde enforces
//! the remote's required fields, then relay the client call's outcome
//! through the shared helpers below.

pub mod components;
pub mod events;
pub mod jobs;
pub mod resources;
pub mod settings;
pub mod system;
pub mod templates;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use super::core::JpiToolResult;
use crate::error::{JpiError, JpiResult};

/// Error result for an absent required parameter.
pub(super) fn missing(name: &str) -> JpiToolResult {
    JpiToolResult {
        success: false,
        content: json!({"error": format!("Missing {name} parameter")}),
        metadata: None,
    }
}

/// Pulls a required string parameter out of the arguments.
pub(super) fn require_str<'a>(args: &'a Value, name: &str) -> Result<&'a str, JpiToolResult> {
    args.get(name)
        .and_then(Value::as_str)
        .ok_or_else(|| missing(name))
}

/// Pulls a required parameter out of the arguments as raw JSON.
pub(super) fn require_field(args: &Value, name: &str) -> Result<Value, JpiToolResult> {
    args.get(name).cloned().ok_or_else(|| missing(name))
}

/// Deserializes a payload bag into the typed shape for an endpoint.
///
/// Routing parameters riding along in the bag (e.g. `jobGuid`) are ignored
/// by serde; a missing required field or a type mismatch becomes a
/// structured error result instead of a remote round trip.
pub(super) fn parse_payload<T: DeserializeOwned>(value: Value) -> Result<T, JpiToolResult> {
    serde_json::from_value(value).map_err(|e| JpiToolResult {
        success: false,
        content: json!({"error": format!("Invalid payload: {e}")}),
        metadata: None,
    })
}

/// Converts a client call's outcome into a tool result.
///
/// Remote API errors keep their status and decoded body so agents can react
/// to 404s and validation failures; transport and decode errors are flattened
/// to their message.
pub(super) fn api_result<T: Serialize>(operation: &str, result: JpiResult<T>) -> JpiToolResult {
    match result {
        Ok(data) => match serde_json::to_value(data) {
            Ok(content) => JpiToolResult {
                success: true,
                content,
                metadata: Some(json!({"operation": operation})),
            },
            Err(e) => JpiToolResult {
                success: false,
                content: json!({"error": format!("Failed to encode response: {e}")}),
                metadata: None,
            },
        },
        Err(JpiError::Api {
            status,
            status_text,
            body,
        }) => JpiToolResult {
            success: false,
            content: json!({
                "error": true,
                "status": status,
                "statusText": status_text,
                "message": format!("JPI API error: {status} {status_text}"),
                "body": body,
            }),
            metadata: Some(json!({"operation": operation})),
        },
        Err(e) => JpiToolResult {
            success: false,
            content: json!({"error": e.to_string()}),
            metadata: Some(json!({"operation": operation})),
        },
    }
}
