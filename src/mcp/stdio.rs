//! Line-delimited JSON-RPC 2.0 transport over stdin/stdout.
//!
//! Implements the subset of the MCP handshake a tool-only server needs:
//! `initialize`, `tools/list` and `tools/call`, plus `ping`. Notifications
//! get no response. Each request and response is one JSON document per
//! line; logging goes to stderr so stdout stays protocol-clean.

use log::{debug, info, warn};
use serde_json::{Value, json};
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};

use super::core::JpiMcpServer;

const PROTOCOL_VERSION: &str = "2024-11-05";

const PARSE_ERROR: i64 = -32700;
const INVALID_REQUEST: i64 = -32600;
const METHOD_NOT_FOUND: i64 = -32601;
const INVALID_PARAMS: i64 = -32602;

impl JpiMcpServer {
    /// Serves MCP over stdio until stdin closes.
    pub async fn run_stdio(self) -> io::Result<()> {
        info!(
            "{} {} ready on stdio ({} tools)",
            self.server_info.name,
            self.server_info.version,
            self.get_tools().len()
        );

        let mut reader = BufReader::new(io::stdin());
        let mut stdout = io::stdout();
        let mut line = String::new();

        loop {
            line.clear();
            if reader.read_line(&mut line).await? == 0 {
                debug!("stdin closed, shutting down");
                return Ok(());
            }
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let response = match serde_json::from_str::<Value>(trimmed) {
                Ok(message) => self.handle_message(message).await,
                Err(e) => {
                    warn!("unparseable request: {e}");
                    Some(error_response(
                        Value::Null,
                        PARSE_ERROR,
                        &format!("Parse error: {e}"),
                    ))
                }
            };

            if let Some(response) = response {
                let mut payload = serde_json::to_vec(&response)?;
                payload.push(b'\n');
                stdout.write_all(&payload).await?;
                stdout.flush().await?;
            }
        }
    }

    /// Handles one incoming message; returns `None` for notifications.
    async fn handle_message(&self, message: Value) -> Option<Value> {
        let Some(obj) = message.as_object() else {
            return Some(error_response(
                Value::Null,
                INVALID_REQUEST,
                "Request must be a JSON object",
            ));
        };

        let method = obj.get("method").and_then(Value::as_str).unwrap_or("");
        let params = obj.get("params").cloned().unwrap_or(Value::Null);

        // No id means notification; nothing to answer.
        let Some(id) = obj.get("id").cloned() else {
            debug!("notification: {method}");
            return None;
        };

        let result = match method {
            "initialize" => Ok(json!({
                "protocolVersion": PROTOCOL_VERSION,
                "capabilities": {"tools": {}},
                "serverInfo": {
                    "name": self.server_info.name,
                    "version": self.server_info.version,
                },
                "instructions": self.server_info.description,
            })),
            "ping" => Ok(json!({})),
            "tools/list" => Ok(json!({"tools": self.get_tools()})),
            "tools/call" => self.handle_tools_call(params).await,
            other => Err((METHOD_NOT_FOUND, format!("Method not found: {other}"))),
        };

        Some(match result {
            Ok(value) => json!({"jsonrpc": "2.0", "id": id, "result": value}),
            Err((code, message)) => error_response(id, code, &message),
        })
    }

    async fn handle_tools_call(&self, params: Value) -> Result<Value, (i64, String)> {
        let name = params
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                (
                    INVALID_PARAMS,
                    "tools/call requires string field 'name'".to_string(),
                )
            })?
            .to_string();
        let arguments = params
            .get("arguments")
            .cloned()
            .unwrap_or_else(|| json!({}));

        let result = self.execute_tool(&name, arguments).await;
        let text = serde_json::to_string_pretty(&result.content)
            .unwrap_or_else(|_| result.content.to_string());

        let mut response = json!({
            "content": [{"type": "text", "text": text}],
        });
        if !result.success {
            response["isError"] = json!(true);
        }
        Ok(response)
    }
}

fn error_response(id: Value, code: i64, message: &str) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "error": {"code": code, "message": message}
    })
}
