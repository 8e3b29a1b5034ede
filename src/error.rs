//! Error types for JPI API access and tool dispatch.

use serde_json::Value;

/// Result alias used throughout the crate.
pub type JpiResult<T> = Result<T, JpiError>;

/// Main error type for JPI operations.
///
/// `Api` is the only structured error the transport adapter produces; it is
/// recovered at the tool dispatch boundary and surfaced to the caller as
/// data. Everything else propagates as a generic tool-execution failure.
#[derive(Debug, thiserror::Error)]
pub enum JpiError {
    /// Non-2xx response from the JPI API, carrying the parsed JSON error
    /// body, or the raw text when the body is not JSON.
    #[error("JPI API error: {status} {status_text}")]
    Api {
        status: u16,
        status_text: String,
        body: Value,
    },

    /// The request could not complete (DNS, connection refused, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The remote returned an empty body where a JSON document was expected.
    #[error("empty response body from {path}")]
    EmptyResponse { path: String },

    /// Startup misconfiguration (missing token). Fatal before any tool call.
    #[error("configuration error: {0}")]
    Config(String),
}
