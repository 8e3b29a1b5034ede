//! Client configuration.
//!
//! The configuration is an explicit immutable value handed to
//! [`JpiClient::new`](crate::client::JpiClient::new), never ambient global
//! state, so tests can point a second client at a mock endpoint.

use crate::error::{JpiError, JpiResult};

/// Default production endpoint, used when `JPI_BASE_URL` is unset.
pub const DEFAULT_BASE_URL: &str = "https://api.just-plan-it.com";

/// Environment variable carrying the static API token. Required.
pub const TOKEN_ENV: &str = "JPI_API_TOKEN";

/// Environment variable overriding the base endpoint. Optional.
pub const BASE_URL_ENV: &str = "JPI_BASE_URL";

/// Connection settings for the JPI API: base endpoint plus the static
/// API-key token attached to every request.
#[derive(Debug, Clone)]
pub struct JpiClientConfig {
    pub base_url: String,
    pub token: String,
}

impl JpiClientConfig {
    /// Build a config from explicit values. A trailing slash on the base
    /// URL is stripped so path concatenation stays predictable.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            token: token.into(),
        }
    }

    /// Read the configuration from the process environment.
    ///
    /// A missing `JPI_API_TOKEN` is a [`JpiError::Config`]; the binary
    /// reports it and exits before any tool call is possible.
    pub fn from_env() -> JpiResult<Self> {
        let token = std::env::var(TOKEN_ENV)
            .map_err(|_| JpiError::Config(format!("{TOKEN_ENV} environment variable is required")))?;
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Ok(Self::new(base_url, token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped() {
        let config = JpiClientConfig::new("https://api.example.com/", "secret");
        assert_eq!(config.base_url, "https://api.example.com");
    }

    #[test]
    fn explicit_values_are_kept() {
        let config = JpiClientConfig::new("http://127.0.0.1:9000", "tok");
        assert_eq!(config.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.token, "tok");
    }
}
