//! Asynchronous HTTP client for the JPI REST API.
//!
//! One thin method per remote endpoint, grouped by entity family. All
//! methods funnel through [`JpiClient::request_opt`], which owns the
//! authentication header, status checking and empty-body handling.

mod components;
mod events;
mod jobs;
mod resources;
mod settings;
mod templates;

use log::debug;
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::JpiClientConfig;
use crate::error::{JpiError, JpiResult};

/// Marker for endpoints that send no request body.
const NO_BODY: Option<&()> = None;

pub struct JpiClient {
    http: reqwest::Client,
    config: JpiClientConfig,
}

impl JpiClient {
    pub fn new(config: JpiClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Issues one request and decodes the JSON response.
    ///
    /// Returns `Ok(None)` for a successful response with an empty body,
    /// which some delete endpoints produce. Non-2xx responses become
    /// [`JpiError::Api`] carrying the decoded error body, or the raw text
    /// when the remote's error page is not JSON.
    async fn request_opt<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> JpiResult<Option<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.config.base_url, path);
        debug!("{} {}", method, path);

        let mut req = self
            .http
            .request(method, &url)
            .header("X-Api-Key", &self.config.token)
            .header(reqwest::header::ACCEPT, "application/json");
        if let Some(body) = body {
            req = req.json(body);
        }

        let response = req.send().await?;
        let status = response.status();
        if !status.is_success() {
            let status_text = status.canonical_reason().unwrap_or_default().to_string();
            let text = response.text().await?;
            let body = serde_json::from_str(&text).unwrap_or(Value::String(text));
            return Err(JpiError::Api {
                status: status.as_u16(),
                status_text,
                body,
            });
        }

        let text = response.text().await?;
        if text.is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&text)?))
    }

    /// [`Self::request_opt`] for endpoints whose success body is mandatory.
    async fn request<B, T>(&self, method: Method, path: &str, body: Option<&B>) -> JpiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request_opt(method, path, body)
            .await?
            .ok_or_else(|| JpiError::EmptyResponse {
                path: path.to_string(),
            })
    }

    /// [`Self::request_opt`] for endpoints returning a collection; an empty
    /// body reads as an empty collection.
    async fn request_list<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> JpiResult<Vec<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        Ok(self
            .request_opt(method, path, body)
            .await?
            .unwrap_or_default())
    }
}
