//! Change-log event endpoints.
//!
//! The timestamp is a path segment, so it is percent-encoded; the optional
//! event-type filter is appended after a literal comma, which the remote
//! parses itself.

use reqwest::Method;

use super::{JpiClient, NO_BODY};
use crate::error::JpiResult;
use crate::types::JpiEvent;

impl JpiClient {
    /// Events created after the given ISO-8601 timestamp.
    pub async fn get_events(&self, created_after: &str) -> JpiResult<Vec<JpiEvent>> {
        let path = format!("/v1/jpievents/{}", urlencoding::encode(created_after));
        self.request_list(Method::GET, &path, NO_BODY).await
    }

    /// Same, restricted to one event type (Created, Updated or Deleted).
    pub async fn get_events_filtered(
        &self,
        created_after: &str,
        event_type: &str,
    ) -> JpiResult<Vec<JpiEvent>> {
        let path = format!(
            "/v1/jpievents/{},{}",
            urlencoding::encode(created_after),
            event_type
        );
        self.request_list(Method::GET, &path, NO_BODY).await
    }
}
