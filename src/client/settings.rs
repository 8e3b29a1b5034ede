//! Settings endpoints. One singleton per account.

use reqwest::Method;

use super::{JpiClient, NO_BODY};
use crate::error::JpiResult;
use crate::types::{Settings, SettingsPatch};

impl JpiClient {
    pub async fn get_settings(&self) -> JpiResult<Settings> {
        self.request(Method::GET, "/v1/settings", NO_BODY).await
    }

    pub async fn update_settings(&self, data: &SettingsPatch) -> JpiResult<Settings> {
        self.request(Method::PATCH, "/v1/settings", Some(data))
            .await
    }
}
