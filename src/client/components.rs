//! Component endpoints.

use reqwest::Method;

use super::{JpiClient, NO_BODY};
use crate::error::JpiResult;
use crate::types::{
    Component, ComponentPatch, ComponentTask, ComponentTaskPatch, NewComponent, NewComponentTask,
};

impl JpiClient {
    pub async fn list_components(&self) -> JpiResult<Vec<Component>> {
        self.request_list(Method::GET, "/v1/components", NO_BODY)
            .await
    }

    pub async fn create_component(&self, data: &NewComponent) -> JpiResult<Component> {
        self.request(Method::POST, "/v1/components", Some(data))
            .await
    }

    pub async fn get_component(&self, guid: &str) -> JpiResult<Component> {
        self.request(Method::GET, &format!("/v1/components/{guid}"), NO_BODY)
            .await
    }

    pub async fn update_component(
        &self,
        guid: &str,
        data: &ComponentPatch,
    ) -> JpiResult<Component> {
        self.request(Method::PATCH, &format!("/v1/components/{guid}"), Some(data))
            .await
    }

    /// Deletes a component and returns the remaining components.
    pub async fn delete_component(&self, guid: &str) -> JpiResult<Vec<Component>> {
        self.request_list(Method::DELETE, &format!("/v1/components/{guid}"), NO_BODY)
            .await
    }

    pub async fn get_component_task(
        &self,
        component_guid: &str,
        task_guid: &str,
    ) -> JpiResult<ComponentTask> {
        self.request(
            Method::GET,
            &format!("/v1/components/{component_guid}/task/{task_guid}"),
            NO_BODY,
        )
        .await
    }

    pub async fn add_component_task(
        &self,
        component_guid: &str,
        data: &NewComponentTask,
    ) -> JpiResult<ComponentTask> {
        self.request(
            Method::POST,
            &format!("/v1/components/{component_guid}/task"),
            Some(data),
        )
        .await
    }

    pub async fn update_component_task(
        &self,
        component_guid: &str,
        task_guid: &str,
        data: &ComponentTaskPatch,
    ) -> JpiResult<ComponentTask> {
        self.request(
            Method::PATCH,
            &format!("/v1/components/{component_guid}/task/{task_guid}"),
            Some(data),
        )
        .await
    }

    /// Deletes a component task and returns the updated component.
    pub async fn delete_component_task(
        &self,
        component_guid: &str,
        task_guid: &str,
    ) -> JpiResult<Component> {
        self.request(
            Method::DELETE,
            &format!("/v1/components/{component_guid}/task/{task_guid}"),
            NO_BODY,
        )
        .await
    }
}
