//! Resource category, resource group and resource endpoints.

use reqwest::Method;

use super::{JpiClient, NO_BODY};
use crate::error::JpiResult;
use crate::types::{
    NewResource, NewResourceCategory, NewResourceGroup, Resource, ResourceCategory,
    ResourceCategoryPatch, ResourceGroup, ResourceGroupPatch, ResourcePatch,
};

impl JpiClient {
    pub async fn list_resource_categories(&self) -> JpiResult<Vec<ResourceCategory>> {
        self.request_list(Method::GET, "/v1/resourcecategories", NO_BODY)
            .await
    }

    pub async fn create_resource_category(
        &self,
        data: &NewResourceCategory,
    ) -> JpiResult<ResourceCategory> {
        self.request(Method::POST, "/v1/resourcecategories", Some(data))
            .await
    }

    pub async fn get_resource_category(&self, guid: &str) -> JpiResult<ResourceCategory> {
        self.request(
            Method::GET,
            &format!("/v1/resourcecategories/{guid}"),
            NO_BODY,
        )
        .await
    }

    pub async fn update_resource_category(
        &self,
        guid: &str,
        data: &ResourceCategoryPatch,
    ) -> JpiResult<ResourceCategory> {
        self.request(
            Method::PATCH,
            &format!("/v1/resourcecategories/{guid}"),
            Some(data),
        )
        .await
    }

    /// Deletes a category and returns the remaining categories.
    pub async fn delete_resource_category(&self, guid: &str) -> JpiResult<Vec<ResourceCategory>> {
        self.request_list(
            Method::DELETE,
            &format!("/v1/resourcecategories/{guid}"),
            NO_BODY,
        )
        .await
    }

    pub async fn list_resource_groups(&self) -> JpiResult<Vec<ResourceGroup>> {
        self.request_list(Method::GET, "/v1/resourcegroups", NO_BODY)
            .await
    }

    pub async fn create_resource_group(&self, data: &NewResourceGroup) -> JpiResult<ResourceGroup> {
        self.request(Method::POST, "/v1/resourcegroups", Some(data))
            .await
    }

    pub async fn get_resource_group(&self, guid: &str) -> JpiResult<ResourceGroup> {
        self.request(Method::GET, &format!("/v1/resourcegroups/{guid}"), NO_BODY)
            .await
    }

    pub async fn update_resource_group(
        &self,
        guid: &str,
        data: &ResourceGroupPatch,
    ) -> JpiResult<ResourceGroup> {
        self.request(
            Method::PATCH,
            &format!("/v1/resourcegroups/{guid}"),
            Some(data),
        )
        .await
    }

    /// Deletes a group and returns the remaining groups.
    pub async fn delete_resource_group(&self, guid: &str) -> JpiResult<Vec<ResourceGroup>> {
        self.request_list(Method::DELETE, &format!("/v1/resourcegroups/{guid}"), NO_BODY)
            .await
    }

    pub async fn list_resources(&self) -> JpiResult<Vec<Resource>> {
        self.request_list(Method::GET, "/v1/resources", NO_BODY)
            .await
    }

    pub async fn create_resource(&self, data: &NewResource) -> JpiResult<Resource> {
        self.request(Method::POST, "/v1/resources", Some(data))
            .await
    }

    pub async fn get_resource(&self, guid: &str) -> JpiResult<Resource> {
        self.request(Method::GET, &format!("/v1/resources/{guid}"), NO_BODY)
            .await
    }

    pub async fn update_resource(&self, guid: &str, data: &ResourcePatch) -> JpiResult<Resource> {
        self.request(Method::PATCH, &format!("/v1/resources/{guid}"), Some(data))
            .await
    }

    /// Deletes a resource and returns the remaining resources.
    pub async fn delete_resource(&self, guid: &str) -> JpiResult<Vec<Resource>> {
        self.request_list(Method::DELETE, &format!("/v1/resources/{guid}"), NO_BODY)
            .await
    }
}
