//! Job template endpoints.

use reqwest::Method;

use super::{JpiClient, NO_BODY};
use crate::error::JpiResult;
use crate::types::{
    NewTemplate, NewTemplateComponentRef, NewTemplateTask, Template, TemplateComponentRef,
    TemplateComponentRefPatch, TemplatePatch, TemplateTask, TemplateTaskPatch,
};

impl JpiClient {
    pub async fn list_templates(&self) -> JpiResult<Vec<Template>> {
        self.request_list(Method::GET, "/v1/jobtemplates", NO_BODY)
            .await
    }

    pub async fn create_template(&self, data: &NewTemplate) -> JpiResult<Template> {
        self.request(Method::POST, "/v1/jobtemplates", Some(data))
            .await
    }

    pub async fn get_template(&self, guid: &str) -> JpiResult<Template> {
        self.request(Method::GET, &format!("/v1/jobtemplates/{guid}"), NO_BODY)
            .await
    }

    pub async fn update_template(&self, guid: &str, data: &TemplatePatch) -> JpiResult<Template> {
        self.request(
            Method::PATCH,
            &format!("/v1/jobtemplates/{guid}"),
            Some(data),
        )
        .await
    }

    /// Deletes a template and returns the remaining templates.
    pub async fn delete_template(&self, guid: &str) -> JpiResult<Vec<Template>> {
        self.request_list(Method::DELETE, &format!("/v1/jobtemplates/{guid}"), NO_BODY)
            .await
    }

    pub async fn get_template_task(
        &self,
        template_guid: &str,
        task_guid: &str,
    ) -> JpiResult<TemplateTask> {
        self.request(
            Method::GET,
            &format!("/v1/jobtemplates/{template_guid}/task/{task_guid}"),
            NO_BODY,
        )
        .await
    }

    pub async fn add_template_task(
        &self,
        template_guid: &str,
        data: &NewTemplateTask,
    ) -> JpiResult<TemplateTask> {
        self.request(
            Method::POST,
            &format!("/v1/jobtemplates/{template_guid}/task"),
            Some(data),
        )
        .await
    }

    pub async fn update_template_task(
        &self,
        template_guid: &str,
        task_guid: &str,
        data: &TemplateTaskPatch,
    ) -> JpiResult<TemplateTask> {
        self.request(
            Method::PATCH,
            &format!("/v1/jobtemplates/{template_guid}/task/{task_guid}"),
            Some(data),
        )
        .await
    }

    /// Deletes a template task and returns the updated template.
    pub async fn delete_template_task(
        &self,
        template_guid: &str,
        task_guid: &str,
    ) -> JpiResult<Template> {
        self.request(
            Method::DELETE,
            &format!("/v1/jobtemplates/{template_guid}/task/{task_guid}"),
            NO_BODY,
        )
        .await
    }

    pub async fn get_tcr(
        &self,
        template_guid: &str,
        tcr_guid: &str,
    ) -> JpiResult<TemplateComponentRef> {
        self.request(
            Method::GET,
            &format!("/v1/jobtemplates/{template_guid}/tcr/{tcr_guid}"),
            NO_BODY,
        )
        .await
    }

    pub async fn add_tcr(
        &self,
        template_guid: &str,
        data: &NewTemplateComponentRef,
    ) -> JpiResult<TemplateComponentRef> {
        self.request(
            Method::POST,
            &format!("/v1/jobtemplates/{template_guid}/tcr"),
            Some(data),
        )
        .await
    }

    pub async fn update_tcr(
        &self,
        template_guid: &str,
        tcr_guid: &str,
        data: &TemplateComponentRefPatch,
    ) -> JpiResult<TemplateComponentRef> {
        self.request(
            Method::PATCH,
            &format!("/v1/jobtemplates/{template_guid}/tcr/{tcr_guid}"),
            Some(data),
        )
        .await
    }

    /// Deletes a component reference and returns the updated template.
    pub async fn delete_tcr(&self, template_guid: &str, tcr_guid: &str) -> JpiResult<Template> {
        self.request(
            Method::DELETE,
            &format!("/v1/jobtemplates/{template_guid}/tcr/{tcr_guid}"),
            NO_BODY,
        )
        .await
    }
}
