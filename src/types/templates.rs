//! Job template, template task and template component reference shapes.
//!
//! Templates are job blueprints: instantiating one creates a real job with
//! the template's tasks and expanded component references.

use serde::{Deserialize, Serialize};

use super::common::{
    HyperLink, HyperLinkPatch, Identifier, NewHyperLink, NewResourceGroupConstraint,
    ResourceGroupConstraint, ResourceGroupConstraintPatch, TaskConnection,
};
use super::enums::{DisplayedTextField, Strategy};
use super::macros::with_custom_field_values;

with_custom_field_values! {
    #[derive(Debug, Clone, Default, Serialize, Deserialize)]
    #[serde(rename_all = "PascalCase")]
    pub struct TemplateTask {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub guid: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub task_no: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub production_time_per_unit: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub setup_time: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub teardown_time: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub transfer_time: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub resource_group_constraints: Option<Vec<ResourceGroupConstraint>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub predecessors: Option<Vec<Identifier>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub task_connections: Option<Vec<TaskConnection>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub task_note: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub displayed_text_field_job_view: Option<DisplayedTextField>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub displayed_text_field_res_view: Option<DisplayedTextField>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub color_as: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub quantity: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub send_ahead_quantity: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub hyper_links: Option<Vec<HyperLink>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub heads: Option<f64>,
    }
}

with_custom_field_values! {
    #[derive(Debug, Clone, Serialize, Deserialize)]
    #[serde(rename_all = "PascalCase")]
    pub struct NewTemplateTask {
        pub task_no: String,
        pub resource_group_constraints: Vec<NewResourceGroupConstraint>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub production_time_per_unit: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub setup_time: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub teardown_time: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub transfer_time: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub predecessor_task_nos: Option<Vec<String>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub task_connection_task_nos: Option<Vec<String>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub task_note: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub displayed_text_field_job_view: Option<DisplayedTextField>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub displayed_text_field_res_view: Option<DisplayedTextField>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub color_as: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub quantity: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub send_ahead_quantity: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub hyper_links: Option<Vec<NewHyperLink>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub heads: Option<f64>,
    }
}

with_custom_field_values! {
    #[derive(Debug, Clone, Default, Serialize, Deserialize)]
    #[serde(rename_all = "PascalCase")]
    pub struct TemplateTaskPatch {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub task_no: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub production_time_per_unit: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub setup_time: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub teardown_time: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub transfer_time: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub resource_group_constraints: Option<Vec<ResourceGroupConstraintPatch>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub predecessor_task_nos: Option<Vec<String>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub task_connection_task_nos: Option<Vec<String>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub task_note: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub displayed_text_field_job_view: Option<DisplayedTextField>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub displayed_text_field_res_view: Option<DisplayedTextField>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub color_as: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub quantity: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub send_ahead_quantity: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub hyper_links: Option<Vec<HyperLinkPatch>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub heads: Option<f64>,
    }
}

/// Template component reference. Unlike the job-side counterpart, the
/// anchor task number stays a string and predecessors are plain strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TemplateComponentRef {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predecessors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_tasks: Option<Vec<Identifier>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NewTemplateComponentRef {
    pub component: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predecessors: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TemplateComponentRefPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predecessors: Option<Vec<String>>,
}

with_custom_field_values! {
    #[derive(Debug, Clone, Default, Serialize, Deserialize)]
    #[serde(rename_all = "PascalCase")]
    pub struct Template {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub guid: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub tasks: Option<Vec<TemplateTask>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub template_component_references: Option<Vec<TemplateComponentRef>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub hyper_links: Option<Vec<HyperLink>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub strategy: Option<Strategy>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub due_date_buffer: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub additional_text: Option<String>,
    }
}

with_custom_field_values! {
    #[derive(Debug, Clone, Serialize, Deserialize)]
    #[serde(rename_all = "PascalCase")]
    pub struct NewTemplate {
        pub name: String,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub hyper_links: Option<Vec<NewHyperLink>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub tasks: Option<Vec<NewTemplateTask>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub component_references: Option<Vec<NewTemplateComponentRef>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub strategy: Option<Strategy>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub due_date_buffer: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub additional_text: Option<String>,
    }
}

with_custom_field_values! {
    /// Template metadata patch; tasks and component references have their
    /// own endpoints.
    #[derive(Debug, Clone, Default, Serialize, Deserialize)]
    #[serde(rename_all = "PascalCase")]
    pub struct TemplatePatch {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub hyper_links: Option<Vec<HyperLinkPatch>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub strategy: Option<Strategy>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub due_date_buffer: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub additional_text: Option<String>,
    }
}
