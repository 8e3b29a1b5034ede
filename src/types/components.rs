//! Component and component-task shapes.
//!
//! A component is a reusable block of tasks that jobs and templates pull in
//! through component references.

use serde::{Deserialize, Serialize};

use super::common::{
    HyperLink, HyperLinkPatch, Identifier, NewHyperLink, NewResourceGroupConstraint,
    ResourceGroupConstraint, ResourceGroupConstraintPatch, TaskConnection,
};
use super::enums::DisplayedTextField;
use super::macros::with_custom_field_values;

with_custom_field_values! {
    #[derive(Debug, Clone, Default, Serialize, Deserialize)]
    #[serde(rename_all = "PascalCase")]
    pub struct ComponentTask {
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
    pub struct NewComponentTask {
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
    /// Partial update of a component task. In batch use the `Guid` field
    /// selects the task to patch.
    #[derive(Debug, Clone, Default, Serialize, Deserialize)]
    #[serde(rename_all = "PascalCase")]
    pub struct ComponentTaskPatch {
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

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Component {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<ComponentTask>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hyper_links: Option<Vec<HyperLink>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NewComponent {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hyper_links: Option<Vec<NewHyperLink>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<NewComponentTask>>,
}

/// Component metadata patch; the contained tasks have their own endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ComponentPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hyper_links: Option<Vec<HyperLinkPatch>>,
}
