//! Resource, resource group and resource category shapes.
//!
//! The hierarchy is category -> group -> resource; constraints on tasks
//! reference groups, optionally narrowed to specific resources.

use serde::{Deserialize, Serialize};

use super::common::{
    CalendarException, Identifier, NewCalendarException, NewWorkTimePerWeekday, ResourceLoadData,
    WorkTimePerWeekday,
};
use super::macros::with_custom_field_values;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceCategory {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_groups: Option<Vec<Identifier>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NewResourceCategory {
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceCategoryPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_category: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<Identifier>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NewResourceGroup {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_category_guid: Option<String>,
    // Member resources by GUID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceGroupPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_category_guid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<String>>,
}

with_custom_field_values! {
    /// A schedulable capacity unit with its weekly calendar, date-specific
    /// exceptions and remote-computed load data.
    #[derive(Debug, Clone, Default, Serialize, Deserialize)]
    #[serde(rename_all = "PascalCase")]
    pub struct Resource {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub guid: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub capacity: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub finite: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub overload_indicator: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub disabled: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub resource_groups: Option<Vec<Identifier>>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub resource_calendar_guid: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub worktimes_per_weekday: Option<Vec<WorkTimePerWeekday>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub calendar_exceptions: Option<Vec<CalendarException>>,

        // Computed by the remote, never written.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub load_data: Option<Vec<ResourceLoadData>>,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NewResource {
    pub name: String,
    pub worktimes_per_weekday: Vec<NewWorkTimePerWeekday>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finite: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_group_guid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calendar_exceptions: Option<Vec<NewCalendarException>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourcePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finite: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_group_guid: Option<String>,
    // Replaces the whole weekly schedule when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worktimes_per_weekday: Option<Vec<NewWorkTimePerWeekday>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calendar_exceptions: Option<Vec<NewCalendarException>>,
}
