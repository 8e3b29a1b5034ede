//! Application-wide Settings singleton.

use serde::{Deserialize, Serialize};

use super::common::{
    CalendarExceptionCategory, CustomField, CustomFieldPatch, JobSequenceCriteria,
};
use super::enums::{
    ApprovalWorkflow, ColorOfBarInNonProdTime, DisplayedTextField, ExecuteTracking,
    SetupTimeStarts, ShopfloorExecuteTrackingMode, ShowTooltip, Strategy, TeardownTimeStarts,
};
use super::macros::with_settings_custom_fields;

with_settings_custom_fields! {
    CustomField;
    /// The account's scheduling defaults and custom-field catalog. There is
    /// exactly one per account; it is read and patched, never created or
    /// deleted.
    #[derive(Debug, Clone, Default, Serialize, Deserialize)]
    #[serde(rename_all = "PascalCase")]
    pub struct Settings {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub planning_start: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub planning_horizon: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub days_before_planning_start: Option<f64>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub job_view_bar_text: Option<DisplayedTextField>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub resource_view_bar_text: Option<DisplayedTextField>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub show_tooltip: Option<ShowTooltip>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub job_strategy: Option<Strategy>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub bar_color_in_non_prod_time: Option<ColorOfBarInNonProdTime>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub schedule_engine_run_directly: Option<bool>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub locale: Option<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub job_status_ready_tasks: Option<Vec<f64>>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub setup_time_starts: Option<SetupTimeStarts>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub teardown_time_starts: Option<TeardownTimeStarts>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub approval_workflow: Option<ApprovalWorkflow>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub global_apply_capacity_constraints: Option<bool>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub execute_tracking: Option<ExecuteTracking>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub shopfloor_execute_tracking_mode: Option<ShopfloorExecuteTrackingMode>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub calculate_releasedate_on_creation: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub releasedate_calculation_buffer: Option<f64>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub use_resource_categories: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub use_wildcards_in_filter_entries: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub auto_due_date_buffer: Option<f64>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub calendar_exception_categories: Option<Vec<CalendarExceptionCategory>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub job_sequence_criteria: Option<Vec<JobSequenceCriteria>>,
    }
}

with_settings_custom_fields! {
    CustomFieldPatch;
    #[derive(Debug, Clone, Default, Serialize, Deserialize)]
    #[serde(rename_all = "PascalCase")]
    pub struct SettingsPatch {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub planning_start: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub planning_horizon: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub days_before_planning_start: Option<f64>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub job_view_bar_text: Option<DisplayedTextField>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub resource_view_bar_text: Option<DisplayedTextField>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub show_tooltip: Option<ShowTooltip>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub job_strategy: Option<Strategy>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub bar_color_in_non_prod_time: Option<ColorOfBarInNonProdTime>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub schedule_engine_run_directly: Option<bool>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub locale: Option<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub job_status_ready_tasks: Option<Vec<f64>>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub setup_time_starts: Option<SetupTimeStarts>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub teardown_time_starts: Option<TeardownTimeStarts>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub approval_workflow: Option<ApprovalWorkflow>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub global_apply_capacity_constraints: Option<bool>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub execute_tracking: Option<ExecuteTracking>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub shopfloor_execute_tracking_mode: Option<ShopfloorExecuteTrackingMode>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub calculate_releasedate_on_creation: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub releasedate_calculation_buffer: Option<f64>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub use_resource_categories: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub use_wildcards_in_filter_entries: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub auto_due_date_buffer: Option<f64>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub calendar_exception_categories: Option<Vec<CalendarExceptionCategory>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub job_sequence_criteria: Option<Vec<JobSequenceCriteria>>,
    }
}
