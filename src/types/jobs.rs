//! Job, task and job-component-reference shapes.

use serde::{Deserialize, Serialize};

use super::common::{
    HyperLink, HyperLinkPatch, Identifier, NewHyperLink, NewResourceGroupConstraint,
    ResourceGroupConstraint, ResourceGroupConstraintPatch, TaskConnection,
};
use super::enums::{DisplayedTextField, OrderStatus, Strategy, TaskStatus};
use super::macros::with_custom_field_values;

with_custom_field_values! {
    /// Full task representation within a job, as returned by the remote.
    ///
    /// All durations are seconds, all timestamps ISO-8601 strings.
    /// Relationships are addressed by [`Identifier`] here; the write shapes
    /// address them by task-number strings instead.
    #[derive(Debug, Clone, Default, Serialize, Deserialize)]
    #[serde(rename_all = "PascalCase")]
    pub struct Task {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub guid: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub task_no: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub task_note: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub color_as: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub color: Option<String>,

        // Durations, in seconds.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub production_time_per_unit: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub setup_time: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub teardown_time: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub transfer_time: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub process_time: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub remaining_process_time: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub idle_time: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub pre_idle_time: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub post_idle_time: Option<f64>,

        // Scheduling dates.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub start: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub end: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub production_time_start: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub production_time_end: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub setup_time_start: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub setup_time_end: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub teardown_time_start: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub teardown_time_end: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub transfer_time_start: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub transfer_time_end: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub processing_start: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub processing_end: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub planned_start: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub planned_end: Option<String>,

        // Resource assignment.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub resource_group_constraints: Option<Vec<ResourceGroupConstraint>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub assigned_resources: Option<Vec<Identifier>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub resource: Option<Identifier>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub resource_name: Option<String>,

        // Planning constraints.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub start_not_earlier_than: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub end_not_later_than: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub constraint_date: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub constraint_type: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub task_status: Option<TaskStatus>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub is_critical: Option<bool>,

        // Display settings.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub displayed_text_field_job_view: Option<DisplayedTextField>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub displayed_text_field_res_view: Option<DisplayedTextField>,

        // Quantities.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub quantity: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub send_ahead_quantity: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub heads: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub processed_quantity: Option<f64>,

        // Relationships (GUID address space).
        #[serde(skip_serializing_if = "Option::is_none")]
        pub predecessors: Option<Vec<Identifier>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub successors: Option<Vec<Identifier>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub task_connections: Option<Vec<TaskConnection>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub component_task: Option<Identifier>,

        // Baseline snapshot.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub baseline_start_date: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub baseline_end_date: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub baseline_processing_start: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub baseline_processing_end: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub baseline_setup_time: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub baseline_teardown_time: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub baseline_process_time: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub baseline_idle_time: Option<f64>,

        // Operator/shopfloor feedback.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub operator_setup_time_start: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub operator_setup_time_end: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub operator_teardown_time_start: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub operator_teardown_time_end: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub operator_processing_start: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub operator_processing_end: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub operator_setup_time: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub operator_teardown_time: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub operator_process_time: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub operator_quantity: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub operator_quantity_good: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub operator_quantity_rejected: Option<f64>,

        // Progress and buffer metrics.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub task_progress: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub task_execute_status: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub buffer_penetration: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub feeding_buffer_level: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub feeding_buffer: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub feeding_buffer_penetration: Option<f64>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub hyper_links: Option<Vec<HyperLink>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub patch_warnings: Option<String>,

        // Extended display fields.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub progress: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub overload_indicator: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub displayed_text_job_view: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub displayed_text_res_view: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub marked_as_status: Option<String>,

        // Extended operator/shopfloor fields.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub operator_processing_resources: Option<Vec<Identifier>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub operator_processing_resource_groups: Option<Vec<Identifier>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub operator_note: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub operator_feedback: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub shopfloor_reference_date: Option<String>,

        // Tracking.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub from_now: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub last_updated_by: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub task_on_hold: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub waiting_time: Option<f64>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub total_done_quantity: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub shopfloor_total_done_quantity: Option<f64>,

        // Extended baseline fields.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub baseline_quantity: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub baseline_production_time_per_unit: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub baseline_transfer_time: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub baseline_total_time: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub baseline_assigned_resources: Option<Vec<Identifier>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub baseline_resource_group_constraints: Option<Vec<ResourceGroupConstraint>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub baseline_cycle_time: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub baseline_throughput_time: Option<f64>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub component_predecessors: Option<Vec<Identifier>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub created_from_component_template: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub processing_remaining_time: Option<f64>,
    }
}

with_custom_field_values! {
    /// Creation payload for a task within an existing job. Predecessors are
    /// addressed by task-number strings; the remote resolves them.
    #[derive(Debug, Clone, Serialize, Deserialize)]
    #[serde(rename_all = "PascalCase")]
    pub struct NewTask {
        pub task_no: String,
        pub resource_group_constraints: Vec<NewResourceGroupConstraint>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub task_note: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub color_as: Option<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub production_time_per_unit: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub setup_time: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub teardown_time: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub transfer_time: Option<f64>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub start_not_earlier_than: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub end_not_later_than: Option<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub quantity: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub send_ahead_quantity: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub heads: Option<f64>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub predecessor_task_nos: Option<Vec<String>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub task_connection_task_nos: Option<Vec<String>>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub hyper_links: Option<Vec<NewHyperLink>>,
    }
}

with_custom_field_values! {
    /// Partial update of a task. In batch use the `Guid` field selects the
    /// task to patch.
    #[derive(Debug, Clone, Default, Serialize, Deserialize)]
    #[serde(rename_all = "PascalCase")]
    pub struct TaskPatch {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub guid: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub task_no: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub task_note: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub color_as: Option<String>,

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
        pub start_not_earlier_than: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub end_not_later_than: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub task_status: Option<TaskStatus>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub quantity: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub send_ahead_quantity: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub heads: Option<f64>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub predecessor_task_nos: Option<Vec<String>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub task_connection_task_nos: Option<Vec<String>>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub hyper_links: Option<Vec<HyperLinkPatch>>,
    }
}

with_custom_field_values! {
    /// Creation payload for the cross-job batch endpoint: a [`NewTask`]
    /// plus the GUID of the job each entry belongs to.
    #[derive(Debug, Clone, Serialize, Deserialize)]
    #[serde(rename_all = "PascalCase")]
    pub struct NewCrossJobTask {
        pub job_guid: String,
        pub task_no: String,
        pub resource_group_constraints: Vec<NewResourceGroupConstraint>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub task_note: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub color_as: Option<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub production_time_per_unit: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub setup_time: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub teardown_time: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub transfer_time: Option<f64>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub start_not_earlier_than: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub end_not_later_than: Option<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub quantity: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub send_ahead_quantity: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub heads: Option<f64>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub predecessor_task_nos: Option<Vec<String>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub task_connection_task_nos: Option<Vec<String>>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub hyper_links: Option<Vec<NewHyperLink>>,
    }
}

/// Job component reference: a job's link to a reusable component, expanding
/// the component's tasks into the job at a task-number anchor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct JobComponentRef {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<Identifier>,
    // The remote reports the anchor as a number here, though the write
    // shapes take a task-number string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_no: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_tasks: Option<Vec<Identifier>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predecessors: Option<Vec<Identifier>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch_warnings: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NewJobComponentRef {
    pub component_guid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predecessor_task_nos: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct JobComponentRefPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predecessor_task_nos: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
}

with_custom_field_values! {
    /// Full job representation as returned by the remote.
    #[derive(Debug, Clone, Default, Serialize, Deserialize)]
    #[serde(rename_all = "PascalCase")]
    pub struct Job {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub guid: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub job_no: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub name: Option<String>,

        // Status and strategy.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub order_status: Option<OrderStatus>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub strategy: Option<Strategy>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub execute_status: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub applied_strategy: Option<Strategy>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub sequence_number: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub automatic: Option<bool>,

        // Dates and planning.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub due_date: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub release_date: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub planned_start: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub planned_end: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub processing_start: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub processing_end: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub is_due_date_exceeded: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub due_date_buffer: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub float_time: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub critical_path: Option<bool>,

        // Business fields.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub customer: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub additional_job_text: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub job_note: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub color_as: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub quantity: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub sales: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub creation_date: Option<String>,

        // Relationships.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub tasks: Option<Vec<Task>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub component_references: Option<Vec<JobComponentRef>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub predecessors: Option<Vec<Identifier>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub successors: Option<Vec<Identifier>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub template: Option<Identifier>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub created_from_template: Option<String>,

        // Baseline snapshot.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub baseline_due_date: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub baseline_start_date: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub baseline_end_date: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub baseline_processing_start: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub baseline_processing_end: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub baseline_setup_time: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub baseline_teardown_time: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub baseline_process_time: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub baseline_idle_time: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub baseline_total_lead_time: Option<f64>,

        // Buffer management. BufferLevel below the caller's threshold (or
        // negative) flags due-date risk.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub buffer_level: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub buffer: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub max_remaining_cycle_time: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub buffer_penetration: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub buffer_penetration_from_planning: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub feeding_buffer_level: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub feeding_buffer: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub milestone_buffer_level: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub milestone_buffer: Option<f64>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub job_progress: Option<f64>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub hyper_links: Option<Vec<HyperLink>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub patch_warnings: Option<String>,

        // Extended baseline fields.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub baseline_seq_no: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub baseline_wait_time: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub baseline_cycle_time: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub baseline_throughput_time: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub baseline_buffer_level: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub baseline_buffer: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub baseline_max_remaining_cycle_time: Option<String>,

        // Residual buffer figures.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub buffer_level_residual: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub buffer_residual: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub max_remaining_cycle_time_residual: Option<f64>,
    }
}

with_custom_field_values! {
    /// Creation payload for a job. Name and tasks are required by the
    /// remote; everything else is optional.
    #[derive(Debug, Clone, Serialize, Deserialize)]
    #[serde(rename_all = "PascalCase")]
    pub struct NewJob {
        pub name: String,
        pub tasks: Vec<NewTask>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub job_no: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub strategy: Option<Strategy>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub order_status: Option<OrderStatus>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub due_date: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub release_date: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub customer: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub additional_job_text: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub job_note: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub color_as: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub quantity: Option<f64>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub job_component_references: Option<Vec<NewJobComponentRef>>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub hyper_links: Option<Vec<NewHyperLink>>,
    }
}

with_custom_field_values! {
    /// Partial update of a job. In batch use the `Guid` field selects the
    /// job to patch.
    #[derive(Debug, Clone, Default, Serialize, Deserialize)]
    #[serde(rename_all = "PascalCase")]
    pub struct JobPatch {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub guid: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub job_no: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub strategy: Option<Strategy>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub order_status: Option<OrderStatus>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub due_date: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub release_date: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub customer: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub additional_job_text: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub job_note: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub color_as: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub quantity: Option<f64>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub hyper_links: Option<Vec<HyperLinkPatch>>,
    }
}

/// Minimal projection returned by the at-risk job listing: scheduling
/// status plus computed task counts, nothing else.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct JobAtRisk {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planned_start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planned_end: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_due_date_exceeded: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buffer_level: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buffer: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_status: Option<OrderStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy: Option<Strategy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_progress: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execute_status: Option<String>,
    pub task_count: usize,
    pub finished_task_count: usize,
    pub planned_task_count: usize,
}

impl JobAtRisk {
    /// Project a full job down to the at-risk view, counting tasks by
    /// status along the way.
    pub fn from_job(job: &Job) -> Self {
        let tasks = job.tasks.as_deref().unwrap_or(&[]);
        let count_status = |status: TaskStatus| {
            tasks
                .iter()
                .filter(|t| t.task_status == Some(status))
                .count()
        };
        Self {
            guid: job.guid.clone(),
            name: job.name.clone(),
            job_no: job.job_no.clone(),
            due_date: job.due_date.clone(),
            planned_start: job.planned_start.clone(),
            planned_end: job.planned_end.clone(),
            release_date: job.release_date.clone(),
            is_due_date_exceeded: job.is_due_date_exceeded,
            buffer_level: job.buffer_level,
            buffer: job.buffer,
            order_status: job.order_status,
            strategy: job.strategy,
            customer: job.customer.clone(),
            quantity: job.quantity,
            job_progress: job.job_progress,
            execute_status: job.execute_status.clone(),
            task_count: tasks.len(),
            finished_task_count: count_status(TaskStatus::Finished),
            planned_task_count: count_status(TaskStatus::Planned),
        }
    }

    /// Risk predicate: an exceeded due date always flags the job; otherwise
    /// a buffer level below the threshold does.
    pub fn is_at_risk(job: &Job, buffer_threshold: f64) -> bool {
        if job.is_due_date_exceeded == Some(true) {
            return true;
        }
        matches!(job.buffer_level, Some(level) if level < buffer_threshold)
    }
}
