//! Enumeration types used across the JPI API.

use serde::{Deserialize, Serialize};

/// Commercial status of a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Quoted,
    Ordered,
    Released,
    Standby,
}

/// Scheduling strategy for a job or template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    Asap,
    Jit,
    #[serde(rename = "ASAP_PLUS")]
    AsapPlus,
    #[serde(rename = "JIT_PLUS")]
    JitPlus,
}

/// Execution status of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    Planned,
    Started,
    Finished,
    None,
    Standby,
}

/// Shopfloor execution status of a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExecuteStatus {
    NotStarted,
    Started,
    Finished,
}

/// Date constraint kind on a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConstraintType {
    None,
    StartNotEarlierThan,
    EndNotLaterThan,
    MustStartOn,
    MustEndOn,
}

/// Field displayed as the bar text in the planning views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayedTextField {
    None,
    JobName,
    Strategy,
    ReleaseDate,
    DueDate,
    JobStatus,
    Customer,
    AdditionalJobText,
    TaskNo,
    TaskName,
    RunTime,
    Resource,
    ResourceGroup,
    TimeConstraint,
    Predecessors,
    AdditionalTaskText,
    GlobalSetting,
    TemplateName,
    JobCustomField1,
    JobCustomField2,
    Sales,
    OperationCustomField1,
    OperationCustomField2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SetupTimeStarts {
    IndependentFromPredecessor,
    AfterPredecessor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeardownTimeStarts {
    IndependentFromSuccessor,
    BeforeSuccessor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApprovalWorkflow {
    NotActivated,
    Activated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShowTooltip {
    Immediately,
    SlightlyDelayed,
    SeverelyDelayed,
    No,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExecuteTracking {
    TimeBased,
    QuantityBased,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShopfloorExecuteTrackingMode {
    Totals,
    Additions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorOfBarInNonProdTime {
    Transparent,
    White,
    SameAstheBarColorInProdTimes,
    CalculatedColor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// Kind of change recorded by a change-log event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventType {
    Created,
    Updated,
    Deleted,
}

/// Object family a change-log event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventObjectType {
    SchedulingModel,
    ResourceCalendar,
    DayPattern,
    Resource,
    ResourceGroup,
    Job,
    Task,
    Template,
    TemplateSet,
    TemplateTask,
    ServerMessage,
    CustomField,
    Component,
    ComponentTask,
    JobComponentRef,
    TemplateComponentRef,
    None,
    JobHyperLink,
}
