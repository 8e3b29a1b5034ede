//! Field-block macros shared by the entity shapes.
//!
//! The remote repeats the same ten generic extension slots
//! (`CustomFieldValue1`..`CustomFieldValue10`) on every entity family, and
//! the Settings singleton carries thirty-one custom-field definition slots.
//! Generating those blocks keeps one canonical field table per entity
//! instead of hand-duplicating the slots across shapes.

/// Appends the ten per-instance `CustomFieldValueN` slots to a shape.
///
/// The slots are defined centrally in [`Settings`](super::settings::Settings)
/// and populated per instance; on the wire they are plain nullable strings.
macro_rules! with_custom_field_values {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $($body:tt)*
        }
    ) => {
        $(#[$meta])*
        pub struct $name {
            $($body)*

            #[serde(skip_serializing_if = "Option::is_none")]
            pub custom_field_value1: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub custom_field_value2: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub custom_field_value3: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub custom_field_value4: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub custom_field_value5: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub custom_field_value6: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub custom_field_value7: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub custom_field_value8: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub custom_field_value9: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub custom_field_value10: Option<String>,
        }
    };
}

/// Appends the Settings custom-field definition slots: ten each for jobs,
/// tasks and resources, plus the task color-as field. `$field_type` is
/// [`CustomField`](super::common::CustomField) on the get shape and
/// [`CustomFieldPatch`](super::common::CustomFieldPatch) on the patch shape.
macro_rules! with_settings_custom_fields {
    (
        $field_type:ty;
        $(#[$meta:meta])*
        pub struct $name:ident {
            $($body:tt)*
        }
    ) => {
        $(#[$meta])*
        pub struct $name {
            $($body)*

            #[serde(skip_serializing_if = "Option::is_none")]
            pub job_custom_field1: Option<$field_type>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub job_custom_field2: Option<$field_type>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub job_custom_field3: Option<$field_type>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub job_custom_field4: Option<$field_type>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub job_custom_field5: Option<$field_type>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub job_custom_field6: Option<$field_type>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub job_custom_field7: Option<$field_type>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub job_custom_field8: Option<$field_type>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub job_custom_field9: Option<$field_type>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub job_custom_field10: Option<$field_type>,

            #[serde(skip_serializing_if = "Option::is_none")]
            pub task_custom_field1: Option<$field_type>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub task_custom_field2: Option<$field_type>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub task_custom_field3: Option<$field_type>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub task_custom_field4: Option<$field_type>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub task_custom_field5: Option<$field_type>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub task_custom_field6: Option<$field_type>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub task_custom_field7: Option<$field_type>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub task_custom_field8: Option<$field_type>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub task_custom_field9: Option<$field_type>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub task_custom_field10: Option<$field_type>,

            /// Field whose value drives task bar coloring.
            #[serde(skip_serializing_if = "Option::is_none")]
            pub task_color_as_field: Option<$field_type>,

            #[serde(skip_serializing_if = "Option::is_none")]
            pub resource_custom_field1: Option<$field_type>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub resource_custom_field2: Option<$field_type>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub resource_custom_field3: Option<$field_type>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub resource_custom_field4: Option<$field_type>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub resource_custom_field5: Option<$field_type>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub resource_custom_field6: Option<$field_type>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub resource_custom_field7: Option<$field_type>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub resource_custom_field8: Option<$field_type>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub resource_custom_field9: Option<$field_type>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub resource_custom_field10: Option<$field_type>,
        }
    };
}

pub(crate) use with_custom_field_values;
pub(crate) use with_settings_custom_fields;
