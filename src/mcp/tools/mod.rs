//! JSON schema definitions for MCP tool discovery.
//!
//! One function per tool, returning the tool's discovery document: name,
//! description and JSON Schema for the input. Schemas spell out the
//! parameters agents commonly need; payload-bag tools accept the full
//! remote field set even where the schema only lists the highlights, since
//! the typed deserialization in the handlers is what actually validates.
//!
//! Parameter naming convention, kept consistent across all tools: routing
//! parameters (GUIDs in the URL path) are camelCase (`guid`, `jobGuid`,
//! `taskGuid`), while entity fields forwarded to the remote are PascalCase
//! exactly as the JPI API spells them (`Name`, `DueDate`, `TaskNo`).

pub mod component_schemas;
pub mod event_schemas;
pub mod job_schemas;
pub mod resource_schemas;
pub mod settings_schemas;
pub mod system_schemas;
pub mod template_schemas;
