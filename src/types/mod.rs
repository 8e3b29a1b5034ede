//! Remote-owned data model for the JPI API.
//!
//! Every entity is a remote-owned record identified by an opaque GUID
//! string; this crate never stores a local copy. Each entity family comes
//! in up to three shapes:
//!
//! - get shape (`Job`, `Task`, ...): the full representation the remote
//!   returns, optional fields throughout since the remote may omit any.
//! - post shape (`NewJob`, `NewTask`, ...): the creation payload with the
//!   remote's required subset as plain fields.
//! - patch shape (`JobPatch`, `TaskPatch`, ...): partial update, every
//!   field optional; absent fields are omitted from the request body and
//!   left unchanged by the remote.
//!
//! Task relationships use two parallel address spaces that the remote
//! reconciles: get shapes reference predecessors/successors by
//! [`Identifier`] (GUID), while post/patch shapes reference them by
//! task-number strings (`PredecessorTaskNos`). The types keep both spaces
//! distinct on purpose.
//!
//! Wire field names are PascalCase; all timestamps are ISO-8601 strings
//! and all durations are seconds.

mod macros;

pub mod common;
pub mod components;
pub mod enums;
pub mod events;
pub mod jobs;
pub mod resources;
pub mod settings;
pub mod templates;

pub use common::*;
pub use components::*;
pub use enums::*;
pub use events::*;
pub use jobs::*;
pub use resources::*;
pub use settings::*;
pub use templates::*;
