//! Task domain model
//!
//! This module contains the task record and the factory that builds it:
//! - `model`: the `Task` record, its `TaskKind` variants and priority labels
//! - `factory`: maps a kind label to the matching task variant

mod factory;
mod model;

// Re-export all public types
pub use factory::create_task;
pub use model::{Task, TaskKind, priority_label};
