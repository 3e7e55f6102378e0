//! Operation handlers for the task manager
//!
//! Each handler calls one store operation and renders its outcome.

pub mod add;
pub mod list;
pub mod remove;
pub mod undo;

use crate::store::{Mutation, Outcome};

/// Render a mutation as the message shown to the user
pub(crate) fn render_mutation(mutation: Mutation) -> String {
    let mut message = match mutation.outcome {
        Outcome::Added { title } => format!("Task '{}' added successfully!", title),
        Outcome::Removed { title } => format!(
            "Task '{}' removed successfully! You can undo this action.",
            title
        ),
        Outcome::Restored { title } => {
            format!("Undo successful! Task '{}' has been restored.", title)
        }
        Outcome::NothingToRemove => "No tasks to remove.".to_string(),
        Outcome::NothingToUndo => "No actions to undo.".to_string(),
    };

    if let Some(e) = mutation.warning {
        message.push_str(&format!("\nWarning: {}", e));
    }
    message
}
