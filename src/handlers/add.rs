//! Add handler for the task manager

use super::render_mutation;
use crate::TaskManager;

impl TaskManager {
    /// Adds a task and returns the success or failure message.
    pub fn handle_add(
        &mut self,
        kind: &str,
        title: &str,
        description: &str,
        deadline: &str,
        priority: i32,
        extra: &str,
    ) -> String {
        match self.store.add(kind, title, description, deadline, priority, extra) {
            Ok(mutation) => render_mutation(mutation),
            Err(e) => format!("Failed to add task: {}", e),
        }
    }
}
