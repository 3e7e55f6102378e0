//! Remove handler for the task manager

use super::render_mutation;
use crate::TaskManager;

impl TaskManager {
    /// Removes the highest-priority task, keeping it available for undo.
    pub fn handle_remove(&mut self) -> String {
        render_mutation(self.store.remove())
    }
}
