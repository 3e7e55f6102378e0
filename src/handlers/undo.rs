//! Undo handler for the task manager

use super::render_mutation;
use crate::TaskManager;

impl TaskManager {
    /// Restores the most recently removed task.
    pub fn handle_undo(&mut self) -> String {
        render_mutation(self.store.undo())
    }
}
