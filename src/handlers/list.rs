//! List handler for the task manager

use crate::TaskManager;
use crate::formatting;

impl TaskManager {
    /// Formats every live task in priority order.
    pub fn handle_list(&self) -> String {
        formatting::format_tasks(self.store.list(), formatting::local_date_today())
    }
}
