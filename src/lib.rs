//! Task Manager Library
//!
//! This library provides a single-user task list manager. Tasks are kept in
//! priority order (1 = High, 2 = Medium, 3 = Low), removed tasks can be
//! restored with undo, and every change is written to a flat text file.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **Handler Layer**: `TaskManager` - Turns store operations into user-facing messages
//! - **Domain Layer**: `task` and `store` modules - Task model, factory and the ordered store
//! - **Persistence Layer**: `codec` and `storage` modules - Line codec and the task file
//!
//! # Example
//!
//! ```no_run
//! use task_manager::{RecordFormat, TaskManager};
//!
//! let mut manager = TaskManager::new("tasks.txt", RecordFormat::Extended);
//! println!("{}", manager.handle_add("Work", "Fix bug", "desc", "2024-01-01", 1, "Proj"));
//! println!("{}", manager.handle_list());
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod formatting;
mod handlers;
pub mod menu;
pub mod storage;
pub mod store;
pub mod task;

use std::path::Path;

// Re-export commonly used types
pub use codec::RecordFormat;
pub use config::Settings;
pub use error::{Result, TaskError};
pub use storage::TaskFile;
pub use store::{LoadReport, Mutation, Outcome, TaskStore};
pub use task::{Task, TaskKind, create_task};

/// Handler for the interactive task manager
///
/// Owns the task store and renders the result of each operation as the
/// text shown to the user.
pub struct TaskManager {
    pub(crate) store: TaskStore,
    pub(crate) load_report: LoadReport,
}

impl TaskManager {
    /// Create a new task manager and load the task file
    ///
    /// # Arguments
    /// * `data_file` - Path to the task file
    /// * `format` - Encoding used when writing the file
    pub fn new(data_file: impl AsRef<Path>, format: RecordFormat) -> Self {
        let (store, load_report) = TaskStore::open(TaskFile::new(data_file), format);
        Self { store, load_report }
    }

    /// Create a task manager from loaded settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(&settings.data_file, settings.record_format)
    }

    /// Read access to the underlying store
    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Notices from the initial load, one per line
    pub fn startup_messages(&self) -> Vec<String> {
        let report = &self.load_report;
        let mut messages = Vec::new();

        if report.fresh {
            messages.push(format!(
                "No previous tasks found in {}. Starting fresh.",
                self.store.path().display()
            ));
        }
        for skipped in &report.skipped {
            messages.push(format!("Skipping invalid line. {}", skipped));
        }
        if let Some(ref e) = report.read_error {
            messages.push(format!("Warning: {}. Starting with an empty task list.", e));
        }
        messages
    }
}
