//! Priority-ordered task store with undo history
//!
//! The store owns every live task and every removed task still waiting in
//! the undo history. Each successful mutation rewrites the whole task file.

use crate::codec::{self, RecordFormat};
use crate::error::{Result, TaskError};
use crate::storage::TaskFile;
use crate::task::{Task, create_task};
use std::path::Path;
use tracing::{debug, info, warn};

/// What a mutating operation did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Added { title: String },
    Removed { title: String },
    Restored { title: String },
    NothingToRemove,
    NothingToUndo,
}

/// Result of a mutating operation
///
/// `warning` is set when the in-memory change succeeded but writing the
/// task file did not. The in-memory state is kept either way.
#[derive(Debug)]
pub struct Mutation {
    pub outcome: Outcome,
    pub warning: Option<TaskError>,
}

impl Mutation {
    fn unchanged(outcome: Outcome) -> Self {
        Self {
            outcome,
            warning: None,
        }
    }
}

/// Summary of the initial load
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Number of tasks loaded
    pub loaded: usize,
    /// True when no task file existed yet
    pub fresh: bool,
    /// Lines that could not be decoded (`TaskError::MalformedRecord`)
    pub skipped: Vec<TaskError>,
    /// Set when the file existed but could not be read
    pub read_error: Option<TaskError>,
}

pub struct TaskStore {
    /// Live tasks, sorted by priority ascending. Equal priorities keep
    /// insertion order.
    tasks: Vec<Task>,
    /// Removed tasks, most recent last
    undo_history: Vec<Task>,
    file: TaskFile,
    format: RecordFormat,
}

impl TaskStore {
    /// Create a store backed by `file` and load whatever it holds
    pub fn open(file: TaskFile, format: RecordFormat) -> (Self, LoadReport) {
        let mut store = Self {
            tasks: Vec::new(),
            undo_history: Vec::new(),
            file,
            format,
        };
        let report = store.load_from_storage();
        (store, report)
    }

    /// Add a new task built from the given fields
    ///
    /// # Errors
    /// Returns `TaskError::InvalidTaskType` if `kind` is not recognized.
    /// Nothing is added or saved in that case.
    pub fn add(
        &mut self,
        kind: &str,
        title: &str,
        description: &str,
        deadline: &str,
        priority: i32,
        extra: &str,
    ) -> Result<Mutation> {
        let task = create_task(kind, title, description, deadline, priority, extra)?;
        debug!(title = task.title(), priority, "adding task");

        let outcome = Outcome::Added {
            title: task.title().to_string(),
        };
        self.insert_ordered(task);
        Ok(self.commit(outcome))
    }

    /// All live tasks in ascending priority order
    pub fn list(&self) -> impl Iterator<Item = &Task> + '_ {
        self.tasks.iter()
    }

    /// Remove the highest-priority task and push it onto the undo history
    pub fn remove(&mut self) -> Mutation {
        if self.tasks.is_empty() {
            return Mutation::unchanged(Outcome::NothingToRemove);
        }

        let task = self.tasks.remove(0);
        debug!(title = task.title(), "removed task");
        let outcome = Outcome::Removed {
            title: task.title().to_string(),
        };
        self.undo_history.push(task);
        self.commit(outcome)
    }

    /// Restore the most recently removed task
    ///
    /// The task goes back to its priority position, after any live tasks of
    /// equal priority.
    pub fn undo(&mut self) -> Mutation {
        let Some(task) = self.undo_history.pop() else {
            return Mutation::unchanged(Outcome::NothingToUndo);
        };

        debug!(title = task.title(), "restoring task");
        let outcome = Outcome::Restored {
            title: task.title().to_string(),
        };
        self.insert_ordered(task);
        self.commit(outcome)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Number of removed tasks available to undo
    pub fn undo_depth(&self) -> usize {
        self.undo_history.len()
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    fn insert_ordered(&mut self, task: Task) {
        let pos = self
            .tasks
            .partition_point(|t| t.priority() <= task.priority());
        self.tasks.insert(pos, task);
    }

    fn commit(&self, outcome: Outcome) -> Mutation {
        let warning = self.save_to_storage().err();
        Mutation { outcome, warning }
    }

    fn load_from_storage(&mut self) -> LoadReport {
        let mut report = LoadReport::default();

        let content = match self.file.read() {
            Ok(Some(content)) => content,
            Ok(None) => {
                info!(path = %self.file.path().display(), "no task file found, starting fresh");
                report.fresh = true;
                return report;
            }
            Err(e) => {
                warn!("{}", e);
                report.read_error = Some(e);
                return report;
            }
        };

        for line in codec::record_lines(&content) {
            match line.and_then(codec::decode) {
                Ok(Some(task)) => {
                    self.insert_ordered(task);
                    report.loaded += 1;
                }
                Ok(None) => {}
                Err(e) => {
                    warn!("skipping line: {}", e);
                    report.skipped.push(e);
                }
            }
        }

        info!(
            loaded = report.loaded,
            skipped = report.skipped.len(),
            "loaded tasks"
        );
        report
    }

    fn save_to_storage(&self) -> Result<()> {
        let format = self.format;
        self.file
            .write(self.tasks.iter().map(|t| codec::encode(t, format)))
            .inspect_err(|e| warn!("{}", e))
    }
}
