//! Error types for the task manager
//!
//! Only `InvalidTaskType` ever reaches a caller as a hard failure. The other
//! variants are reported alongside a successful in-memory result.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("Invalid task type '{0}'. Valid types: Work, Personal")]
    InvalidTaskType(String),

    #[error("Malformed record '{line}': {reason}")]
    MalformedRecord { line: String, reason: String },

    #[error("Failed to read tasks from {}: {source}", path.display())]
    StorageReadFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to save tasks to {}: {source}", path.display())]
    StorageWriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TaskError {
    pub(crate) fn malformed(line: &str, reason: impl Into<String>) -> Self {
        TaskError::MalformedRecord {
            line: line.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TaskError>;
