//! Common test utilities for integration tests

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use task_manager::{LoadReport, RecordFormat, Task, TaskFile, TaskStore};
use tempfile::TempDir;

/// Temporary directory with a task file path inside it
pub struct TestFile {
    pub dir: TempDir,
    pub path: PathBuf,
}

pub fn get_test_file() -> TestFile {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tasks.txt");
    TestFile { dir, path }
}

/// Write raw content to the task file before opening a store
pub fn seed(file: &TestFile, content: &str) {
    fs::write(&file.path, content).unwrap();
}

pub fn read_back(file: &TestFile) -> String {
    fs::read_to_string(&file.path).unwrap()
}

pub fn open_store(file: &TestFile, format: RecordFormat) -> (TaskStore, LoadReport) {
    TaskStore::open(TaskFile::new(&file.path), format)
}

/// Snapshot of list() as comparable owned tasks
pub fn snapshot(store: &TaskStore) -> Vec<Task> {
    store.list().cloned().collect()
}

pub fn priorities(store: &TaskStore) -> Vec<i32> {
    store.list().map(Task::priority).collect()
}
