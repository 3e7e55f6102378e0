//! Formatting helper functions for displaying tasks

use crate::task::{Task, TaskKind};
use chrono::{Local, NaiveDate};

/// Get the current date in local timezone
pub fn local_date_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Check whether a pending task's deadline has passed
///
/// Deadlines are free-form text. Only values in `YYYY-MM-DD` form are
/// considered; anything else is never overdue.
pub fn is_overdue(task: &Task, today: NaiveDate) -> bool {
    if task.is_completed() {
        return false;
    }
    NaiveDate::parse_from_str(task.deadline(), "%Y-%m-%d")
        .map(|deadline| deadline < today)
        .unwrap_or(false)
}

/// Format a single task as a block of lines
pub fn format_task(task: &Task, today: NaiveDate) -> String {
    let mut result = format!("[{} Task] Title: {}\n", task.kind_label(), task.title());
    result.push_str(&format!("Description: {}\n", task.description()));

    if is_overdue(task, today) {
        result.push_str(&format!("Deadline: {} (overdue)\n", task.deadline()));
    } else {
        result.push_str(&format!("Deadline: {}\n", task.deadline()));
    }
    result.push_str(&format!("Priority: {}\n", task.priority_label()));

    match task.kind() {
        TaskKind::Work { project_name } if !project_name.is_empty() => {
            result.push_str(&format!("Project: {}\n", project_name));
        }
        TaskKind::Personal { category } if !category.is_empty() => {
            result.push_str(&format!("Category: {}\n", category));
        }
        _ => {}
    }

    let status = if task.is_completed() {
        "Completed"
    } else {
        "Pending"
    };
    result.push_str(&format!("Status: {}\n", status));
    result.push_str("----------------------\n");
    result
}

/// Format every task in enumeration order
pub fn format_tasks<'a>(tasks: impl IntoIterator<Item = &'a Task>, today: NaiveDate) -> String {
    let mut tasks = tasks.into_iter().peekable();
    if tasks.peek().is_none() {
        return "No tasks available.".to_string();
    }

    let mut result = "Task List (Sorted by Priority):\n".to_string();
    for task in tasks {
        result.push_str(&format_task(task, today));
    }
    result
}
