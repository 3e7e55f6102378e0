use super::model::{Task, TaskKind};
use crate::error::{Result, TaskError};

/// Build a task of the variant named by `kind_label`
///
/// The label is matched case-insensitively against "Work" and "Personal".
/// `extra` becomes the project name for work tasks and the category for
/// personal tasks.
///
/// # Errors
/// Returns `TaskError::InvalidTaskType` for any other label.
pub fn create_task(
    kind_label: &str,
    title: &str,
    description: &str,
    deadline: &str,
    priority: i32,
    extra: &str,
) -> Result<Task> {
    let label = kind_label.trim();
    let kind = if label.eq_ignore_ascii_case("work") {
        TaskKind::Work {
            project_name: extra.to_string(),
        }
    } else if label.eq_ignore_ascii_case("personal") {
        TaskKind::Personal {
            category: extra.to_string(),
        }
    } else {
        return Err(TaskError::InvalidTaskType(kind_label.to_string()));
    };

    Ok(Task::new(title, description, deadline, priority, kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_work_task() {
        let task = create_task("Work", "Fix bug", "desc", "2024-01-01", 1, "Proj").unwrap();
        assert_eq!(
            task.kind(),
            &TaskKind::Work {
                project_name: "Proj".to_string()
            }
        );
        assert_eq!(task.title(), "Fix bug");
        assert_eq!(task.priority(), 1);
    }

    #[test]
    fn test_kind_label_is_case_insensitive() {
        let task = create_task("pErSoNaL", "Gym", "", "", 3, "Health").unwrap();
        assert_eq!(task.kind_label(), "Personal");
        assert_eq!(task.extra(), "Health");

        let task = create_task("WORK", "Deploy", "", "", 2, "").unwrap();
        assert_eq!(task.kind_label(), "Work");
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let result = create_task("Bogus", "t", "d", "x", 1, "e");
        assert!(matches!(result, Err(TaskError::InvalidTaskType(ref k)) if k == "Bogus"));
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Invalid task type 'Bogus'")
        );
    }
}
