//! Interactive menu tests driven through in-memory input
mod common;

use common::*;
use task_manager::*;

fn run_script(manager: &mut TaskManager, script: &str) -> String {
    let mut output = Vec::new();
    menu::run(manager, script.as_bytes(), &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_full_session() {
    let file = get_test_file();
    let mut manager = TaskManager::new(&file.path, RecordFormat::Extended);

    let output = run_script(
        &mut manager,
        "1\nWork\nFix bug\ndesc\n2999-01-01\n1\nProj\n\
         1\nPersonal\nGym\nlegs\nFriday\n3\nHealth\n\
         2\n3\n4\n2\n5\n",
    );

    assert!(output.contains("Task 'Fix bug' added successfully!"));
    assert!(output.contains("Task 'Gym' added successfully!"));
    assert!(output.contains("Task List (Sorted by Priority):"));
    assert!(output.contains("[Work Task] Title: Fix bug"));
    assert!(output.contains("Priority: High"));
    assert!(output.contains("Category: Health"));
    assert!(output.contains("Task 'Fix bug' removed successfully! You can undo this action."));
    assert!(output.contains("Undo successful! Task 'Fix bug' has been restored."));
    assert!(output.ends_with("Exiting Task Manager. Goodbye!\n"));

    assert_eq!(
        read_back(&file),
        "Work,Fix bug,desc,2999-01-01,1,Proj\nPersonal,Gym,legs,Friday,3,Health\n"
    );
}

#[test]
fn test_invalid_kind_is_reported() {
    let file = get_test_file();
    let mut manager = TaskManager::new(&file.path, RecordFormat::Extended);

    let output = run_script(&mut manager, "1\nChore\nDishes\n\ntoday\n2\n\n2\n5\n");

    assert!(output.contains("Failed to add task: Invalid task type 'Chore'"));
    assert!(output.contains("No tasks available."));
}

#[test]
fn test_startup_notices_for_skipped_lines() {
    let file = get_test_file();
    seed(&file, "Work,ok,d,2024-01-01,1\nbroken line\n");
    let mut manager = TaskManager::new(&file.path, RecordFormat::Extended);

    let output = run_script(&mut manager, "5\n");

    assert!(output.starts_with("Skipping invalid line. Malformed record 'broken line'"));
    assert!(!output.contains("Starting fresh"));
}

#[test]
fn test_nothing_to_remove_or_undo() {
    let file = get_test_file();
    let mut manager = TaskManager::new(&file.path, RecordFormat::Extended);

    let output = run_script(&mut manager, "3\n4\n5\n");

    assert!(output.contains("No tasks to remove."));
    assert!(output.contains("No actions to undo."));
    assert!(!file.path.exists());
}

#[test]
fn test_fresh_start_notice_names_the_file() {
    let file = get_test_file();
    let mut manager = TaskManager::new(&file.path, RecordFormat::Extended);

    let output = run_script(&mut manager, "5\n");

    assert!(output.starts_with(&format!(
        "No previous tasks found in {}. Starting fresh.\n",
        file.path.display()
    )));
}
