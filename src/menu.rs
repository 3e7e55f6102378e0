//! Interactive text menu
//!
//! Reads choices from any `BufRead` and writes prompts and results to any
//! `Write`, so the same loop drives stdin/stdout and in-memory buffers.

use crate::TaskManager;
use anyhow::Result;
use std::io::{BufRead, Write};

const MENU: &str = "\nTask Management System
1. Add Task
2. View Tasks
3. Remove Task
4. Undo Last Removal
5. Exit";

const GOODBYE: &str = "Exiting Task Manager. Goodbye!";

/// Run the menu loop until the user exits or input ends
pub fn run<R: BufRead, W: Write>(
    manager: &mut TaskManager,
    mut input: R,
    mut output: W,
) -> Result<()> {
    for message in manager.startup_messages() {
        writeln!(output, "{}", message)?;
    }

    loop {
        writeln!(output, "{}", MENU)?;
        let Some(choice) = prompt(&mut input, &mut output, "Enter your choice: ")? else {
            break;
        };

        match choice.as_str() {
            "1" => {
                let Some(message) = add_task(manager, &mut input, &mut output)? else {
                    break;
                };
                writeln!(output, "{}", message)?;
            }
            "2" => writeln!(output, "{}", manager.handle_list())?,
            "3" => writeln!(output, "{}", manager.handle_remove())?,
            "4" => writeln!(output, "{}", manager.handle_undo())?,
            "5" => break,
            _ => writeln!(output, "Invalid choice! Please try again.")?,
        }
    }

    writeln!(output, "{}", GOODBYE)?;
    output.flush()?;
    Ok(())
}

/// Collect the fields of a new task. Returns `None` if input ends first.
fn add_task<R: BufRead, W: Write>(
    manager: &mut TaskManager,
    input: &mut R,
    output: &mut W,
) -> Result<Option<String>> {
    let Some(kind) = prompt(input, output, "Enter task type (Work/Personal): ")? else {
        return Ok(None);
    };
    let Some(title) = prompt(input, output, "Enter task title: ")? else {
        return Ok(None);
    };
    let Some(description) = prompt(input, output, "Enter task description: ")? else {
        return Ok(None);
    };
    let Some(deadline) = prompt(input, output, "Enter deadline (YYYY-MM-DD): ")? else {
        return Ok(None);
    };

    let priority = loop {
        let Some(raw) = prompt(input, output, "Enter priority (1 = High, 2 = Medium, 3 = Low): ")?
        else {
            return Ok(None);
        };
        match raw.parse::<i32>() {
            Ok(p) => break p,
            Err(_) => writeln!(output, "Invalid priority '{}'. Please enter a number.", raw)?,
        }
    };

    let Some(extra) = prompt(
        input,
        output,
        "Enter extra info (Project Name for Work, Category for Personal): ",
    )?
    else {
        return Ok(None);
    };

    Ok(Some(manager.handle_add(
        &kind,
        &title,
        &description,
        &deadline,
        priority,
        &extra,
    )))
}

/// Print `text` and read one trimmed line. Returns `None` at end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> Result<Option<String>> {
    write!(output, "{}", text)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
