//! Task Manager - Main Entry Point
//!
//! This is the main entry point for the interactive task manager.
//! The actual implementation is in the `task_manager` library.

use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use task_manager::{RecordFormat, Settings, TaskManager, menu};
use tracing_subscriber::EnvFilter;

/// Task Manager - priority-ordered task list with undo
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the task file (default: tasks.txt)
    #[arg(long)]
    file: Option<PathBuf>,

    /// Record format used when saving
    #[arg(long, value_enum)]
    format: Option<RecordFormat>,

    /// Path to a TOML settings file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("task_manager=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let settings = Settings::load(args.config.as_deref())?.with_overrides(args.file, args.format);

    let mut manager = TaskManager::from_settings(&settings);
    menu::run(&mut manager, io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}
