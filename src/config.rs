//! Settings loaded from an optional TOML file
//!
//! Command-line flags override anything set here.

use crate::codec::RecordFormat;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default task file, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "tasks.txt";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Path to the task file
    pub data_file: PathBuf,
    /// Encoding used when writing the task file
    pub record_format: RecordFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            record_format: RecordFormat::default(),
        }
    }
}

impl Settings {
    /// Load settings from `path`, or the defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let settings: Settings = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(settings)
    }

    /// Apply command-line overrides
    pub fn with_overrides(
        mut self,
        data_file: Option<PathBuf>,
        format: Option<RecordFormat>,
    ) -> Self {
        if let Some(data_file) = data_file {
            self.data_file = data_file;
        }
        if let Some(format) = format {
            self.record_format = format;
        }
        self
    }
}
