//! Line codec for the persisted task file
//!
//! Each task is one comma-separated line:
//!
//! ```text
//! <kind>,<title>,<description>,<deadline>,<priority>[,<extra>]
//! ```
//!
//! Fields are written as-is. A comma inside a field is not escaped, so such
//! a task splits into extra fields and comes back mangled on the next load.

use crate::error::{Result, TaskError};
use crate::task::{Task, create_task};
use serde::{Deserialize, Serialize};

const DELIMITER: &str = ",";

/// Minimum number of fields in a well-formed record
const REQUIRED_FIELDS: usize = 5;

const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// Which encoding to use when writing records
///
/// Decoding always accepts both shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum RecordFormat {
    /// Five fields; the project name or category is not written
    Legacy,
    /// Five fields plus the project name or category as a sixth
    #[default]
    Extended,
}

/// Encode a task as a single record line (without the trailing newline)
pub fn encode(task: &Task, format: RecordFormat) -> String {
    let mut fields = vec![
        task.kind_label().to_string(),
        task.title().to_string(),
        task.description().to_string(),
        task.deadline().to_string(),
        task.priority().to_string(),
    ];
    if format == RecordFormat::Extended {
        fields.push(task.extra().to_string());
    }
    fields.join(DELIMITER)
}

/// Decode a record line
///
/// # Returns
/// - `Ok(None)` for a blank line
/// - `Ok(Some(task))` for a well-formed record
/// - `Err(TaskError::MalformedRecord)` when the line has fewer than five
///   fields, a non-integer priority or an unknown kind. Callers skip the
///   line and carry on.
pub fn decode(line: &str) -> Result<Option<Task>> {
    if line.trim().is_empty() {
        return Ok(None);
    }

    let parts: Vec<&str> = line.split(DELIMITER).map(str::trim).collect();
    if parts.len() < REQUIRED_FIELDS {
        return Err(TaskError::malformed(
            line,
            format!("expected at least {} fields, found {}", REQUIRED_FIELDS, parts.len()),
        ));
    }

    let priority: i32 = parts[4]
        .parse()
        .map_err(|_| TaskError::malformed(line, format!("invalid priority '{}'", parts[4])))?;
    let extra = parts.get(5).copied().unwrap_or("");
    let kind = normalize_kind_label(parts[0]);

    create_task(kind, parts[1], parts[2], parts[3], priority, extra)
        .map(Some)
        .map_err(|e| TaskError::malformed(line, e.to_string()))
}

/// Split raw file content into record lines
///
/// A leading byte-order mark is dropped and `\r\n` endings are accepted.
/// Each line is decoded as UTF-8 on its own, so a line in another encoding
/// yields `Err(TaskError::MalformedRecord)` without affecting its neighbours.
pub fn record_lines(content: &[u8]) -> impl Iterator<Item = Result<&str>> + '_ {
    let content = content.strip_prefix(UTF8_BOM).unwrap_or(content);
    content.split(|b| *b == b'\n').map(|raw| {
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
        std::str::from_utf8(raw).map_err(|e| {
            TaskError::malformed(&String::from_utf8_lossy(raw), format!("invalid UTF-8: {}", e))
        })
    })
}

/// Strip the " Task" suffix older files carry ("Work Task", "Personal Task")
fn normalize_kind_label(label: &str) -> &str {
    let len = label.len();
    if len > 5 && label.is_char_boundary(len - 5) && label[len - 5..].eq_ignore_ascii_case(" task")
    {
        label[..len - 5].trim_end()
    } else {
        label
    }
}
