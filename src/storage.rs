use crate::error::{Result, TaskError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Flat text file holding one encoded task per line
pub struct TaskFile {
    file_path: PathBuf,
}

impl TaskFile {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Read the whole file as raw bytes
    ///
    /// Returns `Ok(None)` when the file does not exist yet. Text decoding is
    /// left to the caller so one bad line cannot fail the whole read.
    pub fn read(&self) -> Result<Option<Vec<u8>>> {
        match fs::read(&self.file_path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(TaskError::StorageReadFailure {
                path: self.file_path.clone(),
                source,
            }),
        }
    }

    /// Overwrite the file with the given lines, each newline-terminated
    pub fn write<I, S>(&self, lines: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut content = String::new();
        for line in lines {
            content.push_str(line.as_ref());
            content.push('\n');
        }
        fs::write(&self.file_path, content).map_err(|source| TaskError::StorageWriteFailure {
            path: self.file_path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        let file = TaskFile::new(dir.path().join("tasks.txt"));
        assert!(file.read().unwrap().is_none());
    }

    #[test]
    fn test_write_overwrites_previous_content() {
        let dir = TempDir::new().unwrap();
        let file = TaskFile::new(dir.path().join("tasks.txt"));

        file.write(["a", "b", "c"]).unwrap();
        file.write(["d"]).unwrap();

        assert_eq!(file.read().unwrap().unwrap(), b"d\n");
    }

    #[test]
    fn test_write_empty_leaves_empty_file() {
        let dir = TempDir::new().unwrap();
        let file = TaskFile::new(dir.path().join("tasks.txt"));

        file.write(Vec::<String>::new()).unwrap();

        assert!(file.read().unwrap().unwrap().is_empty());
    }

    #[test]
    fn test_read_keeps_invalid_utf8_bytes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.txt");
        fs::write(&path, b"Work,Caf\xe9,d,2024-01-01,1\n").unwrap();

        let content = TaskFile::new(&path).read().unwrap().unwrap();
        assert_eq!(content, b"Work,Caf\xe9,d,2024-01-01,1\n");
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let file = TaskFile::new(dir.path().join("missing").join("tasks.txt"));

        let result = file.write(["a"]);
        assert!(matches!(result, Err(TaskError::StorageWriteFailure { .. })));
    }

    #[test]
    fn test_read_directory_fails() {
        let dir = TempDir::new().unwrap();
        let file = TaskFile::new(dir.path());

        let result = file.read();
        assert!(matches!(result, Err(TaskError::StorageReadFailure { .. })));
    }
}
