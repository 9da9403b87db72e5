use std::path::{Path, PathBuf};

use eyre::{Context, Result};

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// Existing content was identical, nothing was touched
    Unchanged,
}

/// A generated output document and where it goes.
#[derive(Debug, Clone)]
pub struct OutputFile {
    path: PathBuf,
    content: String,
}

impl OutputFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Write the document, creating parent directories as needed.
    ///
    /// The file is left untouched when it already holds the same content,
    /// so watchers downstream do not see spurious changes.
    pub fn write(&self) -> Result<WriteResult> {
        if let Ok(existing) = std::fs::read_to_string(&self.path) {
            if existing == self.content {
                return Ok(WriteResult::Unchanged);
            }
        }

        write_file(&self.path, &self.content)
            .wrap_err_with(|| format!("failed to write {}", self.path.display()))?;
        Ok(WriteResult::Written)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("gen").join("types").join("index.ts");

        let result = OutputFile::new(&path, "export {};\n").write().unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "export {};\n");
    }

    #[test]
    fn test_write_overwrites_changed_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("index.ts");
        fs::write(&path, "old").unwrap();

        let result = OutputFile::new(&path, "new").write().unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_write_skips_identical_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("index.ts");
        fs::write(&path, "same").unwrap();

        let result = OutputFile::new(&path, "same").write().unwrap();

        assert_eq!(result, WriteResult::Unchanged);
    }
}
