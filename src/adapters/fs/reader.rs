use crate::domain::ports::LineSource;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// File system line source
pub struct FileLineSource {
    path: PathBuf,
}

impl FileLineSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl LineSource for FileLineSource {
    fn read_lines(&self) -> Result<Vec<String>> {
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read input file: {}", self.path.display()))?;
        // str::lines strips a trailing `\r` before each `\n`
        Ok(content.lines().map(String::from).collect())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
