use crate::domain::ports::LineSink;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Buffered file line sink. Lines are terminated with `\n`.
///
/// The file is created (or truncated) on the first write or on `finish`, never
/// earlier. A run whose source fails therefore leaves an existing file untouched,
/// and a run that writes no lines still leaves an empty results file behind.
pub struct FileLineSink {
    path: PathBuf,
    writer: Option<BufWriter<File>>,
}

impl FileLineSink {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            writer: None,
        }
    }

    fn writer(&mut self) -> Result<&mut BufWriter<File>> {
        if self.writer.is_none() {
            let file = File::create(&self.path).with_context(|| {
                format!("Failed to create output file: {}", self.path.display())
            })?;
            self.writer = Some(BufWriter::new(file));
        }
        self.writer
            .as_mut()
            .context("output writer missing after open")
    }
}

impl LineSink for FileLineSink {
    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer()?, "{}", line)
            .with_context(|| format!("Failed to write to {}", self.path.display()))
    }

    fn finish(&mut self) -> Result<()> {
        self.writer()?
            .flush()
            .with_context(|| format!("Failed to flush {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_one_value_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let mut sink = FileLineSink::new(&path);
        sink.write_line("-9").unwrap();
        sink.write_line("62").unwrap();
        sink.finish().unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "-9\n62\n");
    }

    #[test]
    fn test_finish_without_lines_truncates_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        std::fs::write(&path, "stale\n").unwrap();

        let mut sink = FileLineSink::new(&path);
        sink.finish().unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_file_untouched_until_first_use() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        std::fs::write(&path, "1\n2\n").unwrap();

        let sink = FileLineSink::new(&path);
        drop(sink);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "1\n2\n");

        let fresh = dir.path().join("fresh.txt");
        drop(FileLineSink::new(&fresh));
        assert!(!fresh.exists());
    }

    #[test]
    fn test_unwritable_path_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing_dir").join("out.txt");
        let mut sink = FileLineSink::new(&path);
        let err = sink.finish().unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to create output file"));
    }
}
