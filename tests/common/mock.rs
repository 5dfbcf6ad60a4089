//! In-memory line source and sink for integration tests.
#![allow(dead_code)]

use anyhow::{Result, anyhow};
use unique_int::domain::ports::{LineSink, LineSource};

/// Mock LineSource that serves lines from memory.
pub struct MockLineSource {
    lines: Vec<String>,
}

impl MockLineSource {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Split `text` the way a file would be: on `\n`, dropping a trailing `\r`.
    pub fn from_text(text: &str) -> Self {
        Self::new(text.lines())
    }
}

impl LineSource for MockLineSource {
    fn read_lines(&self) -> Result<Vec<String>> {
        Ok(self.lines.clone())
    }

    fn describe(&self) -> String {
        format!("memory ({} lines)", self.lines.len())
    }
}

/// Mock LineSink that records written lines.
#[derive(Default)]
pub struct MockLineSink {
    pub lines: Vec<String>,
    pub finished: bool,
    /// Fail on the n-th write (0-based) when set
    pub fail_at: Option<usize>,
}

impl MockLineSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_at(n: usize) -> Self {
        Self {
            fail_at: Some(n),
            ..Self::default()
        }
    }

    pub fn values(&self) -> Vec<i64> {
        self.lines
            .iter()
            .map(|l| l.parse().expect("sink line is an integer"))
            .collect()
    }
}

impl LineSink for MockLineSink {
    fn write_line(&mut self, line: &str) -> Result<()> {
        if self.fail_at == Some(self.lines.len()) {
            return Err(anyhow!("sink full"));
        }
        self.lines.push(line.to_string());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.finished = true;
        Ok(())
    }
}
