use anyhow::Result;

/// Source of raw input lines (implemented by Infrastructure)
pub trait LineSource {
    /// All lines in input order, without their line terminators.
    ///
    /// Both `\n` and `\r\n` terminate a line.
    fn read_lines(&self) -> Result<Vec<String>>;

    /// Human-readable origin for logs and error messages
    fn describe(&self) -> String;
}

/// Destination for output lines
pub trait LineSink {
    /// Write `line` followed by a line terminator.
    fn write_line(&mut self, line: &str) -> Result<()>;

    /// Flush buffered output. Called once after the last line.
    fn finish(&mut self) -> Result<()>;
}
