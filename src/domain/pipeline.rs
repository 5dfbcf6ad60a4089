use crate::domain::classifier::{Classification, Rejection, classify};
use crate::domain::ports::{LineSink, LineSource};
use crate::domain::sorter::Sorter;
use crate::domain::unique_set::UniqueIntSet;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Per-reason counts of skipped lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectionCounts {
    pub blank: usize,
    pub multi_token: usize,
    pub malformed: usize,
    pub overflow: usize,
}

impl RejectionCounts {
    pub fn record(&mut self, reason: Rejection) {
        match reason {
            Rejection::Blank => self.blank += 1,
            Rejection::MultiToken => self.multi_token += 1,
            Rejection::Malformed => self.malformed += 1,
            Rejection::Overflow => self.overflow += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.blank + self.multi_token + self.malformed + self.overflow
    }
}

/// Result of one pipeline run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub lines_read: usize,
    /// Lines that classified as integers, duplicates included
    pub accepted: usize,
    pub rejected: RejectionCounts,
    /// Distinct values written to the sink
    pub unique: usize,
}

/// Pipeline driver: classify → deduplicate → sort → write
pub struct UniqueIntPipeline {
    sorter: Box<dyn Sorter>,
}

impl UniqueIntPipeline {
    pub fn new(sorter: Box<dyn Sorter>) -> Self {
        Self { sorter }
    }

    pub fn sorter_name(&self) -> &str {
        self.sorter.name()
    }

    /// Distinct accepted values of `lines`, ascending.
    pub fn collect<'a, I>(&self, lines: I) -> (Vec<i64>, RunSummary)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let lines = lines.into_iter();
        // Fresh set per run, sized for the worst case of every line being distinct.
        let mut set = UniqueIntSet::with_capacity(lines.size_hint().0);
        let mut summary = RunSummary::default();

        for (idx, line) in lines.enumerate() {
            summary.lines_read += 1;
            match classify(line) {
                Classification::Value(v) => {
                    summary.accepted += 1;
                    set.insert(v);
                }
                Classification::Rejected(reason) => {
                    trace!(line = idx + 1, ?reason, "skipping line");
                    summary.rejected.record(reason);
                }
            }
        }

        summary.unique = set.len();
        let sorted = self.sorter.sort(set.into_values());
        (sorted, summary)
    }

    /// Read every line from `source` and write the sorted distinct integers to `sink`.
    ///
    /// Malformed lines are skipped. Only I/O failures from the source or sink are errors.
    pub fn run(&self, source: &dyn LineSource, sink: &mut dyn LineSink) -> Result<RunSummary> {
        let lines = source.read_lines()?;
        let (sorted, summary) = self.collect(lines.iter().map(String::as_str));

        debug!(
            source = %source.describe(),
            sorter = self.sorter.name(),
            lines = summary.lines_read,
            unique = summary.unique,
            "writing sorted values"
        );

        for v in &sorted {
            sink.write_line(&v.to_string())?;
        }
        sink.finish()?;
        Ok(summary)
    }
}
