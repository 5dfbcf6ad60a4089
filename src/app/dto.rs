use crate::domain::pipeline::RunSummary;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
#[derive(Default)]
pub enum SortAlgorithmKind {
    #[default]
    Merge,
    Quick,
    Insertion,
    Bubble,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub input_path: String,
    pub output_path: String,
    pub algorithm: SortAlgorithmKind,
    pub summary: RunSummary,
}

/// One file of a batch run: either a report or the error that aborted it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileOutcome {
    pub input_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<RunReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileOutcome {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub input_dir: String,
    pub output_dir: String,
    pub algorithm: SortAlgorithmKind,
    pub files: Vec<FileOutcome>,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.files.iter().filter(|f| f.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.files.len() - self.succeeded()
    }
}
