use crate::adapters::fs::reader::FileLineSource;
use crate::adapters::fs::writer::FileLineSink;
use crate::adapters::sorter::{
    BubbleSorter, InsertionSorter, MergeSorter, QuickSorter, merge_sort,
};
use crate::app::dto::*;
use crate::domain::pipeline::UniqueIntPipeline;
use crate::domain::sorter::Sorter;
use anyhow::{Context as _, Result, anyhow};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Suffix appended to an input file name to form its results file name
pub const RESULTS_SUFFIX: &str = "_results.txt";

const INPUT_EXTENSION: &str = "txt";

pub fn sorter_for(kind: SortAlgorithmKind) -> Box<dyn Sorter> {
    match kind {
        SortAlgorithmKind::Merge => Box::new(MergeSorter),
        SortAlgorithmKind::Quick => Box::new(QuickSorter),
        SortAlgorithmKind::Insertion => Box::new(InsertionSorter),
        SortAlgorithmKind::Bubble => Box::new(BubbleSorter),
    }
}

/// `dir/sample_input_01.txt` → `output_dir/sample_input_01.txt_results.txt`
pub fn results_path(input: &Path, output_dir: &Path) -> Result<PathBuf> {
    let name = input
        .file_name()
        .ok_or_else(|| anyhow!("Input path has no file name: {}", input.display()))?;
    let mut results_name = name.to_os_string();
    results_name.push(RESULTS_SUFFIX);
    Ok(output_dir.join(results_name))
}

/// Results path placed next to the input file.
pub fn default_output_path(input: &Path) -> Result<PathBuf> {
    let dir = input.parent().unwrap_or_else(|| Path::new(""));
    results_path(input, dir)
}

/// Runs the pipeline over files. Every run builds a fresh pipeline, so no state is
/// shared between files.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniqueIntEngine {
    algorithm: SortAlgorithmKind,
}

impl UniqueIntEngine {
    pub fn new(algorithm: SortAlgorithmKind) -> Self {
        Self { algorithm }
    }

    pub fn pipeline(&self) -> UniqueIntPipeline {
        UniqueIntPipeline::new(sorter_for(self.algorithm))
    }

    pub fn process_file(&self, input: &Path, output: &Path) -> Result<RunReport> {
        // The sink opens `output` lazily, after the whole input has been read,
        // so `input == output` is safe and a failed read leaves `output` as it was.
        let source = FileLineSource::new(input);
        let mut sink = FileLineSink::new(output);
        let pipeline = self.pipeline();

        let summary = pipeline
            .run(&source, &mut sink)
            .with_context(|| format!("Failed to process {}", input.display()))?;

        info!(
            input = %input.display(),
            output = %output.display(),
            sorter = pipeline.sorter_name(),
            unique = summary.unique,
            rejected = summary.rejected.total(),
            "processed file"
        );

        Ok(RunReport {
            input_path: input.display().to_string(),
            output_path: output.display().to_string(),
            algorithm: self.algorithm,
            summary,
        })
    }

    /// Process every `.txt` file directly inside `input_dir`, writing results files
    /// into `output_dir`.
    ///
    /// A file that fails is recorded in the report and the batch moves on. Only a
    /// failure to list `input_dir` or create `output_dir` is an error.
    pub fn process_dir(&self, input_dir: &Path, output_dir: &Path) -> Result<BatchReport> {
        let inputs = list_input_files(input_dir)?;
        std::fs::create_dir_all(output_dir).with_context(|| {
            format!("Failed to create output directory: {}", output_dir.display())
        })?;
        debug!(count = inputs.len(), dir = %input_dir.display(), "found input files");

        let mut files = Vec::with_capacity(inputs.len());
        for input in inputs {
            let outcome = match results_path(&input, output_dir)
                .and_then(|output| self.process_file(&input, &output))
            {
                Ok(report) => FileOutcome {
                    input_path: input.display().to_string(),
                    report: Some(report),
                    error: None,
                },
                Err(e) => {
                    warn!(input = %input.display(), error = %format!("{:#}", e), "file failed");
                    FileOutcome {
                        input_path: input.display().to_string(),
                        report: None,
                        error: Some(format!("{:#}", e)),
                    }
                }
            };
            files.push(outcome);
        }

        Ok(BatchReport {
            input_dir: input_dir.display().to_string(),
            output_dir: output_dir.display().to_string(),
            algorithm: self.algorithm,
            files,
        })
    }
}

/// `.txt` files in `dir` (non-recursive), skipping earlier results files, ordered by path.
fn list_input_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read input directory: {}", dir.display()))?;

    let mut inputs = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to list {}", dir.display()))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let is_txt = path
            .extension()
            .is_some_and(|ext| ext == INPUT_EXTENSION);
        let is_results = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.ends_with(RESULTS_SUFFIX));
        if is_txt && !is_results {
            inputs.push(path);
        }
    }
    Ok(merge_sort(inputs))
}
