use crate::app::dto::{BatchReport, RunReport};
use crate::app::engine::{UniqueIntEngine, default_output_path};
use anyhow::{Context as _, Result, bail};
use serde::Serialize;
use std::path::Path;

/// Run a single input file and print its report. `output` defaults to the results
/// path next to the input.
pub fn run_and_display(
    engine: &UniqueIntEngine,
    input: &Path,
    output: Option<&Path>,
    json: bool,
) -> Result<()> {
    let output = match output {
        Some(p) => p.to_path_buf(),
        None => default_output_path(input)?,
    };
    let report = engine.process_file(input, &output)?;

    if json {
        print_json(&report)
    } else {
        print_run_report(&report);
        Ok(())
    }
}

/// Run every input file in `input_dir` and print the batch report.
///
/// Fails after printing when any single file failed.
pub fn batch_and_display(
    engine: &UniqueIntEngine,
    input_dir: &Path,
    output_dir: &Path,
    json: bool,
) -> Result<()> {
    let report = engine.process_dir(input_dir, output_dir)?;

    if json {
        print_json(&report)?;
    } else {
        print_batch_report(&report);
    }

    if report.failed() > 0 {
        bail!(
            "{} of {} file(s) failed",
            report.failed(),
            report.files.len()
        );
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("Failed to serialize report")?;
    println!("{}", text);
    Ok(())
}

fn print_run_report(report: &RunReport) {
    let s = &report.summary;
    println!("Input:  {}", report.input_path);
    println!("Output: {}", report.output_path);
    println!("  Lines read:      {:>8}", s.lines_read);
    println!("  Accepted:        {:>8}", s.accepted);
    println!("  Unique written:  {:>8}", s.unique);
    println!("  Rejected:        {:>8}", s.rejected.total());
    if s.rejected.total() > 0 {
        println!("    blank:         {:>8}", s.rejected.blank);
        println!("    multi-token:   {:>8}", s.rejected.multi_token);
        println!("    malformed:     {:>8}", s.rejected.malformed);
        println!("    overflow:      {:>8}", s.rejected.overflow);
    }
}

fn print_batch_report(report: &BatchReport) {
    println!(
        "Processing {} file(s) from {} into {}\n",
        report.files.len(),
        report.input_dir,
        report.output_dir
    );

    for file in &report.files {
        match (&file.report, &file.error) {
            (Some(r), _) => println!(
                "  ok    {} -> {} ({} unique, {} rejected)",
                file.input_path,
                r.output_path,
                r.summary.unique,
                r.summary.rejected.total()
            ),
            (None, Some(err)) => println!("  FAIL  {}: {}", file.input_path, err),
            (None, None) => println!("  ??    {}", file.input_path),
        }
    }

    println!(
        "\n{} succeeded, {} failed",
        report.succeeded(),
        report.failed()
    );
}
