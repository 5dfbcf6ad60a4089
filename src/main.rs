use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use unique_int::app::dto::SortAlgorithmKind;
use unique_int::app::engine::UniqueIntEngine;
use unique_int::cli;

#[derive(Parser)]
#[command(
    name = "uniqint",
    about = "Write the distinct integers of a text file in ascending order",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Sorting algorithm used to order the distinct values
    #[arg(long, value_enum, global = true, default_value_t = SortAlgorithmKind::Merge)]
    algorithm: SortAlgorithmKind,

    /// Print the report as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Process one input file
    Run {
        /// Input file, one token per line
        input: PathBuf,

        /// Output file (default: <INPUT>_results.txt next to the input)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Process every .txt file in a directory
    Batch {
        /// Directory containing input files
        input_dir: PathBuf,

        /// Directory receiving <name>_results.txt files (created if missing)
        output_dir: PathBuf,
    },
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(args.verbose);

    let engine = UniqueIntEngine::new(args.algorithm);
    match args.command {
        Commands::Run { input, output } => {
            cli::run_and_display(&engine, &input, output.as_deref(), args.json)
        }
        Commands::Batch {
            input_dir,
            output_dir,
        } => cli::batch_and_display(&engine, &input_dir, &output_dir, args.json),
    }
}
