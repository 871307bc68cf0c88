//! copycheck - corpus plagiarism scanner.
//!
//! Scans a directory of submissions, computes pairwise similarity under the
//! requested metrics, and writes one CSV report per metric into a
//! `plagiarism_results` subdirectory of the corpus path.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use copycheck::{run, CopycheckConfig, MetricRunResult, RunOptions};

#[derive(Debug, Parser)]
#[command(
    name = "copycheck",
    version,
    about = "Detect likely plagiarism across a directory of documents"
)]
struct Cli {
    /// Path to the corpus directory to be checked.
    #[arg(short = 'p', long = "path")]
    path: PathBuf,

    /// Similarity metric to run: lev, jaro, seq, or all.
    #[arg(short = 'f', long = "metric")]
    metric: Option<String>,

    /// Only compare files with this extension (with or without the dot).
    #[arg(short = 'e', long = "ext")]
    ext: Option<String>,

    /// Classification threshold in 0..=100; scores strictly above it flag
    /// a document.
    #[arg(short = 't', long = "threshold")]
    threshold: Option<u8>,

    /// YAML pipeline configuration file. Flags given on the command line
    /// take precedence over file values.
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Print the run summary as JSON on stdout.
    #[arg(long = "summary-json")]
    summary_json: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(ref path) => match CopycheckConfig::from_file(path) {
            Ok(config) => config,
            Err(err) => {
                error!(path = %path.display(), error = %err, "config_load_failed");
                eprintln!("copycheck: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => CopycheckConfig::default(),
    };

    if let Some(metric) = cli.metric {
        config.metric = metric;
    }
    if let Some(threshold) = cli.threshold {
        config.threshold = threshold;
    }
    if let Err(err) = config.validate() {
        eprintln!("copycheck: {err}");
        return ExitCode::FAILURE;
    }

    let opts = match RunOptions::from_config(cli.path, cli.ext, &config) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("copycheck: {err}");
            return ExitCode::FAILURE;
        }
    };

    let summary = match run(&opts) {
        Ok(summary) => summary,
        Err(err) => {
            eprintln!("copycheck: {err}");
            return ExitCode::FAILURE;
        }
    };

    for outcome in &summary.outcomes {
        match &outcome.result {
            MetricRunResult::Written { path } => {
                println!("{}: report written to {}", outcome.metric, path.display());
            }
            MetricRunResult::Failed { error } => {
                eprintln!("{}: run failed: {error}", outcome.metric);
            }
        }
    }

    if cli.summary_json {
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("copycheck: failed to serialize summary: {err}");
                return ExitCode::FAILURE;
            }
        }
    }

    if summary.all_succeeded() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
