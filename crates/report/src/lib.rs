//! Copycheck report emission.
//!
//! One CSV artifact per metric run, written into a `plagiarism_results`
//! subdirectory under the corpus path (created if absent). The table has
//! document names as both row and column labels, integer scores in the
//! cells, empty cells on the diagonal (a missing value, deliberately not
//! zero), and a trailing `Plagiated` column holding the literal strings
//! `True` / `False`.
//!
//! Output is byte-identical across runs for identical input: no
//! timestamps, no environment-dependent formatting.

use std::fs;
use std::path::{Path, PathBuf};

use engine::{SimilarityMatrix, Verdict};
use metrics::Metric;
use thiserror::Error;
use tracing::info;

/// Name of the results subdirectory created under the corpus path.
pub const RESULTS_DIR: &str = "plagiarism_results";

/// Errors produced while writing a report artifact.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Matrix and verdict list disagree on the number of documents.
    #[error("matrix has {rows} rows but {verdicts} verdicts were supplied")]
    ShapeMismatch { rows: usize, verdicts: usize },

    /// Filesystem failure while creating the results directory or writing
    /// the artifact.
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

/// Artifact file name for a metric, fixed by metric identity.
pub fn report_file_name(metric: Metric) -> &'static str {
    match metric {
        Metric::Levenshtein => "LevenshteinDist.csv",
        Metric::Jaro => "JaroDist.csv",
        Metric::SequenceBlocks => "SequenceMatcher.csv",
    }
}

/// Write the report for one metric run and return the artifact path.
pub fn write_report(
    matrix: &SimilarityMatrix,
    verdicts: &[Verdict],
    corpus_dir: &Path,
) -> Result<PathBuf, ReportError> {
    if matrix.len() != verdicts.len() {
        return Err(ReportError::ShapeMismatch {
            rows: matrix.len(),
            verdicts: verdicts.len(),
        });
    }

    let results_dir = corpus_dir.join(RESULTS_DIR);
    fs::create_dir_all(&results_dir)?;

    let path = results_dir.join(report_file_name(matrix.metric()));
    fs::write(&path, render_csv(matrix, verdicts))?;

    info!(
        metric = matrix.metric().name(),
        path = %path.display(),
        docs = matrix.len(),
        "report_written"
    );
    Ok(path)
}

/// Render the full table. Kept separate from the I/O so tests can assert on
/// exact bytes.
fn render_csv(matrix: &SimilarityMatrix, verdicts: &[Verdict]) -> String {
    let mut out = String::new();

    // Header: empty leading cell, one column per document, then the verdict
    // column.
    for name in matrix.names() {
        out.push(',');
        out.push_str(&escape_field(name));
    }
    out.push_str(",Plagiated\n");

    for (i, verdict) in verdicts.iter().enumerate() {
        out.push_str(&escape_field(&verdict.name));
        for cell in matrix.row(i) {
            out.push(',');
            if let Some(score) = cell {
                out.push_str(&score.to_string());
            }
        }
        out.push(',');
        out.push_str(if verdict.plagiarized { "True" } else { "False" });
        out.push('\n');
    }

    out
}

/// Quote a field only when it needs it (comma, quote, or line break);
/// embedded quotes double per CSV convention.
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
