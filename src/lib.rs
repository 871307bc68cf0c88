//! Workspace umbrella crate for copycheck.
//!
//! Stitches the pipeline stages together so callers can run a full
//! plagiarism scan (load corpus, build one similarity matrix per metric,
//! classify, write reports) through a single API entry point.
//!
//! Each metric runs in isolation: a failure while building or writing one
//! metric's matrix never aborts the others, and the [`RunSummary`] records
//! exactly which artifacts were written and which runs failed.

pub use corpus::{
    load_corpus, load_corpus_with_reader, Corpus, CorpusError, Document, DocumentReader,
    PlainTextReader,
};
pub use engine::{
    build_matrix, classify, EngineConfig, EngineError, SimilarityMatrix, Verdict,
    DEFAULT_THRESHOLD,
};
pub use metrics::{
    block_match_ratio, jaro_similarity, jaro_winkler_similarity, levenshtein_distance, Metric,
    ALL_METRICS,
};
pub use normalize::{normalize, NormalizeConfig, NormalizeError};
pub use report::{report_file_name, write_report, ReportError, RESULTS_DIR};

mod config;

pub use crate::config::{metrics_for_selector, ConfigLoadError, CopycheckConfig};

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur while running the pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigLoadError),

    #[error("normalization config rejected: {0}")]
    Normalize(#[from] NormalizeError),

    #[error("corpus failure: {0}")]
    Corpus(#[from] CorpusError),

    #[error("similarity computation failed: {0}")]
    Compute(#[from] EngineError),

    #[error("report emission failed: {0}")]
    Report(#[from] ReportError),
}

/// Everything one invocation needs: where the corpus lives, which metrics
/// to run, and the stage configurations.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Corpus directory; reports land in its `plagiarism_results` subdir.
    pub corpus_dir: PathBuf,
    /// Optional file-extension filter for discovery.
    pub ext_filter: Option<String>,
    /// Metrics to run, in order.
    pub metrics: Vec<Metric>,
    /// Classification threshold (strictly-greater comparison).
    pub threshold: u8,
    /// Normalization stage configuration.
    pub normalize: NormalizeConfig,
    /// Matrix engine configuration.
    pub engine: EngineConfig,
}

impl RunOptions {
    /// Assemble run options from a validated pipeline config plus the
    /// per-invocation inputs that only the caller knows.
    pub fn from_config(
        corpus_dir: impl Into<PathBuf>,
        ext_filter: Option<String>,
        cfg: &CopycheckConfig,
    ) -> Result<Self, ConfigLoadError> {
        Ok(Self {
            corpus_dir: corpus_dir.into(),
            ext_filter,
            metrics: metrics_for_selector(&cfg.metric)?,
            threshold: cfg.threshold,
            normalize: cfg.normalize.clone(),
            engine: cfg.engine.clone(),
        })
    }
}

/// Outcome of one metric's run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum MetricRunResult {
    /// The report artifact was written.
    Written { path: PathBuf },
    /// The run failed; no artifact exists for this metric.
    Failed { error: String },
}

/// Per-metric outcome record for one invocation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MetricOutcome {
    pub metric: Metric,
    #[serde(flatten)]
    pub result: MetricRunResult,
}

/// What one invocation produced, metric by metric.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RunSummary {
    pub outcomes: Vec<MetricOutcome>,
}

impl RunSummary {
    /// True iff every requested metric produced its artifact.
    pub fn all_succeeded(&self) -> bool {
        self.outcomes
            .iter()
            .all(|o| matches!(o.result, MetricRunResult::Written { .. }))
    }

    /// Metrics whose artifact was written.
    pub fn succeeded(&self) -> Vec<Metric> {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.result, MetricRunResult::Written { .. }))
            .map(|o| o.metric)
            .collect()
    }

    /// Metrics whose run failed.
    pub fn failed(&self) -> Vec<Metric> {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.result, MetricRunResult::Failed { .. }))
            .map(|o| o.metric)
            .collect()
    }
}

/// Run one metric end-to-end over an already-loaded corpus: build the
/// matrix, classify, write the artifact. Returns the artifact path.
pub fn run_metric(
    corpus: &Corpus,
    metric: Metric,
    threshold: u8,
    engine_cfg: &EngineConfig,
    corpus_dir: &Path,
) -> Result<PathBuf, PipelineError> {
    let matrix = build_matrix(corpus, metric, engine_cfg)?;
    let verdicts = classify(&matrix, threshold);
    let flagged = verdicts.iter().filter(|v| v.plagiarized).count();
    let path = write_report(&matrix, &verdicts, corpus_dir)?;

    info!(
        metric = metric.name(),
        flagged,
        docs = corpus.len(),
        path = %path.display(),
        "metric_run_complete"
    );
    Ok(path)
}

/// Run the full pipeline: load the corpus once, then run every requested
/// metric over it independently.
///
/// Corpus and configuration failures abort the whole invocation; there is
/// nothing meaningful to produce without a corpus. Per-metric failures are
/// contained: the failing metric is recorded in the summary and the
/// remaining metrics still run, so a pathological input that breaks one
/// algorithm does not cost the reports the others can still produce.
pub fn run(opts: &RunOptions) -> Result<RunSummary, PipelineError> {
    if opts.threshold > 100 {
        return Err(ConfigLoadError::ThresholdOutOfRange(opts.threshold).into());
    }
    opts.normalize.validate()?;
    opts.engine.validate()?;

    let corpus = load_corpus(
        &opts.corpus_dir,
        opts.ext_filter.as_deref(),
        &opts.normalize,
    )?;

    let outcomes = opts
        .metrics
        .iter()
        .map(|&metric| {
            let result = match run_metric(
                &corpus,
                metric,
                opts.threshold,
                &opts.engine,
                &opts.corpus_dir,
            ) {
                Ok(path) => MetricRunResult::Written { path },
                Err(err) => {
                    warn!(metric = metric.name(), error = %err, "metric_run_failed");
                    MetricRunResult::Failed {
                        error: err.to_string(),
                    }
                }
            };
            MetricOutcome { metric, result }
        })
        .collect();

    Ok(RunSummary { outcomes })
}
