use std::time::Instant;

use corpus::{Corpus, Document};
use metrics::Metric;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::EngineConfig;
use crate::error::EngineError;

/// Square similarity matrix over one corpus under one metric.
///
/// Rows and columns follow corpus order. `cells[i][j]` holds the score of
/// document `i` against document `j`; the diagonal is `None`, since a
/// document is never scored against itself and absence is distinct from a
/// zero score. Both `(i, j)` and `(j, i)` are computed independently: the
/// grid is full, never mirrored from a triangle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SimilarityMatrix {
    metric: Metric,
    names: Vec<String>,
    cells: Vec<Vec<Option<u8>>>,
}

impl SimilarityMatrix {
    /// Metric this matrix was built under.
    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// Number of documents (rows and columns).
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Document names in row/column order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Score of document `i` against document `j`; `None` on the diagonal.
    pub fn get(&self, i: usize, j: usize) -> Option<u8> {
        self.cells[i][j]
    }

    /// One document's full row of scores.
    pub fn row(&self, i: usize) -> &[Option<u8>] {
        &self.cells[i]
    }
}

/// Build the full N×N similarity matrix for `corpus` under `metric`.
///
/// O(N²) metric evaluations, each itself quadratic in document length.
/// With `use_parallel`, rows are distributed over the rayon pool; workers
/// share only the read-only corpus, and each owns the cells of its own row.
pub fn build_matrix(
    corpus: &Corpus,
    metric: Metric,
    cfg: &EngineConfig,
) -> Result<SimilarityMatrix, EngineError> {
    cfg.validate()?;

    if let Some(limit) = cfg.max_compare_chars {
        check_document_sizes(corpus, limit)?;
    }

    let start = Instant::now();
    let documents = corpus.documents();

    let score_row = |(i, doc): (usize, &Document)| -> Vec<Option<u8>> {
        documents
            .iter()
            .enumerate()
            .map(|(j, other)| {
                if i == j {
                    None
                } else {
                    Some(metric.score(&doc.normalized, &other.normalized))
                }
            })
            .collect()
    };

    let cells: Vec<Vec<Option<u8>>> = if cfg.use_parallel {
        documents.par_iter().enumerate().map(score_row).collect()
    } else {
        documents.iter().enumerate().map(score_row).collect()
    };

    info!(
        metric = metric.name(),
        docs = documents.len(),
        parallel = cfg.use_parallel,
        elapsed_micros = start.elapsed().as_micros() as u64,
        "matrix_built"
    );

    Ok(SimilarityMatrix {
        metric,
        names: documents.iter().map(|d| d.name.clone()).collect(),
        cells,
    })
}

/// Reject the whole run for this metric if any document is over the bound.
fn check_document_sizes(corpus: &Corpus, limit: usize) -> Result<(), EngineError> {
    for doc in corpus.documents() {
        let chars = doc.normalized.chars().count();
        if chars > limit {
            return Err(EngineError::DocumentTooLarge {
                name: doc.name.clone(),
                chars,
                limit,
            });
        }
    }
    Ok(())
}
