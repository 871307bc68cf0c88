use serde::{Deserialize, Serialize};

use crate::matrix::SimilarityMatrix;

/// Default classification threshold: a row entry must exceed this score for
/// the document to be flagged.
pub const DEFAULT_THRESHOLD: u8 = 90;

/// Per-document plagiarism flag, derived from one similarity matrix.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Verdict {
    /// Document name (corpus order is preserved in the verdict list).
    pub name: String,
    /// True iff some entry in the document's row strictly exceeds the
    /// threshold.
    pub plagiarized: bool,
}

/// Classify every document in the matrix against `threshold`.
///
/// The comparison is strict (`score > threshold`), so with the default
/// threshold of 90 a score of exactly 90 does not flag a document but 91
/// does. Diagonal entries are absent and never participate.
pub fn classify(matrix: &SimilarityMatrix, threshold: u8) -> Vec<Verdict> {
    matrix
        .names()
        .iter()
        .enumerate()
        .map(|(i, name)| Verdict {
            name: name.clone(),
            plagiarized: matrix.row(i).iter().flatten().any(|&score| score > threshold),
        })
        .collect()
}
