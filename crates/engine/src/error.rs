use thiserror::Error;

/// Errors produced while building a similarity matrix.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Invalid engine configuration.
    #[error("invalid engine config: {0}")]
    InvalidConfig(String),

    /// A document exceeds the per-pair computation bound.
    ///
    /// The metrics are quadratic in string length, so one pathological
    /// document would stall every pair it participates in. The whole matrix
    /// for this metric is rejected up front; no partial scores are kept.
    #[error("document {name} has {chars} comparable characters, above the limit of {limit}")]
    DocumentTooLarge {
        name: String,
        chars: usize,
        limit: usize,
    },
}
