use std::path::PathBuf;

use normalize::NormalizeError;
use thiserror::Error;

/// Errors that can occur while discovering and loading a corpus.
///
/// All of these fail the run before any similarity computation starts; a
/// corpus is loaded whole or not at all.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// The corpus directory does not exist.
    #[error("corpus directory does not exist: {0}")]
    MissingDir(PathBuf),

    /// The corpus path exists but is not a directory.
    #[error("corpus path is not a directory: {0}")]
    NotADirectory(PathBuf),

    /// Discovery found no files matching the filter.
    #[error("no documents found in {dir} (extension filter: {filter:?})")]
    NoDocuments {
        dir: PathBuf,
        filter: Option<String>,
    },

    /// A file could not be decoded as UTF-8 text.
    #[error("failed to decode {name} as utf-8 text")]
    Decode { name: String },

    /// Normalization rejected its configuration.
    #[error("failed to normalize {name}: {source}")]
    Normalize {
        name: String,
        source: NormalizeError,
    },

    /// Filesystem failure while scanning or reading.
    #[error("failed to read corpus: {0}")]
    Io(#[from] std::io::Error),
}
