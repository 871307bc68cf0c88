//! Copycheck corpus layer.
//!
//! This is where documents enter the pipeline. We scan one flat directory,
//! apply the optional extension filter, read each file as UTF-8 text, and
//! normalize it exactly once. The result is a [`Corpus`]: the ordered,
//! immutable collection every downstream stage reads.
//!
//! ## What we do here
//!
//! - **Discover** - regular files in the corpus directory, optionally
//!   restricted to one extension; `.ipynb` notebooks are skipped unless a
//!   converter reads them (see [`DocumentReader`])
//! - **Order** - file names sort lexicographically, and that order fixes
//!   row/column order in every similarity matrix
//! - **Decode** - files must be UTF-8 text; anything else fails the whole
//!   load, since a silently skipped submission is worse than an error
//! - **Normalize** - each document's comparable form is derived here, once
//!
//! Failures are typed ([`CorpusError`]) and fail fast: no partial corpus is
//! ever returned.

use std::io;
use std::path::Path;
use std::time::Instant;

use normalize::NormalizeConfig;
use tracing::{info, warn};

mod discover;
mod document;
mod error;
mod reader;

pub use crate::document::{Corpus, Document};
pub use crate::error::CorpusError;
pub use crate::reader::{DocumentReader, PlainTextReader};

use crate::discover::discover_files;

/// Load a corpus from `dir` using the default plain-text reader.
pub fn load_corpus(
    dir: &Path,
    ext_filter: Option<&str>,
    cfg: &NormalizeConfig,
) -> Result<Corpus, CorpusError> {
    load_corpus_with_reader(dir, ext_filter, cfg, &PlainTextReader)
}

/// Load a corpus from `dir`, reading each file through `reader`.
///
/// The reader seam lets callers plug in format converters (notebook
/// exporters and the like) without this crate depending on them.
pub fn load_corpus_with_reader(
    dir: &Path,
    ext_filter: Option<&str>,
    cfg: &NormalizeConfig,
    reader: &dyn DocumentReader,
) -> Result<Corpus, CorpusError> {
    let start = Instant::now();

    match load_inner(dir, ext_filter, cfg, reader) {
        Ok(corpus) => {
            info!(
                dir = %dir.display(),
                docs = corpus.len(),
                elapsed_micros = start.elapsed().as_micros() as u64,
                "corpus_loaded"
            );
            Ok(corpus)
        }
        Err(err) => {
            warn!(
                dir = %dir.display(),
                error = %err,
                elapsed_micros = start.elapsed().as_micros() as u64,
                "corpus_load_failed"
            );
            Err(err)
        }
    }
}

fn load_inner(
    dir: &Path,
    ext_filter: Option<&str>,
    cfg: &NormalizeConfig,
    reader: &dyn DocumentReader,
) -> Result<Corpus, CorpusError> {
    let files = discover_files(dir, ext_filter)?;

    let mut documents = Vec::with_capacity(files.len());
    for (name, path) in files {
        let raw = reader.read_document(&path).map_err(|err| {
            if err.kind() == io::ErrorKind::InvalidData {
                CorpusError::Decode { name: name.clone() }
            } else {
                CorpusError::Io(err)
            }
        })?;
        let document = Document::new(&name, raw, cfg)
            .map_err(|source| CorpusError::Normalize { name, source })?;
        documents.push(document);
    }

    Ok(Corpus::new(documents))
}
