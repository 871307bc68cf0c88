//! Copycheck similarity engine.
//!
//! Builds the full N×N pairwise score matrix for a corpus under one metric
//! and turns matrix rows into per-document plagiarism verdicts.
//!
//! The work is embarrassingly parallel: every row is independent, so the
//! builder maps rows over the rayon pool when [`EngineConfig::use_parallel`]
//! is set. Nothing here does I/O, and the only shared state is the
//! read-only corpus; results are identical in serial and parallel mode.

mod classify;
mod config;
mod error;
mod matrix;

pub use crate::classify::{classify, Verdict, DEFAULT_THRESHOLD};
pub use crate::config::EngineConfig;
pub use crate::error::EngineError;
pub use crate::matrix::{build_matrix, SimilarityMatrix};
