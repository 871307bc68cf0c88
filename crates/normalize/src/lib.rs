//! Copycheck normalization layer.
//!
//! This crate turns raw document text into a canonical comparable form. All
//! similarity metrics downstream operate on this form only, so two documents
//! that differ merely in comments, variable names on the left of
//! assignments, casing, punctuation, or line layout compare as equal.
//!
//! ## What we do
//!
//! - Remove line comments (marker to end-of-line; the newline stays)
//! - Remove assignment targets (start of line up to the first `=` per line)
//! - Flatten line breaks and carriage returns to single spaces
//! - Remove the fixed ASCII punctuation set
//! - Lowercase
//! - Optionally, NFKC-normalize Unicode first (off by default)
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no OS/locale dependence. Same text and config,
//! same result, on any machine. Normalization is also idempotent: running
//! the pipeline over its own output is a no-op.

mod config;
mod error;
mod pipeline;

pub use crate::config::NormalizeConfig;
pub use crate::error::NormalizeError;
pub use crate::pipeline::normalize;
