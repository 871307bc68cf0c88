//! Configuration types for the normalization pipeline.
//!
//! [`NormalizeConfig`] controls which transformations run and which marker
//! characters drive the comment and assignment heuristics. The `version`
//! field tracks behavior changes: any change to normalization output (even a
//! bug fix) must be accompanied by a version bump so that results produced
//! under different versions are never silently mixed.

use serde::{Deserialize, Serialize};

use crate::error::NormalizeError;

/// Configuration for the normalization pipeline.
///
/// Cheap to clone and serde-friendly so it can live inside larger pipeline
/// configuration files. The defaults reproduce the baseline behavior:
/// comments and assignment targets stripped, line breaks flattened,
/// ASCII punctuation removed, everything lowercased.
///
/// ```rust
/// use normalize::NormalizeConfig;
///
/// let cfg = NormalizeConfig::default();
/// assert_eq!(cfg.version, 1);
/// assert_eq!(cfg.comment_marker, '#');
/// assert!(cfg.strip_punctuation);
/// assert!(!cfg.normalize_unicode);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NormalizeConfig {
    /// Semantic version of the normalization configuration. Must be >= 1;
    /// version 0 is reserved and rejected.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Character that starts a line comment. Everything from this marker to
    /// the end of the line is removed (the newline itself is kept).
    #[serde(default = "default_comment_marker")]
    pub comment_marker: char,

    /// Character treated as the assignment operator. On each line, text from
    /// the start of the line up to (but excluding) the first occurrence is
    /// removed, stripping left-hand-side identifiers so only right-hand
    /// expressions remain comparable.
    #[serde(default = "default_assignment_marker")]
    pub assignment_marker: char,

    /// If true, remove line comments before any other transformation.
    #[serde(default = "true_value")]
    pub strip_comments: bool,

    /// If true, strip assignment targets line by line.
    #[serde(default = "true_value")]
    pub strip_assignment_targets: bool,

    /// If true, remove all ASCII punctuation characters. The set is fixed
    /// and locale-independent (`!` through `~`, excluding letters, digits,
    /// and whitespace).
    #[serde(default = "true_value")]
    pub strip_punctuation: bool,

    /// If true, lowercase the result using Unicode case mapping.
    #[serde(default = "true_value")]
    pub lowercase: bool,

    /// If true, apply Unicode NFKC normalization before any other step.
    /// Off by default: source corpora are usually ASCII and the extra pass
    /// only matters when equivalent characters arrive in mixed forms.
    #[serde(default)]
    pub normalize_unicode: bool,
}

// Helper functions for serde defaults
fn default_version() -> u32 {
    1
}
fn default_comment_marker() -> char {
    '#'
}
fn default_assignment_marker() -> char {
    '='
}
fn true_value() -> bool {
    true
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            version: 1,
            comment_marker: '#',
            assignment_marker: '=',
            strip_comments: true,
            strip_assignment_targets: true,
            strip_punctuation: true,
            lowercase: true,
            normalize_unicode: false,
        }
    }
}

impl NormalizeConfig {
    /// Validates internal consistency of this configuration.
    ///
    /// Marker characters must be punctuation-like: a whitespace or
    /// alphanumeric marker would make the line heuristics destructive
    /// (stripping arbitrary document content), so both are rejected here
    /// rather than at comparison time.
    pub fn validate(&self) -> Result<(), NormalizeError> {
        if self.version == 0 {
            return Err(NormalizeError::InvalidConfig(
                "config version must be >= 1".into(),
            ));
        }
        for (field, marker) in [
            ("comment_marker", self.comment_marker),
            ("assignment_marker", self.assignment_marker),
        ] {
            if marker.is_whitespace() || marker.is_alphanumeric() {
                return Err(NormalizeError::InvalidConfig(format!(
                    "{field} must not be whitespace or alphanumeric, got {marker:?}"
                )));
            }
        }
        Ok(())
    }
}
