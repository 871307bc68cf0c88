use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Configuration for matrix construction.
///
/// Cheap to clone and serde-friendly so it can be embedded in pipeline
/// configuration files.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EngineConfig {
    /// Evaluate matrix rows on the rayon worker pool. Each worker owns one
    /// whole row, so cell writes never overlap and no locking is involved.
    /// Output is identical with or without parallelism.
    #[serde(default = "true_value")]
    pub use_parallel: bool,

    /// Upper bound on a document's normalized length, in characters.
    /// Documents above the bound fail the run for this metric before any
    /// pair is scored. `None` disables the guard.
    #[serde(default = "default_max_compare_chars")]
    pub max_compare_chars: Option<usize>,
}

// Helper functions for serde defaults
fn true_value() -> bool {
    true
}
fn default_max_compare_chars() -> Option<usize> {
    Some(200_000)
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            use_parallel: true,
            max_compare_chars: Some(200_000),
        }
    }
}

impl EngineConfig {
    /// Validates internal consistency of this configuration.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.max_compare_chars == Some(0) {
            return Err(EngineError::InvalidConfig(
                "max_compare_chars must be >= 1 when set".into(),
            ));
        }
        Ok(())
    }
}
