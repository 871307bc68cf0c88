//! YAML configuration file support for the copycheck pipeline.
//!
//! Lets users pin the whole pipeline configuration (normalization, engine,
//! metric selection, threshold) in a single YAML file and load it at
//! runtime. CLI flags override file values.
//!
//! ## Example
//!
//! ```yaml
//! version: "1.0"
//! name: "assignment 3 scan"
//! metric: all
//! threshold: 90
//!
//! normalize:
//!   version: 1
//!   comment_marker: "#"
//!   assignment_marker: "="
//!   strip_comments: true
//!   strip_assignment_targets: true
//!   strip_punctuation: true
//!   lowercase: true
//!   normalize_unicode: false
//!
//! engine:
//!   use_parallel: true
//!   max_compare_chars: 200000
//! ```

use std::fs;
use std::path::Path;

use engine::EngineConfig;
use metrics::{Metric, ALL_METRICS};
use normalize::NormalizeConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading or validating pipeline configuration.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),

    #[error("unrecognized metric selector: {0:?} (expected lev, jaro, seq, or all)")]
    UnknownMetric(String),

    #[error("threshold {0} is out of range (expected 0..=100)")]
    ThresholdOutOfRange(u8),

    #[error("validation error: {0}")]
    Validation(String),
}

/// Top-level pipeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CopycheckConfig {
    /// Configuration format version.
    pub version: String,

    /// Optional configuration name/description.
    #[serde(default)]
    pub name: Option<String>,

    /// Metric selector: `lev`, `jaro`, `seq`, or `all`.
    #[serde(default = "default_selector")]
    pub metric: String,

    /// Classification threshold; a row entry must strictly exceed this for
    /// a document to be flagged.
    #[serde(default = "default_threshold")]
    pub threshold: u8,

    /// Normalization stage configuration.
    #[serde(default)]
    pub normalize: NormalizeConfig,

    /// Matrix engine configuration.
    #[serde(default)]
    pub engine: EngineConfig,
}

impl CopycheckConfig {
    /// Load a YAML configuration file from the given path.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: CopycheckConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration; called before any computation starts.
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => {}
            v => return Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }

        metrics_for_selector(&self.metric)?;

        if self.threshold > 100 {
            return Err(ConfigLoadError::ThresholdOutOfRange(self.threshold));
        }

        self.normalize
            .validate()
            .map_err(|e| ConfigLoadError::Validation(e.to_string()))?;
        self.engine
            .validate()
            .map_err(|e| ConfigLoadError::Validation(e.to_string()))?;

        Ok(())
    }
}

impl Default for CopycheckConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            metric: default_selector(),
            threshold: default_threshold(),
            normalize: NormalizeConfig::default(),
            engine: EngineConfig::default(),
        }
    }
}

/// Expand a metric selector into the metrics it runs, in fixed order.
pub fn metrics_for_selector(selector: &str) -> Result<Vec<Metric>, ConfigLoadError> {
    match selector {
        "lev" => Ok(vec![Metric::Levenshtein]),
        "jaro" => Ok(vec![Metric::Jaro]),
        "seq" => Ok(vec![Metric::SequenceBlocks]),
        "all" => Ok(ALL_METRICS.to_vec()),
        other => Err(ConfigLoadError::UnknownMetric(other.to_string())),
    }
}

// Helper functions for serde defaults
fn default_selector() -> String {
    "all".to_string()
}
fn default_threshold() -> u8 {
    engine::DEFAULT_THRESHOLD
}
