//! Unified configuration loading.
//!
//! Loads the alignment configuration from a single YAML file with sensible
//! defaults; every field may be omitted.
//!
//! ## Example YAML
//!
//! ```yaml
//! matcher:
//!   tolerance: 0.01          # max per-element difference
//!   dedup_resolution: 0.001  # optional offset quantization step
//!
//! output:
//!   offsets: offsets.json
//!   svg: audit.svg           # optional audit file
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::matching::MatcherConfig;

/// Configuration loading error.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    /// File could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML could not be parsed
    #[error("parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Output destinations.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OutputSection {
    /// Destination for the exported offsets document.
    #[serde(default = "default_offsets_path")]
    pub offsets: PathBuf,

    /// Optional destination for the SVG audit file.
    #[serde(default)]
    pub svg: Option<PathBuf>,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            offsets: default_offsets_path(),
            svg: None,
        }
    }
}

fn default_offsets_path() -> PathBuf {
    PathBuf::from("offsets.json")
}

/// Complete alignment configuration.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AlignConfig {
    /// Matcher settings.
    #[serde(default)]
    pub matcher: MatcherConfig,

    /// Output settings.
    #[serde(default)]
    pub output: OutputSection,
}

impl AlignConfig {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_yaml(&contents)?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }
}
