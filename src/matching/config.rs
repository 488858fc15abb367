//! Matcher configuration types.

use serde::{Deserialize, Serialize};

/// Configuration for the offset matcher.
///
/// The matcher compares every model transform against the space set under a
/// candidate translation offset; `tolerance` bounds the per-element absolute
/// difference allowed for two transforms to count as coincident.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatcherConfig {
    /// Maximum per-element absolute difference for two transforms to match.
    #[serde(default = "default_tolerance")]
    pub tolerance: f32,

    /// Optional quantization step for offset deduplication (same units as
    /// the translation components).
    ///
    /// When set, discovered offsets are rounded to multiples of this value
    /// before being compared for uniqueness, so offsets that differ only by
    /// float noise collapse into one entry. When `None`, offsets are
    /// deduplicated by exact component equality.
    #[serde(default)]
    pub dedup_resolution: Option<f32>,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
            dedup_resolution: None,
        }
    }
}

fn default_tolerance() -> f32 {
    0.01
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MatcherConfig::default();
        assert_eq!(config.tolerance, 0.01);
        assert!(config.dedup_resolution.is_none());
    }

    #[test]
    fn test_yaml_defaults_fill_in() {
        let config: MatcherConfig = serde_yaml::from_str("tolerance: 0.05").unwrap();
        assert_eq!(config.tolerance, 0.05);
        assert!(config.dedup_resolution.is_none());
    }
}
