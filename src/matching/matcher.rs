//! Offset matcher implementation.

use std::collections::HashSet;

use crate::core::{Transform, Vec3};

use super::config::MatcherConfig;
use super::types::MatchResult;

/// Elementwise transform comparison within tolerance.
///
/// Pure helper with no state: true when all 16 absolute differences between
/// `a` and `b` are at most `tolerance`.
#[inline]
pub fn transforms_match(a: &Transform, b: &Transform, tolerance: f32) -> bool {
    a.approx_eq(b, tolerance)
}

/// Translation offset matcher.
///
/// For each model transform, scans the space set for a translation offset
/// that makes the model transform coincide with a space transform within
/// tolerance. Scanning stops at the first space entry that satisfies the
/// tolerance (first-match policy, deliberately not nearest-match).
pub struct OffsetMatcher {
    config: MatcherConfig,
}

impl OffsetMatcher {
    /// Create a new matcher.
    pub fn new(config: MatcherConfig) -> Self {
        Self { config }
    }

    /// Create with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(MatcherConfig::default())
    }

    /// Get configuration.
    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Match every model transform against the space set.
    ///
    /// Per model entry, in input order:
    /// 1. The candidate offset against each space entry is
    ///    `space.translation() - model.translation()`.
    /// 2. The model transform shifted by that offset is compared to the
    ///    space transform elementwise within `tolerance`.
    /// 3. The first space entry that matches ends the scan for this model
    ///    entry; its offset is recorded once across the whole run.
    /// 4. A model entry with no matching space entry contributes its
    ///    position to `unmatched_positions` instead.
    ///
    /// Deterministic for identical inputs; empty inputs yield empty outputs.
    /// At most `model.len() * space.len()` transform comparisons.
    pub fn find_matches(&self, model: &[Transform], space: &[Transform]) -> MatchResult {
        let mut result = MatchResult::default();
        let mut seen_offsets: HashSet<[u32; 3]> = HashSet::new();

        for model_transform in model {
            let model_position = model_transform.translation();
            let mut matched = false;

            for space_transform in space {
                let offset = space_transform.translation() - model_position;
                let shifted = model_transform.translated(offset);

                if transforms_match(&shifted, space_transform, self.config.tolerance) {
                    let offset = self.quantize(offset);
                    if seen_offsets.insert(offset_key(offset)) {
                        result.matching_offsets.push(offset);
                    }
                    result.matched_count += 1;
                    matched = true;
                    break;
                }
            }

            if !matched {
                result.unmatched_positions.push(model_position);
            }
        }

        log::debug!(
            "matched {}/{} model transforms ({} unique offsets)",
            result.matched_count,
            model.len(),
            result.matching_offsets.len()
        );

        result
    }

    /// Round an offset to multiples of the dedup resolution, if configured.
    fn quantize(&self, offset: Vec3) -> Vec3 {
        match self.config.dedup_resolution {
            Some(step) if step > 0.0 => Vec3::new(
                (offset.x / step).round() * step,
                (offset.y / step).round() * step,
                (offset.z / step).round() * step,
            ),
            _ => offset,
        }
    }
}

/// Hashable key for an offset.
///
/// f32 is not `Hash`; keying on the bit patterns gives exact value equality.
/// Negative zero is folded into positive zero so `-0.0` and `0.0` offsets
/// count as the same entry.
fn offset_key(offset: Vec3) -> [u32; 3] {
    fn canonical(v: f32) -> u32 {
        if v == 0.0 { 0.0f32.to_bits() } else { v.to_bits() }
    }
    [canonical(offset.x), canonical(offset.y), canonical(offset.z)]
}
