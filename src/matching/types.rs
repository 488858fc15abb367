//! Matching result types.

use crate::core::Vec3;

/// Result of matching a model transform set against a space transform set.
///
/// Every model entry contributes to exactly one side: either its discovered
/// offset is represented in `matching_offsets` (possibly shared with other
/// entries that found the same offset) or its position is appended to
/// `unmatched_positions`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MatchResult {
    /// Unique discovered offsets, ordered by first discovery.
    pub matching_offsets: Vec<Vec3>,
    /// Positions of model entries that found no match, in model order.
    pub unmatched_positions: Vec<Vec3>,
    /// Number of model entries that matched (counts contributions, not
    /// unique offsets).
    pub matched_count: usize,
}

impl MatchResult {
    /// Total model entries accounted for.
    pub fn total_entries(&self) -> usize {
        self.matched_count + self.unmatched_positions.len()
    }

    /// True if no model entry produced a match.
    pub fn is_empty(&self) -> bool {
        self.matching_offsets.is_empty()
    }

    /// True if every model entry matched.
    pub fn all_matched(&self) -> bool {
        self.unmatched_positions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totality_accounting() {
        let result = MatchResult {
            matching_offsets: vec![Vec3::ZERO],
            unmatched_positions: vec![Vec3::new(1.0, 0.0, 0.0)],
            matched_count: 3,
        };
        // Three matched entries shared one offset, one entry missed.
        assert_eq!(result.total_entries(), 4);
        assert!(!result.all_matched());
        assert!(!result.is_empty());
    }
}
