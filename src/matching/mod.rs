//! Transform matching module.
//!
//! This module finds translation offsets that align model transforms with
//! space transforms:
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                   OFFSET MATCHING                          │
//! │                                                            │
//! │  model[i] ──┐                                              │
//! │             ▼                                              │
//! │  offset = space[j].translation − model[i].translation      │
//! │             │                                              │
//! │             ▼                                              │
//! │  model[i].translated(offset) ≈ space[j]  (tolerance)?      │
//! │             │                                              │
//! │       first hit → dedup offset     no hit → unmatched      │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Components
//!
//! | Component | Purpose |
//! |-----------|---------|
//! | [`OffsetMatcher`] | The per-entry translation search |
//! | [`MatcherConfig`] | Tolerance and dedup settings |
//! | [`MatchResult`] | Unique offsets plus unmatched positions |
//! | [`transforms_match`] | Elementwise tolerance comparison |
//!
//! ## Example
//!
//! ```rust
//! use bindu_align::matching::{MatcherConfig, OffsetMatcher};
//! use bindu_align::core::{Transform, Vec3};
//!
//! let model = vec![Transform::from_translation(Vec3::new(1.0, 2.0, 3.0))];
//! let space = vec![Transform::from_translation(Vec3::new(4.0, 2.0, 3.0))];
//!
//! let matcher = OffsetMatcher::new(MatcherConfig::default());
//! let result = matcher.find_matches(&model, &space);
//!
//! assert_eq!(result.matching_offsets, vec![Vec3::new(3.0, 0.0, 0.0)]);
//! ```

mod config;
mod matcher;
mod types;

pub use config::MatcherConfig;
pub use matcher::{transforms_match, OffsetMatcher};
pub use types::MatchResult;
