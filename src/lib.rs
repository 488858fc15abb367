//! # BinduAlign
//!
//! Translation offset matching between two sets of 4x4 affine transforms.
//!
//! ## Overview
//!
//! Given a **model** set and a **space** set of transforms, the matcher
//! searches, for each model transform, for a translation offset that makes
//! it coincide elementwise (within tolerance) with some space transform.
//! Model entries are partitioned into matched (contributing a deduplicated
//! offset) and unmatched (their positions reported as-is), and the
//! discovered offsets can be persisted as a JSON document.
//!
//! Only translation is searched: a model transform whose rotation or scale
//! disagrees with every space transform stays unmatched no matter how its
//! position lines up.
//!
//! ## Quick Start
//!
//! ```rust
//! use bindu_align::{MatcherConfig, OffsetMatcher, Transform, Vec3};
//!
//! let model = vec![Transform::from_translation(Vec3::new(1.0, 2.0, 3.0))];
//! let space = vec![Transform::from_translation(Vec3::new(1.0, 2.0, 3.0))];
//!
//! let matcher = OffsetMatcher::new(MatcherConfig::default());
//! let result = matcher.find_matches(&model, &space);
//!
//! assert_eq!(result.matching_offsets, vec![Vec3::ZERO]);
//! assert!(result.unmatched_positions.is_empty());
//! ```
//!
//! ## Pipeline
//!
//! File-based runs go through [`pipeline::align_files`], which loads both
//! sets (either failure aborts the run before matching) and then invokes the
//! matcher once:
//!
//! ```rust,ignore
//! use bindu_align::{pipeline, MatcherConfig};
//! use std::path::Path;
//!
//! let result = pipeline::align_files(
//!     Path::new("model.json"),
//!     Path::new("space.json"),
//!     &MatcherConfig::default(),
//! )?;
//! pipeline::export_matches(&result.matching_offsets, Path::new("offsets.json"))?;
//! ```

#![warn(missing_docs)]

// Core math types
pub mod core;

// Offset matching
pub mod matching;

// Loading, export, and visualization
pub mod io;

// Unified configuration
pub mod config;

// Load-then-match sequencing
pub mod pipeline;

// Re-export commonly used types
pub use core::{Transform, Vec3};

pub use matching::{transforms_match, MatchResult, MatcherConfig, OffsetMatcher};

pub use config::{AlignConfig, ConfigLoadError};

pub use io::IoError;

pub use pipeline::AlignError;
