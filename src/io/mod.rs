//! Loading, export, and visualization.
//!
//! This module holds the collaborators around the matcher:
//!
//! - **Transform loading**: JSON documents with 16 named float fields per
//!   record (`m00`..`m33`, row-major)
//! - **Offset export**: the persisted `{"offsets": [...]}` JSON object
//! - **SVG audit**: marker visualization of a matching run
//!
//! ## Loading and exporting
//!
//! ```rust,ignore
//! use bindu_align::io::{load_transforms, export_offsets};
//! use std::path::Path;
//!
//! let model = load_transforms(Path::new("model.json"))?;
//! export_offsets(&result.matching_offsets, Path::new("offsets.json"))?;
//! ```

pub mod offsets;
pub mod svg;
pub mod transforms;

use thiserror::Error;

/// Error type for I/O operations.
#[derive(Debug, Error)]
pub enum IoError {
    /// File could not be read or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Document could not be parsed
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Document parsed but contained no records
    #[error("document contains no transform records")]
    Empty,
}

pub use offsets::{export_offsets, load_offsets, read_offsets, write_offsets, OffsetFile};
pub use svg::{SvgColorScheme, SvgConfig, SvgVisualizer};
pub use transforms::{
    load_transforms, read_transforms, write_transforms, TransformFile, TransformRecord,
};
