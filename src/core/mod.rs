//! Core types for transform alignment.
//!
//! This module provides the foundational math types used throughout the
//! alignment pipeline:
//!
//! - [`Vec3`]: 3-component vector, used for positions and offsets
//! - [`Transform`]: 4x4 row-major affine matrix
//!
//! Conventions:
//! - Matrices are row-major, translation in the last column
//! - A position is the translation column of a transform
//! - An offset is `space_position - model_position`

mod transform;
mod vec3;

pub use transform::Transform;
pub use vec3::Vec3;
