//! Test utilities for alignment tests.
//!
//! Helpers for building transform sets with known rotations and translations.

#![allow(dead_code)]

use bindu_align::{Transform, Vec3};

/// A transform with the given Z rotation placed at `translation`.
pub fn placed(rotation_z: f32, translation: Vec3) -> Transform {
    Transform::from_rotation_z(rotation_z).translated(translation)
}

/// A row of identity-rotation transforms spaced along the X axis.
pub fn row_along_x(n: usize, spacing: f32) -> Vec<Transform> {
    (0..n)
        .map(|i| Transform::from_translation(Vec3::new(i as f32 * spacing, 0.0, 0.0)))
        .collect()
}

/// Shift every transform in a set by the same offset.
pub fn shifted(set: &[Transform], offset: Vec3) -> Vec<Transform> {
    set.iter().map(|t| t.translated(offset)).collect()
}
