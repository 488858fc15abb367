//! 4x4 affine transform type.

use super::Vec3;
use std::ops::Mul;

/// A 4x4 affine transform matrix, row-major f32.
///
/// Rotation/scale/shear live in the upper-left 3x3 block, translation in the
/// last column, bottom row conventionally `[0, 0, 0, 1]`. Transforms are
/// immutable value types: every operation returns a new matrix.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Matrix elements, `m[row][col]`
    m: [[f32; 4]; 4],
}

impl Transform {
    /// Identity transform
    pub const IDENTITY: Transform = Transform {
        m: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Create a transform from row-major rows
    #[inline]
    pub fn from_rows(rows: [[f32; 4]; 4]) -> Self {
        Self { m: rows }
    }

    /// Create a pure translation transform (identity rotation)
    pub fn from_translation(t: Vec3) -> Self {
        Self {
            m: [
                [1.0, 0.0, 0.0, t.x],
                [0.0, 1.0, 0.0, t.y],
                [0.0, 0.0, 1.0, t.z],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Create a rotation of `angle` radians around the Z axis (CCW positive)
    pub fn from_rotation_z(angle: f32) -> Self {
        let (sin_a, cos_a) = angle.sin_cos();
        Self {
            m: [
                [cos_a, -sin_a, 0.0, 0.0],
                [sin_a, cos_a, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Element at (row, col)
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.m[row][col]
    }

    /// Row-major rows
    #[inline]
    pub fn rows(&self) -> &[[f32; 4]; 4] {
        &self.m
    }

    /// The translation column as a vector (elements (0,3), (1,3), (2,3))
    #[inline]
    pub fn translation(&self) -> Vec3 {
        Vec3::new(self.m[0][3], self.m[1][3], self.m[2][3])
    }

    /// This transform shifted by `offset`.
    ///
    /// Equivalent to left-multiplying by a pure translation matrix built from
    /// `offset`: the offset is added to the translation column and the
    /// upper-left 3x3 block is unchanged.
    pub fn translated(&self, offset: Vec3) -> Transform {
        Transform::from_translation(offset) * *self
    }

    /// Elementwise comparison within tolerance.
    ///
    /// True when all 16 absolute differences are at most `tolerance`.
    pub fn approx_eq(&self, other: &Transform, tolerance: f32) -> bool {
        for row in 0..4 {
            for col in 0..4 {
                if (self.m[row][col] - other.m[row][col]).abs() > tolerance {
                    return false;
                }
            }
        }
        true
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Transform {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut m = [[0.0f32; 4]; 4];
        for (row, out_row) in m.iter_mut().enumerate() {
            for (col, out) in out_row.iter_mut().enumerate() {
                *out = self.m[row][0] * rhs.m[0][col]
                    + self.m[row][1] * rhs.m[1][col]
                    + self.m[row][2] * rhs.m[2][col]
                    + self.m[row][3] * rhs.m[3][col];
            }
        }
        Transform { m }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_identity_translation() {
        assert_eq!(Transform::IDENTITY.translation(), Vec3::ZERO);
    }

    #[test]
    fn test_translated_moves_only_translation_column() {
        let base = Transform::from_rotation_z(FRAC_PI_2);
        let shifted = base.translated(Vec3::new(1.0, 2.0, 3.0));

        // Upper-left 3x3 unchanged
        for row in 0..3 {
            for col in 0..3 {
                assert_eq!(shifted.get(row, col), base.get(row, col));
            }
        }

        assert_eq!(shifted.translation(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_translated_accumulates() {
        let base = Transform::from_translation(Vec3::new(1.0, 0.0, 0.0));
        let shifted = base.translated(Vec3::new(0.5, 0.5, 0.5));
        assert_eq!(shifted.translation(), Vec3::new(1.5, 0.5, 0.5));
    }

    #[test]
    fn test_matrix_product_rotation() {
        let quarter = Transform::from_rotation_z(FRAC_PI_2);
        let half = quarter * quarter;
        let expected = Transform::from_rotation_z(std::f32::consts::PI);
        assert!(half.approx_eq(&expected, 1e-6));
    }

    #[test]
    fn test_approx_eq_boundary() {
        let a = Transform::IDENTITY;
        let mut rows = *a.rows();
        rows[2][1] += 0.25;
        let b = Transform::from_rows(rows);

        // Exactly at tolerance matches, beyond it does not
        assert!(a.approx_eq(&b, 0.25));
        assert!(!a.approx_eq(&b, 0.125));
    }
}
