//! Transform set loading.
//!
//! Transform sets are stored as a JSON document with one record per
//! transform, 16 named float fields each (`m00`..`m33`, row-major):
//!
//! ```json
//! {
//!   "transforms": [
//!     {"m00": 1.0, "m01": 0.0, "m02": 0.0, "m03": 2.5,
//!      "m10": 0.0, "m11": 1.0, "m12": 0.0, "m13": 0.0,
//!      "m20": 0.0, "m21": 0.0, "m22": 1.0, "m23": -1.0,
//!      "m30": 0.0, "m31": 0.0, "m32": 0.0, "m33": 1.0}
//!   ]
//! }
//! ```
//!
//! A document that parses but contains zero records is reported as
//! [`IoError::Empty`], never as a silent empty set.

use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

use crate::core::Transform;

use super::IoError;

/// One serialized 4x4 transform, row-major named fields.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct TransformRecord {
    pub m00: f32,
    pub m01: f32,
    pub m02: f32,
    pub m03: f32,
    pub m10: f32,
    pub m11: f32,
    pub m12: f32,
    pub m13: f32,
    pub m20: f32,
    pub m21: f32,
    pub m22: f32,
    pub m23: f32,
    pub m30: f32,
    pub m31: f32,
    pub m32: f32,
    pub m33: f32,
}

impl From<TransformRecord> for Transform {
    fn from(r: TransformRecord) -> Self {
        Transform::from_rows([
            [r.m00, r.m01, r.m02, r.m03],
            [r.m10, r.m11, r.m12, r.m13],
            [r.m20, r.m21, r.m22, r.m23],
            [r.m30, r.m31, r.m32, r.m33],
        ])
    }
}

impl From<&Transform> for TransformRecord {
    fn from(t: &Transform) -> Self {
        let m = t.rows();
        Self {
            m00: m[0][0],
            m01: m[0][1],
            m02: m[0][2],
            m03: m[0][3],
            m10: m[1][0],
            m11: m[1][1],
            m12: m[1][2],
            m13: m[1][3],
            m20: m[2][0],
            m21: m[2][1],
            m22: m[2][2],
            m23: m[2][3],
            m30: m[3][0],
            m31: m[3][1],
            m32: m[3][2],
            m33: m[3][3],
        }
    }
}

/// Top-level transform document.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TransformFile {
    /// Transform records in set order.
    pub transforms: Vec<TransformRecord>,
}

/// Load a transform set from a JSON file.
pub fn load_transforms(path: &Path) -> Result<Vec<Transform>, IoError> {
    let file = std::fs::File::open(path)?;
    let transforms = read_transforms(std::io::BufReader::new(file))?;
    log::info!("loaded {} transforms from {}", transforms.len(), path.display());
    Ok(transforms)
}

/// Read a transform set from a JSON reader.
pub fn read_transforms<R: Read>(reader: R) -> Result<Vec<Transform>, IoError> {
    let doc: TransformFile = serde_json::from_reader(reader)?;
    if doc.transforms.is_empty() {
        return Err(IoError::Empty);
    }
    Ok(doc.transforms.into_iter().map(Transform::from).collect())
}

/// Serialize a transform set to a JSON writer (used by test tooling).
pub fn write_transforms<W: std::io::Write>(
    transforms: &[Transform],
    writer: W,
) -> Result<(), IoError> {
    let doc = TransformFile {
        transforms: transforms.iter().map(TransformRecord::from).collect(),
    };
    serde_json::to_writer_pretty(writer, &doc)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Vec3;

    #[test]
    fn test_read_named_fields() {
        let json = r#"{"transforms": [
            {"m00": 1.0, "m01": 0.0, "m02": 0.0, "m03": 2.5,
             "m10": 0.0, "m11": 1.0, "m12": 0.0, "m13": 0.5,
             "m20": 0.0, "m21": 0.0, "m22": 1.0, "m23": -1.0,
             "m30": 0.0, "m31": 0.0, "m32": 0.0, "m33": 1.0}
        ]}"#;

        let transforms = read_transforms(json.as_bytes()).unwrap();
        assert_eq!(transforms.len(), 1);
        assert_eq!(transforms[0].translation(), Vec3::new(2.5, 0.5, -1.0));
    }

    #[test]
    fn test_empty_document_is_an_error() {
        let result = read_transforms(r#"{"transforms": []}"#.as_bytes());
        assert!(matches!(result, Err(IoError::Empty)));
    }

    #[test]
    fn test_malformed_document_is_an_error() {
        let result = read_transforms(r#"{"transforms": [{"m00": "not a float"}]}"#.as_bytes());
        assert!(matches!(result, Err(IoError::Parse(_))));
    }

    #[test]
    fn test_write_read_round_trip() {
        let original = vec![
            Transform::from_translation(Vec3::new(1.0, 2.0, 3.0)),
            Transform::from_rotation_z(0.5),
        ];

        let mut buf = Vec::new();
        write_transforms(&original, &mut buf).unwrap();
        let loaded = read_transforms(buf.as_slice()).unwrap();

        assert_eq!(loaded, original);
    }
}
