//! Load-then-match sequencing.
//!
//! The matcher assumes fully loaded inputs; this module enforces that
//! precondition. Both transform sets must load successfully before matching
//! runs — either failure short-circuits with an explicit error instead of a
//! partial or empty result.

use std::path::Path;
use thiserror::Error;

use crate::core::Vec3;
use crate::io::{self, IoError};
use crate::matching::{MatchResult, MatcherConfig, OffsetMatcher};

/// Alignment pipeline error.
#[derive(Debug, Error)]
pub enum AlignError {
    /// The model transform set could not be loaded
    #[error("failed to load model transforms: {source}")]
    ModelLoad {
        /// Underlying I/O failure
        source: IoError,
    },

    /// The space transform set could not be loaded
    #[error("failed to load space transforms: {source}")]
    SpaceLoad {
        /// Underlying I/O failure
        source: IoError,
    },

    /// The matched offsets could not be exported
    #[error("failed to export offsets: {source}")]
    Export {
        /// Underlying I/O failure
        source: IoError,
    },
}

/// Load both transform sets and match them.
///
/// Matching begins strictly after both loads complete; a failed load aborts
/// the run. The matching step itself is synchronous and total over its
/// inputs.
pub fn align_files(
    model_path: &Path,
    space_path: &Path,
    config: &MatcherConfig,
) -> Result<MatchResult, AlignError> {
    let model =
        io::load_transforms(model_path).map_err(|source| AlignError::ModelLoad { source })?;
    let space =
        io::load_transforms(space_path).map_err(|source| AlignError::SpaceLoad { source })?;

    let matcher = OffsetMatcher::new(config.clone());
    let result = matcher.find_matches(&model, &space);

    log::info!(
        "alignment complete: {} matched, {} unique offsets, {} unmatched",
        result.matched_count,
        result.matching_offsets.len(),
        result.unmatched_positions.len()
    );

    Ok(result)
}

/// Export matched offsets to their destination.
pub fn export_matches(offsets: &[Vec3], destination: &Path) -> Result<(), AlignError> {
    io::export_offsets(offsets, destination).map_err(|source| AlignError::Export { source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_set(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    const IDENTITY_SET: &str = r#"{"transforms": [
        {"m00": 1.0, "m01": 0.0, "m02": 0.0, "m03": 0.0,
         "m10": 0.0, "m11": 1.0, "m12": 0.0, "m13": 0.0,
         "m20": 0.0, "m21": 0.0, "m22": 1.0, "m23": 0.0,
         "m30": 0.0, "m31": 0.0, "m32": 0.0, "m33": 1.0}
    ]}"#;

    #[test]
    fn test_align_identity_files() {
        let model = write_set(IDENTITY_SET);
        let space = write_set(IDENTITY_SET);

        let result =
            align_files(model.path(), space.path(), &MatcherConfig::default()).unwrap();

        assert_eq!(result.matched_count, 1);
        assert_eq!(result.matching_offsets, vec![Vec3::ZERO]);
    }

    #[test]
    fn test_missing_model_aborts_before_matching() {
        let space = write_set(IDENTITY_SET);
        let result = align_files(
            Path::new("/nonexistent/model.json"),
            space.path(),
            &MatcherConfig::default(),
        );
        assert!(matches!(result, Err(AlignError::ModelLoad { .. })));
    }

    #[test]
    fn test_empty_space_set_is_a_load_failure() {
        let model = write_set(IDENTITY_SET);
        let space = write_set(r#"{"transforms": []}"#);

        let result = align_files(model.path(), space.path(), &MatcherConfig::default());
        assert!(matches!(
            result,
            Err(AlignError::SpaceLoad {
                source: IoError::Empty
            })
        ));
    }
}
