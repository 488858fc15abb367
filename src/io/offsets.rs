//! Matched offset export.
//!
//! Discovered offsets are persisted as a single JSON object with one named
//! field:
//!
//! ```json
//! {"offsets": [{"x": 3.0, "y": 0.0, "z": -1.5}]}
//! ```

use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use std::path::Path;

use crate::core::Vec3;

use super::IoError;

/// Top-level offsets document.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct OffsetFile {
    /// Offset vectors in discovery order.
    pub offsets: Vec<Vec3>,
}

/// Export offsets to a JSON file.
pub fn export_offsets(offsets: &[Vec3], path: &Path) -> Result<(), IoError> {
    let file = std::fs::File::create(path)?;
    write_offsets(offsets, std::io::BufWriter::new(file))?;
    log::info!("exported {} offsets to {}", offsets.len(), path.display());
    Ok(())
}

/// Write offsets to a JSON writer.
pub fn write_offsets<W: Write>(offsets: &[Vec3], writer: W) -> Result<(), IoError> {
    let doc = OffsetFile {
        offsets: offsets.to_vec(),
    };
    serde_json::to_writer_pretty(writer, &doc)?;
    Ok(())
}

/// Load offsets from a JSON file.
pub fn load_offsets(path: &Path) -> Result<Vec<Vec3>, IoError> {
    let file = std::fs::File::open(path)?;
    read_offsets(std::io::BufReader::new(file))
}

/// Read offsets from a JSON reader.
pub fn read_offsets<R: Read>(reader: R) -> Result<Vec<Vec3>, IoError> {
    let doc: OffsetFile = serde_json::from_reader(reader)?;
    Ok(doc.offsets)
}
