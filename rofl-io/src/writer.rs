//! Writing extracted metadata to disk

use std::fs;
use std::path::Path;

use rofl_format::Result;
use tracing::debug;

use crate::reader::RoflFile;

/// Summary of one extraction, for reporting.
#[derive(Debug, Clone)]
pub struct ExtractSummary {
    /// Byte offset of the metadata marker in the container.
    pub metadata_offset: u64,
    /// Number of per-player records decoded.
    pub record_count: usize,
    /// Bytes of canonical JSON written to the output path.
    pub bytes_written: u64,
}

/// Write the container's canonical metadata JSON to `out_path`,
/// returning the number of bytes written.
pub fn write_metadata(file: &RoflFile, out_path: impl AsRef<Path>) -> Result<u64> {
    let out_path = out_path.as_ref();
    let bytes = file.metadata_json().as_bytes();
    fs::write(out_path, bytes)?;
    debug!(path = %out_path.display(), bytes = bytes.len(), "metadata written");
    Ok(bytes.len() as u64)
}

/// Open `input` and write its canonical metadata JSON to `output`.
pub fn extract(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<ExtractSummary> {
    let file = RoflFile::open(input)?;
    let bytes_written = write_metadata(&file, output)?;
    Ok(ExtractSummary {
        metadata_offset: file.metadata_offset(),
        record_count: file.metadata().stats.len(),
        bytes_written,
    })
}
