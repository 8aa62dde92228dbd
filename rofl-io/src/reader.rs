//! Opening ROFL containers

use std::fs;
use std::path::{Path, PathBuf};

use rofl_codec::Metadata;
use rofl_format::constants::METADATA_MARKER;
use rofl_format::{find_marker, object_span, Result};
use tracing::debug;

/// An opened replay container with its decoded metadata.
///
/// The whole file is read into memory once; the metadata offset cannot be
/// known without scanning, and replay files are bounded in size. Each
/// `open` call owns its buffer and produces an immutable result, so
/// concurrent opens of different files need no coordination.
#[derive(Debug)]
pub struct RoflFile {
    path: PathBuf,
    metadata_offset: u64,
    metadata: Metadata,
    metadata_json: String,
}

impl RoflFile {
    /// Open a replay file and decode its embedded metadata.
    ///
    /// Reads the file, locates the metadata marker and object span,
    /// decodes the envelope, and retains a pretty-printed canonical JSON
    /// rendering alongside the typed value. Errors from every stage
    /// propagate unchanged.
    pub fn open(path: impl AsRef<Path>) -> Result<RoflFile> {
        let path = path.as_ref();
        let buffer = fs::read(path)?;

        let offset = find_marker(&buffer, METADATA_MARKER)?;
        debug!(offset, "metadata marker found");

        let span = object_span(&buffer, offset)?;
        debug!(start = span.start, len = span.len(), "metadata span located");

        let metadata = Metadata::decode(span.slice(&buffer))?;
        let metadata_json = metadata.to_json_pretty()?;
        debug!(records = metadata.stats.len(), "metadata decoded");

        Ok(RoflFile {
            path: path.to_path_buf(),
            metadata_offset: offset as u64,
            metadata,
            metadata_json,
        })
    }

    /// Path the container was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Byte offset of the metadata marker within the container.
    pub fn metadata_offset(&self) -> u64 {
        self.metadata_offset
    }

    /// The decoded, typed metadata.
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Pretty-printed canonical JSON rendering of the metadata.
    pub fn metadata_json(&self) -> &str {
        &self.metadata_json
    }

    /// Consume the file and return the decoded metadata.
    pub fn into_metadata(self) -> Metadata {
        self.metadata
    }
}
