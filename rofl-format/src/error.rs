//! Error types shared across the ROFL crates

use thiserror::Error;

/// ROFL error types
#[derive(Debug, Error)]
pub enum RoflError {
    /// The metadata marker was not found anywhere in the buffer.
    #[error("Metadata marker not found")]
    MarkerNotFound,
    /// The buffer ended before the metadata object's closing brace.
    #[error("Metadata JSON object starting at offset {offset} never closes")]
    UnterminatedObject {
        /// Offset the structural scan started from.
        offset: usize,
    },
    /// A field expected to be a number or numeric string held neither.
    #[error("Field '{field}' is not a usable integer: {token}")]
    MalformedScalar {
        /// Name of the offending field.
        field: String,
        /// Raw JSON token that failed to decode.
        token: String,
    },
    /// A union field held a JSON shape outside the integer/string pair.
    #[error("Field '{field}' holds a JSON shape the union does not support")]
    UnsupportedUnionShape {
        /// Name of the offending field.
        field: String,
    },
    /// The outer metadata envelope is structurally invalid.
    #[error("Envelope decode failed: {0}")]
    Envelope(String),
    /// The nested stats array is structurally invalid.
    #[error("Stats array decode failed: {0}")]
    StatsArray(String),
    /// I/O operation failed while reading or writing data.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON parsing or serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, RoflError>;
