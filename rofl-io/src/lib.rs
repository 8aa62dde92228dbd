//! ROFL I/O - Container reading and high-level extraction APIs
//!
//! This crate provides the file-facing layer over the format and codec
//! crates:
//!
//! - Opening a replay container and decoding its metadata in one call
//! - Writing the canonical metadata JSON to disk
//! - A one-shot extract API with a summary for reporting

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod reader;
pub mod writer;

// Re-export commonly used types
pub use reader::RoflFile;
pub use rofl_codec::{FlexInt, Metadata, StatRecord, StatValue, TagValue};
pub use rofl_format::{Result, RoflError};
pub use writer::{extract, write_metadata, ExtractSummary};
