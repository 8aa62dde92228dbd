//! ROFL Codec - Metadata envelope and stats record decoding
//!
//! This crate turns a located metadata byte span into typed values:
//!
//! - Two-stage envelope decoding (outer object, then the string-encoded
//!   stats array)
//! - Schema-driven per-player record decoding
//! - Re-encoding to canonical JSON

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod envelope;
pub mod record;

// Re-export commonly used types
pub use envelope::Metadata;
pub use record::{StatRecord, StatValue};
pub use rofl_format::{FlexInt, Result, RoflError, TagValue};
