//! ROFL Format - Core primitives for replay metadata extraction
//!
//! This crate provides the fundamental utilities for locating and decoding
//! the embedded metadata JSON of a ROFL replay container, with no I/O
//! dependencies. It includes:
//!
//! - The metadata marker constant and envelope key names
//! - Marker search and brace/string-aware object span scanning
//! - The unstable scalar shapes (flexible integer, integer-or-string union)
//! - The per-player stats schema table
//! - Error types

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod constants;
pub mod error;
pub mod locate;
pub mod scalar;
pub mod schema;

// Re-export commonly used types
pub use error::{Result, RoflError};
pub use locate::{find_marker, locate_metadata, object_span, MetadataSpan};
pub use scalar::{FlexInt, TagValue};
pub use schema::{field_kind, FieldKind, STATS_SCHEMA};
