//! Locating the embedded metadata JSON object inside a replay buffer
//!
//! The metadata region has no length prefix, so the object's exact byte
//! span is recovered structurally: a literal search for the opening
//! fragment, then a brace-depth scan that is aware of JSON string
//! boundaries and escapes.

use crate::constants::METADATA_MARKER;
use crate::error::{Result, RoflError};

/// Half-open byte range `[start, end)` of the embedded metadata object.
///
/// Invariant: `start < end <= buffer.len()`, the byte at `start` is `{`
/// and the byte at `end - 1` is its matching `}` at brace depth zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetadataSpan {
    /// Offset of the opening brace.
    pub start: usize,
    /// Offset one past the matching closing brace.
    pub end: usize,
}

impl MetadataSpan {
    /// Length of the span in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span is empty (never true for a located object).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow the span's bytes out of the buffer it was derived from.
    pub fn slice<'a>(&self, buffer: &'a [u8]) -> &'a [u8] {
        &buffer[self.start..self.end]
    }
}

/// Find the byte offset of `marker` within `buffer`.
pub fn find_marker(buffer: &[u8], marker: &[u8]) -> Result<usize> {
    buffer
        .windows(marker.len())
        .position(|window| window == marker)
        .ok_or(RoflError::MarkerNotFound)
}

/// Scan forward from `from` and return the span of the first balanced
/// JSON object.
///
/// The scanner tracks brace depth and an inside-string flag with a
/// one-byte escape lookahead, so braces and quotes inside string values
/// never affect nesting. It does not tokenize JSON beyond that; the
/// payload contains only objects, arrays, strings, and numbers.
pub fn object_span(buffer: &[u8], from: usize) -> Result<MetadataSpan> {
    let mut depth: i64 = 0;
    let mut in_string = false;
    let mut escape = false;
    let mut start = None;

    for (i, &byte) in buffer.iter().enumerate().skip(from) {
        if escape {
            escape = false;
            continue;
        }
        match byte {
            b'\\' if in_string => escape = true,
            b'"' => in_string = !in_string,
            _ if in_string => {}
            b'{' => {
                if depth == 0 {
                    start = Some(i);
                }
                depth += 1;
            }
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    if let Some(start) = start {
                        return Ok(MetadataSpan { start, end: i + 1 });
                    }
                }
            }
            _ => {}
        }
    }

    Err(RoflError::UnterminatedObject { offset: from })
}

/// Locate the metadata object: marker search followed by the span scan.
pub fn locate_metadata(buffer: &[u8]) -> Result<MetadataSpan> {
    let offset = find_marker(buffer, METADATA_MARKER)?;
    object_span(buffer, offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_marker_offset() {
        let buffer = b"\x00\x01garbage{\"gameLength\":12}";
        assert_eq!(find_marker(buffer, METADATA_MARKER).unwrap(), 9);
    }

    #[test]
    fn test_find_marker_missing() {
        let buffer = b"no json here at all";
        assert!(matches!(
            find_marker(buffer, METADATA_MARKER),
            Err(RoflError::MarkerNotFound)
        ));
    }

    #[test]
    fn test_object_span_simple() {
        let buffer = b"xx{\"a\":1}yy";
        let span = object_span(buffer, 2).unwrap();
        assert_eq!(span, MetadataSpan { start: 2, end: 9 });
        assert_eq!(span.slice(buffer), b"{\"a\":1}");
    }

    #[test]
    fn test_object_span_nested_objects() {
        let buffer = b"{\"a\":{\"b\":{\"c\":3}},\"d\":4}tail";
        let span = object_span(buffer, 0).unwrap();
        assert_eq!(span.end, buffer.len() - 4);
    }

    #[test]
    fn test_object_span_braces_inside_strings() {
        // A player name full of structural characters must not close the scan early.
        let buffer = br#"{"name":"}}{{\"}","n":1}"#;
        let span = object_span(buffer, 0).unwrap();
        assert_eq!(span.end, buffer.len());
        assert_eq!(span.slice(buffer).last(), Some(&b'}'));
    }

    #[test]
    fn test_object_span_escaped_quote_keeps_string_open() {
        let buffer = br#"{"k":"a\"b}"}"#;
        let span = object_span(buffer, 0).unwrap();
        assert_eq!(span.end, buffer.len());
    }

    #[test]
    fn test_object_span_escaped_backslash_before_closing_quote() {
        // The backslash escapes itself, so the following quote does close the string.
        let buffer = br#"{"k":"a\\","n":2}"#;
        let span = object_span(buffer, 0).unwrap();
        assert_eq!(span.end, buffer.len());
    }

    #[test]
    fn test_object_span_unterminated() {
        let buffer = b"{\"gameLength\":12,\"x\":{";
        assert!(matches!(
            object_span(buffer, 0),
            Err(RoflError::UnterminatedObject { offset: 0 })
        ));
    }

    #[test]
    fn test_object_span_unterminated_inside_string() {
        // Closing brace exists but only inside an unterminated string.
        let buffer = b"{\"k\":\"}";
        assert!(object_span(buffer, 0).is_err());
    }

    #[test]
    fn test_locate_metadata_skips_garbage() {
        let mut buffer = vec![0xFFu8; 32];
        buffer.extend_from_slice(b"{\"gameLength\":1805,\"statsJson\":\"[]\"}");
        buffer.extend_from_slice(&[0xAB; 16]);
        let span = locate_metadata(&buffer).unwrap();
        assert_eq!(span.start, 32);
        assert_eq!(span.slice(&buffer)[0], b'{');
        assert_eq!(*span.slice(&buffer).last().unwrap(), b'}');
    }
}
