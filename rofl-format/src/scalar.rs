//! The two unstable scalar shapes of the metadata JSON
//!
//! Replay producers are not consistent about numeric fields: the same
//! field may arrive as a JSON number or as a JSON string of decimal
//! digits, and the riot id tag line may be either an integer or a
//! string. `FlexInt` normalizes the former; `TagValue` preserves the
//! latter's original shape.

use serde_json::Value;

use crate::error::{Result, RoflError};

/// A semantic integer that decodes from a JSON number or a JSON numeric
/// string. The canonical encoded form is always a JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct FlexInt(
    /// The decoded integer value.
    pub i64,
);

impl FlexInt {
    /// The decoded integer value.
    pub fn value(&self) -> i64 {
        self.0
    }

    /// Decode from a raw JSON value.
    ///
    /// A number must be exactly representable as `i64`. A string must be
    /// empty (decodes to zero) or parse as a base-10 signed 64-bit
    /// integer. `field` names the offending field in errors.
    pub fn from_value(field: &str, value: &Value) -> Result<FlexInt> {
        match value {
            Value::Number(n) => match n.as_i64() {
                Some(i) => Ok(FlexInt(i)),
                None => Err(malformed(field, value)),
            },
            Value::String(s) => {
                if s.is_empty() {
                    return Ok(FlexInt(0));
                }
                s.parse::<i64>()
                    .map(FlexInt)
                    .map_err(|_| malformed(field, value))
            }
            _ => Err(malformed(field, value)),
        }
    }

    /// Encode canonically: always a JSON number.
    pub fn to_value(&self) -> Value {
        Value::from(self.0)
    }
}

impl From<i64> for FlexInt {
    fn from(value: i64) -> Self {
        FlexInt(value)
    }
}

/// The integer-or-string union used by the riot id tag line field.
///
/// Exactly one variant is live once decoded, and re-encoding reproduces
/// the original JSON shape: a number stays a number, a string stays a
/// string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagValue {
    /// The field arrived as a JSON integer.
    Int(i64),
    /// The field arrived as a JSON string.
    Text(String),
}

impl TagValue {
    /// Decode from a raw JSON value by token shape.
    ///
    /// Null, booleans, arrays, and objects are outside the union; a
    /// number that is not exactly an `i64` is malformed.
    pub fn from_value(field: &str, value: &Value) -> Result<TagValue> {
        match value {
            Value::Number(n) => match n.as_i64() {
                Some(i) => Ok(TagValue::Int(i)),
                None => Err(malformed(field, value)),
            },
            Value::String(s) => Ok(TagValue::Text(s.clone())),
            _ => Err(RoflError::UnsupportedUnionShape {
                field: field.to_string(),
            }),
        }
    }

    /// Encode exactly the stored variant's JSON shape.
    pub fn to_value(&self) -> Value {
        match self {
            TagValue::Int(i) => Value::from(*i),
            TagValue::Text(s) => Value::String(s.clone()),
        }
    }
}

fn malformed(field: &str, value: &Value) -> RoflError {
    RoflError::MalformedScalar {
        field: field.to_string(),
        token: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flex_int_from_number() {
        assert_eq!(FlexInt::from_value("f", &json!(0)).unwrap(), FlexInt(0));
        assert_eq!(FlexInt::from_value("f", &json!(42)).unwrap(), FlexInt(42));
        assert_eq!(FlexInt::from_value("f", &json!(-7)).unwrap(), FlexInt(-7));
    }

    #[test]
    fn test_flex_int_from_numeric_string() {
        assert_eq!(FlexInt::from_value("f", &json!("0")).unwrap(), FlexInt(0));
        assert_eq!(FlexInt::from_value("f", &json!("42")).unwrap(), FlexInt(42));
        assert_eq!(FlexInt::from_value("f", &json!("-1")).unwrap(), FlexInt(-1));
    }

    #[test]
    fn test_flex_int_empty_string_is_zero() {
        assert_eq!(FlexInt::from_value("f", &json!("")).unwrap(), FlexInt(0));
    }

    #[test]
    fn test_flex_int_rejects_junk() {
        let err = FlexInt::from_value("TEAM", &json!("not_a_number")).unwrap_err();
        match err {
            RoflError::MalformedScalar { field, token } => {
                assert_eq!(field, "TEAM");
                assert_eq!(token, "\"not_a_number\"");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_flex_int_rejects_overflowing_string() {
        // One past i64::MAX
        let err = FlexInt::from_value("f", &json!("9223372036854775808"));
        assert!(matches!(err, Err(RoflError::MalformedScalar { .. })));
    }

    #[test]
    fn test_flex_int_rejects_float() {
        assert!(FlexInt::from_value("f", &json!(1.5)).is_err());
    }

    #[test]
    fn test_flex_int_rejects_wrong_shape() {
        assert!(FlexInt::from_value("f", &json!(null)).is_err());
        assert!(FlexInt::from_value("f", &json!([1])).is_err());
    }

    #[test]
    fn test_flex_int_encodes_as_number() {
        // Canonicalization: string-decoded values still encode as numbers.
        let decoded = FlexInt::from_value("f", &json!("120")).unwrap();
        assert_eq!(decoded.to_value(), json!(120));
    }

    #[test]
    fn test_tag_value_number_roundtrips_as_number() {
        let decoded = TagValue::from_value("t", &json!(7)).unwrap();
        assert_eq!(decoded, TagValue::Int(7));
        assert_eq!(decoded.to_value(), json!(7));
    }

    #[test]
    fn test_tag_value_string_roundtrips_as_string() {
        let decoded = TagValue::from_value("t", &json!("abc#EU1")).unwrap();
        assert_eq!(decoded, TagValue::Text("abc#EU1".to_string()));
        assert_eq!(decoded.to_value(), json!("abc#EU1"));
    }

    #[test]
    fn test_tag_value_rejects_unsupported_shapes() {
        for value in [json!(null), json!(true), json!([1, 2]), json!({"a": 1})] {
            let err = TagValue::from_value("RIOT_ID_TAG_LINE", &value).unwrap_err();
            match err {
                RoflError::UnsupportedUnionShape { field } => {
                    assert_eq!(field, "RIOT_ID_TAG_LINE");
                }
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }

    #[test]
    fn test_tag_value_rejects_fractional_number() {
        assert!(matches!(
            TagValue::from_value("t", &json!(7.5)),
            Err(RoflError::MalformedScalar { .. })
        ));
    }
}
