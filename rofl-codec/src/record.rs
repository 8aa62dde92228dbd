//! Per-player stats records decoded against the schema table

use rofl_format::schema::{field_kind, FieldKind};
use rofl_format::{FlexInt, Result, RoflError, TagValue};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// One decoded stats field.
#[derive(Debug, Clone, PartialEq)]
pub enum StatValue {
    /// A flexible integer; encodes canonically as a JSON number.
    Int(FlexInt),
    /// A plain string.
    Text(String),
    /// The integer-or-string union; encodes as its original shape.
    Tag(TagValue),
}

impl StatValue {
    /// Encode back to a raw JSON value.
    pub fn to_value(&self) -> Value {
        match self {
            StatValue::Int(flex) => flex.to_value(),
            StatValue::Text(text) => Value::String(text.clone()),
            StatValue::Tag(tag) => tag.to_value(),
        }
    }

    /// The integer value, if this field holds one.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            StatValue::Int(flex) => Some(flex.value()),
            StatValue::Tag(TagValue::Int(i)) => Some(*i),
            _ => None,
        }
    }

    /// The string value, if this field holds one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StatValue::Text(text) => Some(text),
            StatValue::Tag(TagValue::Text(text)) => Some(text),
            _ => None,
        }
    }
}

/// One flat per-player record: field name to decoded value.
///
/// Only fields actually present in the incoming JSON appear here; absent
/// schema fields are not zero-filled, so re-encoding reproduces exactly
/// the fields the producer wrote.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatRecord {
    fields: BTreeMap<String, StatValue>,
}

impl StatRecord {
    /// Decode one record from a JSON object, dispatching each field on
    /// its declared schema kind. `index` is the record's position in the
    /// stats array, used for error context.
    ///
    /// Fields missing from the schema are decoded by JSON shape so that
    /// records from newer producers still decode.
    pub fn from_object(index: usize, object: &Map<String, Value>) -> Result<StatRecord> {
        let mut fields = BTreeMap::new();

        for (name, value) in object {
            let decoded = match field_kind(name) {
                Some(FieldKind::Int) => StatValue::Int(FlexInt::from_value(name, value)?),
                Some(FieldKind::Text) => match value {
                    Value::String(text) => StatValue::Text(text.clone()),
                    other => {
                        return Err(RoflError::StatsArray(format!(
                            "record {index}: field '{name}' expected a string, got {other}"
                        )))
                    }
                },
                Some(FieldKind::IntOrText) => StatValue::Tag(TagValue::from_value(name, value)?),
                None => match value {
                    Value::Number(number) => match number.as_i64() {
                        Some(i) => StatValue::Int(FlexInt(i)),
                        None => {
                            return Err(RoflError::StatsArray(format!(
                                "record {index}: unschematized field '{name}' has unsupported value {number}"
                            )))
                        }
                    },
                    Value::String(text) => StatValue::Text(text.clone()),
                    other => {
                        return Err(RoflError::StatsArray(format!(
                            "record {index}: unschematized field '{name}' has unsupported value {other}"
                        )))
                    }
                },
            };
            fields.insert(name.clone(), decoded);
        }

        Ok(StatRecord { fields })
    }

    /// Encode back to a JSON object.
    pub fn to_object(&self) -> Map<String, Value> {
        self.fields
            .iter()
            .map(|(name, value)| (name.clone(), value.to_value()))
            .collect()
    }

    /// Look up a field by name.
    pub fn get(&self, field: &str) -> Option<&StatValue> {
        self.fields.get(field)
    }

    /// Iterate over the record's fields in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StatValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Number of fields present in this record.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record carries no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The player's display name, when present.
    pub fn name(&self) -> Option<&str> {
        self.get("NAME").and_then(StatValue::as_str)
    }

    /// The player's team id, when present.
    pub fn team(&self) -> Option<i64> {
        self.get("TEAM").and_then(StatValue::as_i64)
    }
}
