//! Two-stage decoding of the metadata envelope
//!
//! The envelope is a small JSON object whose `statsJson` value is itself a
//! JSON-encoded *string* containing an array of per-player records, so a
//! full decode parses JSON twice: once for the envelope, once for the
//! string's contents.

use rofl_format::constants::{
    KEY_GAME_LENGTH, KEY_LAST_GAME_CHUNK_ID, KEY_LAST_KEY_FRAME_ID, KEY_STATS_JSON,
};
use rofl_format::{FlexInt, Result, RoflError};
use serde_json::{Map, Value};

use crate::record::StatRecord;

/// Decoded replay metadata: three flexible-integer fields and the
/// per-player stats records. Immutable once decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct Metadata {
    /// Replay duration in milliseconds.
    pub game_length: FlexInt,
    /// Id of the last payload chunk.
    pub last_game_chunk_id: FlexInt,
    /// Id of the last keyframe.
    pub last_key_frame_id: FlexInt,
    /// One record per game participant.
    pub stats: Vec<StatRecord>,
}

impl Metadata {
    /// Decode the metadata span's bytes.
    ///
    /// Stage 1 parses the envelope object and its four required keys;
    /// stage 2 re-parses the `statsJson` string's contents as the stats
    /// array. An empty `statsJson` yields an empty record list.
    pub fn decode(bytes: &[u8]) -> Result<Metadata> {
        let envelope: Map<String, Value> = serde_json::from_slice(bytes)
            .map_err(|err| RoflError::Envelope(format!("metadata is not a JSON object: {err}")))?;

        let game_length = FlexInt::from_value(KEY_GAME_LENGTH, require(&envelope, KEY_GAME_LENGTH)?)?;
        let last_game_chunk_id = FlexInt::from_value(
            KEY_LAST_GAME_CHUNK_ID,
            require(&envelope, KEY_LAST_GAME_CHUNK_ID)?,
        )?;
        let last_key_frame_id = FlexInt::from_value(
            KEY_LAST_KEY_FRAME_ID,
            require(&envelope, KEY_LAST_KEY_FRAME_ID)?,
        )?;

        let stats_text = require(&envelope, KEY_STATS_JSON)?
            .as_str()
            .ok_or_else(|| {
                RoflError::Envelope(format!("key '{KEY_STATS_JSON}' must be a JSON string"))
            })?;
        let stats = decode_stats(stats_text)?;

        Ok(Metadata {
            game_length,
            last_game_chunk_id,
            last_key_frame_id,
            stats,
        })
    }

    /// Encode back to a raw JSON value, reversing both stages.
    ///
    /// The record list is serialized to JSON text and embedded under
    /// `statsJson` as a string; the flexible integers are emitted
    /// canonically as numbers.
    pub fn encode(&self) -> Result<Value> {
        let records: Vec<Value> = self
            .stats
            .iter()
            .map(|record| Value::Object(record.to_object()))
            .collect();
        let stats_text = serde_json::to_string(&Value::Array(records))?;

        let mut envelope = Map::new();
        envelope.insert(KEY_GAME_LENGTH.to_string(), self.game_length.to_value());
        envelope.insert(
            KEY_LAST_GAME_CHUNK_ID.to_string(),
            self.last_game_chunk_id.to_value(),
        );
        envelope.insert(
            KEY_LAST_KEY_FRAME_ID.to_string(),
            self.last_key_frame_id.to_value(),
        );
        envelope.insert(KEY_STATS_JSON.to_string(), Value::String(stats_text));

        Ok(Value::Object(envelope))
    }

    /// Pretty-printed canonical JSON rendering of the envelope.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.encode()?)?)
    }
}

fn require<'a>(envelope: &'a Map<String, Value>, key: &str) -> Result<&'a Value> {
    envelope
        .get(key)
        .ok_or_else(|| RoflError::Envelope(format!("missing required key '{key}'")))
}

fn decode_stats(text: &str) -> Result<Vec<StatRecord>> {
    if text.is_empty() {
        return Ok(Vec::new());
    }

    let entries: Vec<Value> = serde_json::from_str(text)
        .map_err(|err| RoflError::StatsArray(format!("inner stats JSON is malformed: {err}")))?;

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let object = entry.as_object().ok_or_else(|| {
                RoflError::StatsArray(format!("record {index} is not a JSON object"))
            })?;
            StatRecord::from_object(index, object)
        })
        .collect()
}
