//! End-to-end codec conformance over a realistic metadata envelope

use rofl_codec::{FlexInt, Metadata, RoflError, StatValue, TagValue};
use serde_json::{json, Value};

/// Build an envelope the way replay producers actually emit it: numeric
/// fields mixed between numbers and numeric strings, and the tag line
/// appearing as an integer for one player and a string for another.
fn producer_envelope() -> Vec<u8> {
    let stats = json!([
        {
            "NAME": "Foo",
            "PUUID": "abc-123",
            "RIOT_ID_GAME_NAME": "Foo",
            "RIOT_ID_TAG_LINE": 1234,
            "TEAM": 100,
            "CHAMPIONS_KILLED": "7",
            "GOLD_EARNED": 10543,
            "NUM_DEATHS": 2,
            "WIN": "Win",
            "TIME_PLAYED": ""
        },
        {
            "NAME": "Bar",
            "PUUID": "def-456",
            "RIOT_ID_GAME_NAME": "Bar",
            "RIOT_ID_TAG_LINE": "EUW",
            "TEAM": "200",
            "CHAMPIONS_KILLED": 0,
            "GOLD_EARNED": "8230",
            "NUM_DEATHS": "5",
            "WIN": "Fail",
            "TIME_PLAYED": 1805
        }
    ]);
    let envelope = json!({
        "gameLength": 1805000,
        "lastGameChunkId": "120",
        "lastKeyFrameId": 30,
        "statsJson": serde_json::to_string(&stats).unwrap(),
    });
    serde_json::to_vec(&envelope).unwrap()
}

#[test]
fn producer_envelope_decodes_to_typed_values() {
    let metadata = Metadata::decode(&producer_envelope()).unwrap();

    assert_eq!(metadata.game_length, FlexInt(1805000));
    assert_eq!(metadata.last_game_chunk_id, FlexInt(120));
    assert_eq!(metadata.last_key_frame_id, FlexInt(30));
    assert_eq!(metadata.stats.len(), 2);

    let foo = &metadata.stats[0];
    assert_eq!(foo.name(), Some("Foo"));
    assert_eq!(foo.team(), Some(100));
    assert_eq!(foo.get("CHAMPIONS_KILLED"), Some(&StatValue::Int(FlexInt(7))));
    assert_eq!(
        foo.get("RIOT_ID_TAG_LINE"),
        Some(&StatValue::Tag(TagValue::Int(1234)))
    );
    // Empty string decodes to zero for a flexible integer field.
    assert_eq!(foo.get("TIME_PLAYED"), Some(&StatValue::Int(FlexInt(0))));

    let bar = &metadata.stats[1];
    assert_eq!(bar.team(), Some(200));
    assert_eq!(
        bar.get("RIOT_ID_TAG_LINE"),
        Some(&StatValue::Tag(TagValue::Text("EUW".to_string())))
    );
    assert_eq!(bar.get("GOLD_EARNED"), Some(&StatValue::Int(FlexInt(8230))));
}

#[test]
fn reencoding_canonicalizes_numbers_and_preserves_union_shapes() {
    let metadata = Metadata::decode(&producer_envelope()).unwrap();
    let encoded = metadata.encode().unwrap();

    // Envelope integers are canonical numbers regardless of input shape.
    assert_eq!(encoded["gameLength"], json!(1805000));
    assert_eq!(encoded["lastGameChunkId"], json!(120));
    assert_eq!(encoded["lastKeyFrameId"], json!(30));

    let inner: Vec<Value> =
        serde_json::from_str(encoded["statsJson"].as_str().unwrap()).unwrap();

    // Flexible integers canonicalize to numbers...
    assert_eq!(inner[0]["CHAMPIONS_KILLED"], json!(7));
    assert_eq!(inner[1]["TEAM"], json!(200));
    assert_eq!(inner[1]["NUM_DEATHS"], json!(5));
    // ...while the union field keeps each record's original shape.
    assert_eq!(inner[0]["RIOT_ID_TAG_LINE"], json!(1234));
    assert_eq!(inner[1]["RIOT_ID_TAG_LINE"], json!("EUW"));
    // Plain strings pass through untouched.
    assert_eq!(inner[0]["WIN"], json!("Win"));
}

#[test]
fn reencoded_envelope_decodes_to_the_same_metadata() {
    let metadata = Metadata::decode(&producer_envelope()).unwrap();
    let reencoded = serde_json::to_vec(&metadata.encode().unwrap()).unwrap();
    let again = Metadata::decode(&reencoded).unwrap();
    assert_eq!(metadata, again);
}

#[test]
fn malformed_scalar_inside_a_record_surfaces_the_field() {
    let stats = json!([{"NAME": "Foo", "TEAM": "not_a_number"}]);
    let envelope = serde_json::to_vec(&json!({
        "gameLength": 1,
        "lastGameChunkId": 2,
        "lastKeyFrameId": 3,
        "statsJson": serde_json::to_string(&stats).unwrap(),
    }))
    .unwrap();

    match Metadata::decode(&envelope).unwrap_err() {
        RoflError::MalformedScalar { field, token } => {
            assert_eq!(field, "TEAM");
            assert!(token.contains("not_a_number"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn union_field_with_object_shape_is_rejected() {
    let stats = json!([{"RIOT_ID_TAG_LINE": {"nested": true}}]);
    let envelope = serde_json::to_vec(&json!({
        "gameLength": 1,
        "lastGameChunkId": 2,
        "lastKeyFrameId": 3,
        "statsJson": serde_json::to_string(&stats).unwrap(),
    }))
    .unwrap();

    assert!(matches!(
        Metadata::decode(&envelope).unwrap_err(),
        RoflError::UnsupportedUnionShape { field } if field == "RIOT_ID_TAG_LINE"
    ));
}
