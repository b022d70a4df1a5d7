//! Tests for the `serde` feature

#![cfg(feature = "serde")]

use tola_proto::{protocol, ProtocolDefinition};

#[test]
fn test_serializes_as_plain_name_list() {
    let def = protocol![getMediaType, guessMediaType];

    let json = serde_json::to_string(&def).unwrap();

    assert_eq!(json, r#"["getMediaType","guessMediaType"]"#);
}

#[test]
fn test_deserialize_drops_duplicates() {
    let def: ProtocolDefinition = serde_json::from_str(r#"["a","b","a","c","b"]"#).unwrap();

    assert_eq!(def.into_vec(), vec!["a", "b", "c"]);
}

#[test]
fn test_fingerprint_survives_round_trip() {
    let def = protocol![fn1, fn2, fn3];

    let json = serde_json::to_string(&def).unwrap();
    let back: ProtocolDefinition = serde_json::from_str(&json).unwrap();

    assert_eq!(back.fingerprint(), def.fingerprint());
}
