//! Tests for protocol!, define_protocol! and #[derive(Seed)]

use tola_proto::prelude::*;

define_protocol! {
    /// Things that know their media type.
    pub GetMediaType { getMediaType, guessMediaType }
}

define_protocol! {
    PropCounter { countProps, }
}

fn media_type_instance(realm: &Realm) -> ObjectId {
    let guess = realm
        .class("UnitTestGuessMediaType")
        .method("guessMediaType", |_, _, _| Ok(Value::from("text/plain")))
        .build();
    let get = realm
        .class("UnitTestGetMediaType")
        .extends(&guess)
        .method("getMediaType", |_, _, _| Ok(Value::from("text/plain")))
        .build();
    realm.construct(&get)
}

// =============================================================================
// protocol!
// =============================================================================

#[test]
fn test_protocol_macro_matches_runtime_definition() {
    let realm = Realm::new();
    let unit = media_type_instance(&realm);

    let built = build_deep_protocol_definition(&realm, unit);

    assert_eq!(built, protocol![getMediaType, guessMediaType]);
    assert_eq!(built.fingerprint(), protocol![getMediaType, guessMediaType].fingerprint());
}

#[test]
fn test_protocol_macro_accepts_string_literals() {
    let def = protocol!["fn1", fn2, "kebab-name",];
    assert_eq!(def.into_vec(), vec!["fn1", "fn2", "kebab-name"]);
}

#[test]
fn test_empty_protocol_macro() {
    let def = protocol![];
    assert!(def.is_empty());
}

// =============================================================================
// define_protocol!
// =============================================================================

#[test]
fn test_named_protocol_metadata() {
    assert_eq!(GetMediaType::NAME, "GetMediaType");
    assert_eq!(GetMediaType::METHODS, &["getMediaType", "guessMediaType"]);
    assert_eq!(GetMediaType::definition(), protocol![getMediaType, guessMediaType]);
    assert_eq!(PropCounter::definition().len(), 1);
}

#[test]
fn test_method_list_validation() {
    use tola_proto::protocol::methods_are_valid;

    assert!(methods_are_valid(GetMediaType::METHODS));
    assert!(methods_are_valid(&[]));
    assert!(methods_are_valid(&["_single", "constructorish"]));
    assert!(!methods_are_valid(&["foo", "foo"]));
    assert!(!methods_are_valid(&["constructor", "foo"]));
    assert!(!methods_are_valid(&["__internal"]));
    assert!(!methods_are_valid(&[""]));
}

#[test]
fn test_definition_and_methods_agree() {
    assert_eq!(GetMediaType::definition().len(), GetMediaType::METHODS.len());
    assert_eq!(PropCounter::definition().len(), PropCounter::METHODS.len());
}

#[test]
fn test_generated_predicate() {
    let realm = Realm::new();
    let unit = media_type_instance(&realm);

    assert!(implements_get_media_type(&realm, unit));
    assert!(!implements_prop_counter(&realm, unit));
    assert!(GetMediaType::is_implemented_by(&realm, unit));
}

#[test]
fn test_ensure_protocol_lists_missing_names() {
    let realm = Realm::new();
    let partial = realm
        .class("Partial")
        .method("getMediaType", |_, _, _| Ok(Value::Undefined))
        .build();
    let object = realm.construct(&partial);

    let err = ensure_protocol::<GetMediaType>(&realm, object).unwrap_err();

    assert_eq!(
        err,
        ObjectError::MissingCapabilities {
            protocol: "GetMediaType".into(),
            missing: vec!["guessMediaType".into()],
        }
    );
}

#[test]
fn test_ensure_protocol_passes_subject_through() {
    let realm = Realm::new();
    let unit = media_type_instance(&realm);

    assert_eq!(ensure_protocol::<GetMediaType>(&realm, unit), Ok(unit));
}

#[test]
fn test_synthesis_then_check_at_point_of_use() {
    let realm = Realm::new();
    let counter = realm
        .class("Counter")
        .method("countProps", |_, _, _| Ok(Value::Number(0.0)))
        .build();
    let target = realm.create();

    assert!(!implements_prop_counter(&realm, target));
    add_extensions(&realm, target, &[counter.prototype()]);
    assert!(implements_prop_counter(&realm, target));
}

// =============================================================================
// #[derive(Seed)]
// =============================================================================

#[derive(Clone, Seed)]
struct Settings {
    #[seed(rename = "displayName")]
    display_name: String,
    retries: u8,
    enabled: bool,
    #[seed(skip)]
    #[allow(dead_code)]
    scratch: Vec<u8>,
    nickname: Option<&'static str>,
}

#[derive(Seed)]
struct Nothing;

#[test]
fn test_seed_members_in_declaration_order() {
    let settings = Settings {
        display_name: "unit".into(),
        retries: 3,
        enabled: true,
        scratch: vec![1, 2, 3],
        nickname: None,
    };

    let members = settings.seed_members();
    let names: Vec<_> = members.iter().map(|(n, _)| n.as_str()).collect();

    assert_eq!(names, vec!["displayName", "retries", "enabled", "nickname"]);
    assert_eq!(members[1].1, Value::Number(3.0));
    assert_eq!(members[3].1, Value::Undefined);
}

#[test]
fn test_seed_object_is_plain_enumerable_data() {
    let realm = Realm::new();
    let settings = Settings {
        display_name: "unit".into(),
        retries: 3,
        enabled: true,
        scratch: Vec::new(),
        nickname: Some("u"),
    };

    let seed = settings.seed(&realm);

    assert_eq!(realm.parent(seed), Some(realm.root()));
    assert_eq!(realm.keys(seed), realm.own_member_names(seed));
    assert_eq!(realm.get(seed, "displayName"), Ok(Value::from("unit")));
    assert_eq!(realm.get(seed, "nickname"), Ok(Value::from("u")));
    assert!(build_deep_protocol_definition(&realm, seed).is_empty());
}

#[test]
fn test_unit_struct_seed_is_empty() {
    let realm = Realm::new();
    let seed = Nothing.seed(&realm);
    assert!(realm.own_member_names(seed).is_empty());
}
