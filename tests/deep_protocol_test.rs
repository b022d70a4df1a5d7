//! Tests for build_deep_protocol_definition / build_protocol_definition

use tola_proto::prelude::*;

fn media_type_classes(realm: &Realm) -> (Class, Class) {
    let base = realm
        .class("ExampleValue")
        .method("valueOf", |realm, this, _| realm.get(this, "value"))
        .build();
    let guess = realm
        .class("UnitTestGuessMediaType")
        .extends(&base)
        .method("guessMediaType", |realm, this, _| realm.call(this, "valueOf", &[]))
        .build();
    let get = realm
        .class("UnitTestGetMediaType")
        .extends(&guess)
        .method("getMediaType", |realm, this, _| realm.call(this, "valueOf", &[]))
        .build();
    (guess, get)
}

// =============================================================================
// Inheritance
// =============================================================================

#[test]
fn test_detects_methods_defined_in_a_base_class() {
    let realm = Realm::new();
    let guess = realm
        .class("UnitTestGuessMediaType")
        .method("guessMediaType", |_, _, _| Ok(Value::from("text/plain")))
        .build();
    let get = realm
        .class("UnitTestGetMediaType")
        .extends(&guess)
        .method("getMediaType", |_, _, _| Ok(Value::from("text/plain")))
        .build();

    let definition = build_deep_protocol_definition(&realm, get.prototype());

    assert_eq!(definition.into_vec(), vec!["getMediaType", "guessMediaType"]);
}

#[test]
fn test_walks_every_level_below_the_root() {
    let realm = Realm::new();
    let (_, get) = media_type_classes(&realm);

    let definition = build_deep_protocol_definition(&realm, get.prototype());

    assert_eq!(
        definition.into_vec(),
        vec!["getMediaType", "guessMediaType", "valueOf"]
    );
}

#[test]
fn test_instance_sees_prototype_methods_but_not_fields() {
    let realm = Realm::new();
    let unit = realm
        .class("Unit")
        .field("prop1", 100)
        .method("countProps", |_, _, _| Ok(Value::Number(0.0)))
        .build();
    let instance = realm.construct(&unit);

    let definition = build_deep_protocol_definition(&realm, instance);

    assert_eq!(definition.into_vec(), vec!["countProps"]);
}

// =============================================================================
// Dedup
// =============================================================================

#[test]
fn test_overridden_name_appears_once_at_most_derived_position() {
    let realm = Realm::new();
    let base = realm
        .class("Base")
        .method("describe", |_, _, _| Ok(Value::from("base")))
        .method("baseOnly", |_, _, _| Ok(Value::Undefined))
        .build();
    let derived = realm
        .class("Derived")
        .extends(&base)
        .method("derivedOnly", |_, _, _| Ok(Value::Undefined))
        .method("describe", |_, _, _| Ok(Value::from("derived")))
        .build();

    let definition = build_deep_protocol_definition(&realm, derived.prototype());

    assert_eq!(
        definition.into_vec(),
        vec!["derivedOnly", "describe", "baseOnly"]
    );
}

#[test]
fn test_repeated_builds_are_identical() {
    let realm = Realm::new();
    let (_, get) = media_type_classes(&realm);

    let first = build_deep_protocol_definition(&realm, get.prototype());
    let second = build_deep_protocol_definition(&realm, get.prototype());

    assert_eq!(first, second);
    assert_eq!(first.fingerprint(), second.fingerprint());
}

#[test]
fn test_plain_field_does_not_hide_ancestor_method() {
    let realm = Realm::new();
    let base = realm
        .class("Base")
        .method("render", |_, _, _| Ok(Value::Undefined))
        .build();
    let derived = realm.class("Derived").extends(&base).build();
    realm.define_value(derived.prototype(), "render", 42);

    let definition = build_deep_protocol_definition(&realm, derived.prototype());

    assert_eq!(definition.into_vec(), vec!["render"]);
}

// =============================================================================
// Exclusions
// =============================================================================

#[test]
fn test_excludes_constructor_and_internal_names() {
    let realm = Realm::new();
    let unit = realm
        .class("Unit")
        .method("__secret", |_, _, _| Ok(Value::Undefined))
        .method("__proto_hook__", |_, _, _| Ok(Value::Undefined))
        .method("_single", |_, _, _| Ok(Value::Undefined))
        .method("visible", |_, _, _| Ok(Value::Undefined))
        .build();

    let definition = build_deep_protocol_definition(&realm, unit.prototype());

    assert!(!definition.contains("constructor"));
    assert!(definition.iter().all(|name| !name.starts_with("__")));
    assert_eq!(definition.into_vec(), vec!["_single", "visible"]);
}

#[test]
fn test_excludes_stored_data() {
    let realm = Realm::new();
    let object = realm.create();
    realm.define_value(object, "count", 3);
    realm.define_value(object, "label", "x");
    realm.define_value(object, "nothing", Value::Undefined);

    assert!(build_deep_protocol_definition(&realm, object).is_empty());
}

#[test]
fn test_root_intrinsics_never_appear() {
    let realm = Realm::new();
    let object = realm.create();

    assert!(build_deep_protocol_definition(&realm, object).is_empty());
    assert!(build_deep_protocol_definition(&realm, realm.root()).is_empty());
}

// =============================================================================
// Accessors
// =============================================================================

#[test]
fn test_includes_getters_and_skips_setter_only_accessors() {
    let realm = Realm::new();
    let set = Function::new("writeOnly", |_, _, _| Ok(Value::Undefined));
    let unit = realm
        .class("Unit")
        .getter("size", |_, _, _| Ok(Value::Number(1.0)))
        .accessor("writeOnly", None, Some(set))
        .method("grow", |_, _, _| Ok(Value::Undefined))
        .build();

    let definition = build_deep_protocol_definition(&realm, unit.prototype());

    assert_eq!(definition.into_vec(), vec!["size", "grow"]);
}

#[test]
fn test_getter_is_not_evaluated() {
    let realm = Realm::new();
    let unit = realm
        .class("Unit")
        .getter("explodes", |_, _, _| Err(ObjectError::thrown("boom")))
        .build();

    let definition = build_deep_protocol_definition(&realm, unit.prototype());

    assert_eq!(definition.into_vec(), vec!["explodes"]);
}

// =============================================================================
// Degenerate Subjects
// =============================================================================

#[test]
fn test_bare_object_reports_its_own_methods() {
    let realm = Realm::new();
    let bare = realm.create_bare();
    realm.define_method(bare, Function::new("only", |_, _, _| Ok(Value::Undefined)));

    let definition = build_deep_protocol_definition(&realm, bare);

    assert_eq!(definition.into_vec(), vec!["only"]);
}

#[test]
fn test_object_from_another_realm_yields_empty_definition() {
    let realm = Realm::new();
    let other = Realm::new();
    let mine = realm.create();
    realm.define_method(mine, Function::new("secret", |_, _, _| Ok(Value::Undefined)));
    let foreign = other.create();

    assert_eq!(foreign.index(), mine.index());
    assert_ne!(foreign, mine);
    assert!(build_deep_protocol_definition(&realm, foreign).is_empty());
    assert!(build_protocol_definition(&realm, foreign).is_empty());
    assert!(!has_all_methods_called(&realm, foreign, ["secret"]));
    assert!(has_all_methods_called(&realm, mine, ["secret"]));
}

// =============================================================================
// Shallow Variant
// =============================================================================

#[test]
fn test_shallow_definition_ignores_ancestors() {
    let realm = Realm::new();
    let (guess, get) = media_type_classes(&realm);

    assert_eq!(
        build_protocol_definition(&realm, get.prototype()).into_vec(),
        vec!["getMediaType"]
    );
    assert_eq!(
        build_protocol_definition(&realm, guess.prototype()).into_vec(),
        vec!["guessMediaType"]
    );
}

#[test]
fn test_shallow_definition_of_root_is_empty() {
    let realm = Realm::new();
    assert!(build_protocol_definition(&realm, realm.root()).is_empty());
}
