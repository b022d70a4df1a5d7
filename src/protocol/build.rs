//! Protocol definition extraction.

use alloc::string::String;
use alloc::vec::Vec;

use log::trace;

use super::{ProtocolDefinition, is_reserved_name};
use crate::realm::{ObjectId, Realm};

/// Capabilities declared by `subject` and every ancestor below the root.
///
/// Names are collected level by level, most-derived first, keeping only
/// members that are callable or have a getter. A name declared on several
/// levels surfaces once, at its most-derived position. `constructor` and
/// `__`-prefixed names are dropped.
///
/// Never fails; a subject with nothing to report yields an empty definition.
pub fn build_deep_protocol_definition(realm: &Realm, subject: ObjectId) -> ProtocolDefinition {
    let mut levels = 0usize;
    let combined = realm.ancestors(subject).flat_map(|level| {
        levels += 1;
        capability_names_at(realm, level)
    });
    let definition = user_capabilities(combined);
    trace!("deep protocol of {subject}: {levels} level(s), {definition}");
    definition
}

/// Capabilities declared directly on `subject`, ignoring its ancestors.
pub fn build_protocol_definition(realm: &Realm, subject: ObjectId) -> ProtocolDefinition {
    if subject == realm.root() {
        return ProtocolDefinition::new();
    }
    user_capabilities(capability_names_at(realm, subject))
}

fn capability_names_at(realm: &Realm, level: ObjectId) -> Vec<String> {
    realm
        .own_members(level)
        .into_iter()
        .filter(|(_, descriptor)| descriptor.is_capability())
        .map(|(name, _)| name)
        .collect()
}

fn user_capabilities(names: impl IntoIterator<Item = String>) -> ProtocolDefinition {
    let mut definition: ProtocolDefinition = names.into_iter().collect();
    definition.retain(|name| !is_reserved_name(name));
    definition
}
