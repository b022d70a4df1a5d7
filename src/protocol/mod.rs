//! # Protocols
//!
//! A protocol is an ordered, duplicate-free list of capability names.
//!
//! ## Operations
//!
//! | Function | Question answered |
//! |----------|-------------------|
//! | [`build_deep_protocol_definition`] | Which capabilities does this object and its ancestors declare? |
//! | [`build_protocol_definition`] | Which capabilities does this object declare itself? |
//! | [`has_all_methods_called`] | Does every requested name resolve to something callable right now? |
//!
//! Definitions are snapshots. They go stale as soon as the subject's shape
//! changes; nothing here tracks that.

mod build;
mod check;
mod named;

pub use build::{build_deep_protocol_definition, build_protocol_definition};
pub use check::has_all_methods_called;
pub use named::{NamedProtocol, ensure_protocol};
#[doc(hidden)]
pub use named::methods_are_valid;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::realm::{CONSTRUCTOR_NAME, ObjectId, Realm};

/// Prefix marking internal members.
pub const INTERNAL_PREFIX: &str = "__";

/// True for names that never appear in a protocol definition.
pub fn is_reserved_name(name: &str) -> bool {
    name == CONSTRUCTOR_NAME || name.starts_with(INTERNAL_PREFIX)
}

// =============================================================================
// ProtocolDefinition
// =============================================================================

/// Ordered, duplicate-free list of capability names.
///
/// Inserting a name that is already present is a no-op, so the first
/// occurrence always keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Vec<String>", into = "Vec<String>")
)]
pub struct ProtocolDefinition {
    names: Vec<String>,
}

impl ProtocolDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Definition from a fixed list; used by `protocol!` and `define_protocol!`.
    pub fn from_static(names: &[&str]) -> Self {
        names.iter().copied().collect()
    }

    /// Append `name` unless already present. Returns whether it was added.
    pub fn push(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.contains(&name) {
            return false;
        }
        self.names.push(name);
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.names
    }

    pub(crate) fn retain(&mut self, keep: impl FnMut(&String) -> bool) {
        self.names.retain(keep);
    }

    /// True if every name resolves to a callable member on `subject`.
    pub fn is_satisfied_by(&self, realm: &Realm, subject: ObjectId) -> bool {
        has_all_methods_called(realm, subject, self.iter())
    }

    /// Names that do not resolve to a callable member on `subject`.
    pub fn missing_on(&self, realm: &Realm, subject: ObjectId) -> Vec<String> {
        self.iter()
            .filter(|name| !has_all_methods_called(realm, subject, [*name]))
            .map(String::from)
            .collect()
    }

    /// BLAKE3 digest over the ordered names.
    ///
    /// Each name is prefixed with its byte length, so no two distinct lists
    /// share an input stream.
    pub fn fingerprint(&self) -> Fingerprint {
        let mut hasher = blake3::Hasher::new();
        for name in &self.names {
            hasher.update(&(name.len() as u64).to_le_bytes());
            hasher.update(name.as_bytes());
        }
        Fingerprint(*hasher.finalize().as_bytes())
    }
}

impl<S: Into<String>> FromIterator<S> for ProtocolDefinition {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut definition = ProtocolDefinition::new();
        definition.extend(iter);
        definition
    }
}

impl<S: Into<String>> Extend<S> for ProtocolDefinition {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for name in iter {
            self.push(name);
        }
    }
}

impl<'a> IntoIterator for &'a ProtocolDefinition {
    type Item = &'a String;
    type IntoIter = core::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}

impl From<Vec<String>> for ProtocolDefinition {
    fn from(names: Vec<String>) -> Self {
        names.into_iter().collect()
    }
}

impl From<ProtocolDefinition> for Vec<String> {
    fn from(definition: ProtocolDefinition) -> Self {
        definition.names
    }
}

impl fmt::Display for ProtocolDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, name) in self.names.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(name)?;
        }
        f.write_str("]")
    }
}

// =============================================================================
// Fingerprint
// =============================================================================

/// Stable digest of a protocol definition. Order-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint([u8; 32]);

impl Fingerprint {
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}
