//! Ancestor chain traversal.

use super::{ObjectId, Realm};

/// Iterator over an object's ancestor chain.
///
/// Yields the subject first, then each parent in turn, and stops before
/// the realm's universal root. A subject without declared ancestors yields
/// exactly itself; the root yields nothing.
#[derive(Debug, Clone)]
pub struct Ancestors<'r> {
    realm: &'r Realm,
    next: Option<ObjectId>,
}

impl<'r> Ancestors<'r> {
    pub(crate) fn new(realm: &'r Realm, subject: ObjectId) -> Self {
        Ancestors {
            realm,
            next: Some(subject),
        }
    }
}

impl Iterator for Ancestors<'_> {
    type Item = ObjectId;

    fn next(&mut self) -> Option<ObjectId> {
        // Termination is checked before every dereference.
        let current = self.next.take()?;
        if current == self.realm.root() || !self.realm.contains(current) {
            return None;
        }
        self.next = self.realm.parent(current);
        Some(current)
    }
}

impl core::iter::FusedIterator for Ancestors<'_> {}
