//! Capability verification.

use log::debug;

use crate::realm::{ObjectId, Realm};

/// True iff every name in `names` resolves on `subject` to a callable value.
///
/// Resolution is ordinary member access: the whole chain is searched, the
/// root included, and accessors run their getter. A name that is missing,
/// holds a plain value, reads as undefined, or whose getter fails makes the
/// whole check false. An empty `names` is vacuously true.
///
/// ```ignore
/// if has_all_methods_called(&realm, unit, ["fn1", "fn2"]) {
///     realm.call(unit, "fn1", &[])?;
/// }
/// ```
pub fn has_all_methods_called<I>(realm: &Realm, subject: ObjectId, names: I) -> bool
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    names
        .into_iter()
        .all(|name| resolves_to_callable(realm, subject, name.as_ref()))
}

fn resolves_to_callable(realm: &Realm, subject: ObjectId, name: &str) -> bool {
    match realm.get(subject, name) {
        Ok(value) if value.is_callable() => true,
        Ok(value) => {
            debug!("`{name}` on {subject} is not callable: {value:?}");
            false
        }
        Err(err) => {
            debug!("`{name}` on {subject} failed to resolve: {err}");
            false
        }
    }
}
