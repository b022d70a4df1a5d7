//! Capability synthesis.
//!
//! [`add_extensions`] turns `target` into an informal member of the
//! intersection of its own type and every source's type by copying member
//! descriptors across.
//!
//! Pass a class prototype to copy methods only. Pass an instance (or a
//! [`Seed`]) as well to copy data members.
//!
//! ```ignore
//! let target = realm.construct(&unit1);
//! let seed = realm.construct(&unit2);
//! let unit = add_extensions(&realm, target, &[unit2.prototype(), seed]);
//! assert_eq!(realm.call(unit, "countProps", &[])?, Value::Number(300.0));
//! ```

use alloc::string::String;
use alloc::vec::Vec;

use log::debug;

use crate::realm::{ObjectId, Realm};
use crate::value::Value;

/// Copy every own member of each source onto `target`, in order.
///
/// Whole descriptors are copied: accessors stay accessors and are not
/// evaluated, flags are preserved. A later source overwrites an earlier one
/// on a name collision. Only `target`'s own level changes; its parent and
/// everything sharing that parent are untouched.
///
/// Returns `target` itself. Never fails.
pub fn add_extensions(realm: &Realm, target: ObjectId, sources: &[ObjectId]) -> ObjectId {
    for &source in sources {
        let members = realm.own_members(source);
        debug!(
            "extending {target} with {} member(s) from {source}",
            members.len()
        );
        for (name, descriptor) in members {
            realm.define_member(target, name, descriptor);
        }
    }
    target
}

/// Plain Rust data that can be turned into a data-only source object.
///
/// Usually derived with `#[derive(Seed)]`.
pub trait Seed {
    /// Field names and values, in declaration order.
    fn seed_members(&self) -> Vec<(String, Value)>;

    /// Allocate a fresh object carrying the members as own data.
    fn seed(&self, realm: &Realm) -> ObjectId {
        let object = realm.create();
        for (name, value) in self.seed_members() {
            realm.define_value(object, name, value);
        }
        object
    }
}
