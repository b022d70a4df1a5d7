//! Named protocols.
//!
//! Synthesis never registers a type, so "this object now implements P" is
//! a fact the caller has to check at the point of use. A `NamedProtocol`
//! gives that check a name; [`define_protocol!`](crate::define_protocol)
//! declares one.

use alloc::string::String;

use super::{INTERNAL_PREFIX, ProtocolDefinition, has_all_methods_called};
use crate::error::ObjectError;
use crate::realm::{CONSTRUCTOR_NAME, ObjectId, Realm};

/// A protocol known at compile time.
pub trait NamedProtocol {
    const NAME: &'static str;
    const METHODS: &'static [&'static str];

    fn definition() -> ProtocolDefinition {
        ProtocolDefinition::from_static(Self::METHODS)
    }

    fn is_implemented_by(realm: &Realm, subject: ObjectId) -> bool {
        has_all_methods_called(realm, subject, Self::METHODS)
    }
}

/// Assert that `subject` implements `P`, passing it through on success.
///
/// The error lists every missing name.
pub fn ensure_protocol<P: NamedProtocol>(realm: &Realm, subject: ObjectId) -> Result<ObjectId, ObjectError> {
    if P::is_implemented_by(realm, subject) {
        return Ok(subject);
    }
    Err(ObjectError::MissingCapabilities {
        protocol: String::from(P::NAME),
        missing: P::definition().missing_on(realm, subject),
    })
}

/// True if `methods` is a valid protocol: no empty, reserved or repeated
/// names. Evaluated at compile time by [`define_protocol!`](crate::define_protocol).
#[doc(hidden)]
pub const fn methods_are_valid(methods: &[&str]) -> bool {
    let mut i = 0;
    while i < methods.len() {
        let name = methods[i].as_bytes();
        if name.is_empty() || is_reserved(name) {
            return false;
        }
        let mut j = 0;
        while j < i {
            if bytes_eq(name, methods[j].as_bytes()) {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

const fn is_reserved(name: &[u8]) -> bool {
    if bytes_eq(name, CONSTRUCTOR_NAME.as_bytes()) {
        return true;
    }
    let prefix = INTERNAL_PREFIX.as_bytes();
    if name.len() < prefix.len() {
        return false;
    }
    let mut k = 0;
    while k < prefix.len() {
        if name[k] != prefix[k] {
            return false;
        }
        k += 1;
    }
    true
}

const fn bytes_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut k = 0;
    while k < a.len() {
        if a[k] != b[k] {
            return false;
        }
        k += 1;
    }
    true
}

/// Declare a [`NamedProtocol`] marker type and a snake_case predicate.
///
/// Empty, reserved or repeated method names fail to compile.
///
/// ```ignore
/// define_protocol! {
///     /// Things that know their media type.
///     pub GetMediaType { getMediaType, guessMediaType }
/// }
///
/// assert!(implements_get_media_type(&realm, unit));
/// assert_eq!(GetMediaType::definition().len(), 2);
/// ```
#[macro_export]
macro_rules! define_protocol {
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($method:ident),* $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::NamedProtocol for $name {
            const NAME: &'static str = stringify!($name);
            const METHODS: &'static [&'static str] = &[$(stringify!($method)),*];
        }

        const _: () = assert!(
            $crate::protocol::methods_are_valid(<$name as $crate::NamedProtocol>::METHODS),
            concat!("protocol `", stringify!($name), "` has a reserved or repeated method name"),
        );

        $crate::paste::paste! {
            #[allow(dead_code)]
            $vis fn [<implements_ $name:snake>](realm: &$crate::Realm, subject: $crate::ObjectId) -> bool {
                <$name as $crate::NamedProtocol>::is_implemented_by(realm, subject)
            }
        }
    };
}
