//! Errors raised by the host object model.
//!
//! The protocol operations themselves are total. Only ordinary member
//! access (`get`, `set`, `call`, `delete_member`), reparenting and
//! explicit protocol assertions can fail.

use alloc::string::String;
use alloc::vec::Vec;

use crate::realm::ObjectId;

/// Failure of a host object model operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ObjectError {
    /// The member resolved to something that cannot be invoked.
    #[error("member `{name}` is not callable")]
    NotCallable { name: String },

    /// Write to a non-writable stored member, or to an accessor without a setter.
    #[error("member `{name}` is read-only")]
    ReadOnly { name: String },

    /// Delete of a member whose descriptor is not configurable.
    #[error("member `{name}` is not configurable")]
    NotConfigurable { name: String },

    /// Reparenting would make an object its own ancestor.
    #[error("cyclic ancestor chain")]
    CyclicParent,

    /// The id was not allocated by this realm.
    #[error("object {0} does not belong to this realm")]
    UnknownObject(ObjectId),

    /// An explicit protocol assertion failed.
    #[error("object does not implement `{protocol}`: missing {missing:?}")]
    MissingCapabilities {
        protocol: String,
        missing: Vec<String>,
    },

    /// Raised by a native function body.
    #[error("{0}")]
    Thrown(String),
}

impl ObjectError {
    /// Shorthand for native bodies that need to bail out.
    pub fn thrown(message: impl Into<String>) -> Self {
        ObjectError::Thrown(message.into())
    }
}
