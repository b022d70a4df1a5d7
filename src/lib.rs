#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std library
// - alloc: required, the object model lives on the heap
// - serde: serialize protocol definitions as name lists

//! # tola-proto
//!
//! Runtime structural typing for objects whose behavior comes from a
//! delegated ancestor chain instead of nominal interfaces.
//!
//! ## Architecture
//!
//! Three questions, answered at runtime:
//!
//! 1. **Extraction**: which named capabilities does an object expose,
//!    inherited ones included? ([`build_deep_protocol_definition`])
//! 2. **Verification**: does an object satisfy a set of capabilities right
//!    now? ([`has_all_methods_called`])
//! 3. **Synthesis**: merge several objects so the result exposes the union
//!    of their members. ([`add_extensions`])
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Host Object Model                                       |
//! |  - Realm (arena of levels), ObjectId, Value, Function             |
//! |  - MemberDescriptor { Stored | Accessor } + MemberFlags           |
//! |  - Ancestors (chain walk, stops before the root), Class           |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Protocols                                               |
//! |  - ProtocolDefinition, deep/shallow builders, capability checker  |
//! |  - add_extensions (descriptor copy)                               |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: User API                                                |
//! |  - protocol![], define_protocol!, #[derive(Seed)], NamedProtocol  |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use tola_proto::prelude::*;
//!
//! let realm = Realm::new();
//! let guess = realm
//!     .class("UnitTestGuessMediaType")
//!     .method("guessMediaType", |_, _, _| Ok(Value::from("text/plain")))
//!     .build();
//! let get = realm
//!     .class("UnitTestGetMediaType")
//!     .extends(&guess)
//!     .method("getMediaType", |_, _, _| Ok(Value::from("text/plain")))
//!     .build();
//!
//! let definition = build_deep_protocol_definition(&realm, get.prototype());
//! assert_eq!(definition, protocol![getMediaType, guessMediaType]);
//! ```

// Allow `::tola_proto` to work inside the crate itself
extern crate self as tola_proto;

#[cfg(not(feature = "alloc"))]
compile_error!("tola-proto requires the `alloc` feature");

extern crate alloc;

// Re-export paste for define_protocol! macro
pub use paste;

// =============================================================================
// Layer 0: Host Object Model
// =============================================================================
pub mod error;
pub mod realm;
pub mod value;

// =============================================================================
// Layer 1: Protocols
// =============================================================================
pub mod extend;
pub mod protocol;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use error::ObjectError;
pub use extend::{Seed, add_extensions};
pub use protocol::{
    Fingerprint, NamedProtocol, ProtocolDefinition, build_deep_protocol_definition,
    build_protocol_definition, ensure_protocol, has_all_methods_called, is_reserved_name,
};
pub use realm::{
    Ancestors, CONSTRUCTOR_NAME, Class, ClassBuilder, MemberDescriptor, MemberFlags, ObjectId,
    Realm, Slot,
};
pub use value::{Function, FunctionKind, Value};

// Re-export proc-macros
pub use macros::{Seed, protocol};

#[doc(hidden)]
pub mod __private {
    pub use alloc::string::String;
    pub use alloc::vec::Vec;
}

/// Common items for the protocol system.
pub mod prelude {
    pub use crate::extend::{Seed, add_extensions};
    pub use crate::protocol::{
        NamedProtocol, ProtocolDefinition, build_deep_protocol_definition,
        build_protocol_definition, ensure_protocol, has_all_methods_called,
    };
    pub use crate::realm::{Class, MemberDescriptor, MemberFlags, ObjectId, Realm, Slot};
    pub use crate::value::{Function, FunctionKind, Value};
    pub use crate::{ObjectError, define_protocol};
    pub use macros::{Seed, protocol};
}
