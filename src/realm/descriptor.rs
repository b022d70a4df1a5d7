//! Member descriptors.
//!
//! A descriptor is the full definition of one member on one level: either a
//! stored value or an accessor pair, plus its flags. Copying a descriptor
//! never evaluates an accessor.

use crate::value::{Function, Value};

bitflags::bitflags! {
    /// Mutability and visibility of a member.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MemberFlags: u8 {
        /// Stored value may be reassigned.
        const WRITABLE = 0b001;
        /// Listed by `Realm::keys`.
        const ENUMERABLE = 0b010;
        /// May be deleted.
        const CONFIGURABLE = 0b100;

        /// Plain data assigned at runtime.
        const DATA = Self::WRITABLE.bits() | Self::ENUMERABLE.bits() | Self::CONFIGURABLE.bits();
        /// Methods declared on a class prototype.
        const METHOD = Self::WRITABLE.bits() | Self::CONFIGURABLE.bits();
        /// Accessors declared on a class prototype.
        const ACCESSOR = Self::CONFIGURABLE.bits();
    }
}

impl Default for MemberFlags {
    fn default() -> Self {
        MemberFlags::DATA
    }
}

/// What a member holds.
#[derive(Debug, Clone, PartialEq)]
pub enum Slot {
    /// A plain stored value (which may itself be a function).
    Stored(Value),
    /// A computed member: reads call `get`, writes call `set`.
    Accessor {
        get: Option<Function>,
        set: Option<Function>,
    },
}

/// Full definition of one member.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberDescriptor {
    pub slot: Slot,
    pub flags: MemberFlags,
}

impl MemberDescriptor {
    /// Stored value with `DATA` flags.
    pub fn data(value: impl Into<Value>) -> Self {
        MemberDescriptor {
            slot: Slot::Stored(value.into()),
            flags: MemberFlags::DATA,
        }
    }

    /// Stored function with `METHOD` flags.
    pub fn method(function: Function) -> Self {
        MemberDescriptor {
            slot: Slot::Stored(Value::Function(function)),
            flags: MemberFlags::METHOD,
        }
    }

    pub fn accessor(get: Option<Function>, set: Option<Function>) -> Self {
        MemberDescriptor {
            slot: Slot::Accessor { get, set },
            flags: MemberFlags::ACCESSOR,
        }
    }

    pub fn with_flags(mut self, flags: MemberFlags) -> Self {
        self.flags = flags;
        self
    }

    /// The stored value, if this is not an accessor.
    pub fn value(&self) -> Option<&Value> {
        match &self.slot {
            Slot::Stored(value) => Some(value),
            Slot::Accessor { .. } => None,
        }
    }

    /// Stored function.
    pub fn is_callable(&self) -> bool {
        matches!(&self.slot, Slot::Stored(Value::Function(_)))
    }

    pub fn is_accessor(&self) -> bool {
        matches!(&self.slot, Slot::Accessor { .. })
    }

    /// Accessor with a read side. A setter-only accessor reads as undefined.
    pub fn has_getter(&self) -> bool {
        matches!(&self.slot, Slot::Accessor { get: Some(_), .. })
    }

    /// Counts towards a protocol definition.
    pub fn is_capability(&self) -> bool {
        self.is_callable() || self.has_getter()
    }

    pub fn is_writable(&self) -> bool {
        self.flags.contains(MemberFlags::WRITABLE)
    }

    pub fn is_enumerable(&self) -> bool {
        self.flags.contains(MemberFlags::ENUMERABLE)
    }

    pub fn is_configurable(&self) -> bool {
        self.flags.contains(MemberFlags::CONFIGURABLE)
    }
}
