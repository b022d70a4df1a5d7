//! # Realm
//!
//! The host object model: an arena of levels linked by explicit parent
//! pointers.
//!
//! ## Layout
//!
//! ```text
//! Realm
//!   levels[0]  universal root   (toString, valueOf, hasOwnProperty, constructor)
//!   levels[1]  Base.prototype   parent -> 0
//!   levels[2]  Derived.prototype parent -> 1
//!   levels[3]  instance         parent -> 2
//! ```
//!
//! Every object is one level. Member lookups walk `parent` pointers until a
//! level declares the name or the chain ends. Objects created with
//! [`Realm::create_bare`] have no parent and never reach the root.
//!
//! The realm uses interior mutability so native function bodies can read
//! and write through a shared `&Realm`. It is `!Sync`; callers sharing one
//! realm across threads of control must serialize access themselves.

mod class;
mod descriptor;
mod level;
mod walk;

pub use class::{Class, ClassBuilder};
pub use descriptor::{MemberDescriptor, MemberFlags, Slot};
pub use walk::Ancestors;

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;
use core::sync::atomic::{AtomicU32, Ordering};

use log::trace;

use crate::error::ObjectError;
use crate::value::{Function, FunctionKind, Value};
use level::Level;

/// Name of the member that builds instances.
pub const CONSTRUCTOR_NAME: &str = "constructor";

// =============================================================================
// ObjectId
// =============================================================================

/// Source of realm serials. Every realm brands the ids it hands out.
static NEXT_REALM: AtomicU32 = AtomicU32::new(0);

/// Handle to one object in a [`Realm`].
///
/// Identity is id equality. An id carries the serial of the realm that
/// allocated it; any other realm reads it as an empty level with no parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId {
    realm: u32,
    index: usize,
}

impl ObjectId {
    /// Position in the issuing realm's arena.
    pub fn index(self) -> usize {
        self.index
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index)
    }
}

// =============================================================================
// Realm
// =============================================================================

/// Arena owning every object and its members.
pub struct Realm {
    serial: u32,
    levels: RefCell<Vec<Level>>,
}

impl Default for Realm {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Realm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Realm")
            .field("serial", &self.serial)
            .field("objects", &self.levels.borrow().len())
            .finish()
    }
}

impl Realm {
    /// Creates a realm containing only the universal root.
    pub fn new() -> Self {
        let mut root = Level::new(None);
        root.label = Some("Object.prototype".to_string());
        let realm = Realm {
            serial: NEXT_REALM.fetch_add(1, Ordering::Relaxed),
            levels: RefCell::new(alloc::vec![root]),
        };
        realm.install_root_intrinsics();
        realm
    }

    /// The universal root every ordinary object delegates to.
    pub fn root(&self) -> ObjectId {
        self.id_at(0)
    }

    /// True if `id` was allocated by this realm.
    pub fn contains(&self, id: ObjectId) -> bool {
        id.realm == self.serial && id.index < self.levels.borrow().len()
    }

    fn id_at(&self, index: usize) -> ObjectId {
        ObjectId {
            realm: self.serial,
            index,
        }
    }

    /// Arena slot of `id`, if this realm issued it.
    fn slot(&self, id: ObjectId) -> Option<usize> {
        (id.realm == self.serial).then_some(id.index)
    }

    fn read<R>(&self, id: ObjectId, f: impl FnOnce(&Level) -> R) -> Option<R> {
        let slot = self.slot(id)?;
        self.levels.borrow().get(slot).map(f)
    }

    fn write<R>(&self, id: ObjectId, f: impl FnOnce(&mut Level) -> R) -> Option<R> {
        let slot = self.slot(id)?;
        self.levels.borrow_mut().get_mut(slot).map(f)
    }

    /// Number of objects, including the root.
    pub fn object_count(&self) -> usize {
        self.levels.borrow().len()
    }

    // -------------------------------------------------------------------------
    // Allocation
    // -------------------------------------------------------------------------

    /// New empty object delegating to the root.
    pub fn create(&self) -> ObjectId {
        self.create_with_parent(Some(self.root()))
    }

    /// New empty object with no ancestors at all.
    pub fn create_bare(&self) -> ObjectId {
        self.create_with_parent(None)
    }

    /// New empty object delegating to `parent`.
    ///
    /// A parent id this realm never allocated is treated as no parent.
    pub fn create_with_parent(&self, parent: Option<ObjectId>) -> ObjectId {
        let parent = parent.filter(|p| self.contains(*p));
        let mut levels = self.levels.borrow_mut();
        let id = self.id_at(levels.len());
        levels.push(Level::new(parent));
        trace!("created object {id} with parent {parent:?}");
        id
    }

    // -------------------------------------------------------------------------
    // Chain
    // -------------------------------------------------------------------------

    pub fn parent(&self, id: ObjectId) -> Option<ObjectId> {
        self.read(id, |level| level.parent).flatten()
    }

    /// Reparent `id`.
    ///
    /// Fails if `parent` was not allocated by this realm, or if it already
    /// has `id` in its chain. `None` detaches `id`.
    pub fn set_parent(&self, id: ObjectId, parent: Option<ObjectId>) -> Result<(), ObjectError> {
        if let Some(parent) = parent {
            if !self.contains(parent) {
                return Err(ObjectError::UnknownObject(parent));
            }
            let mut cursor = Some(parent);
            while let Some(current) = cursor {
                if current == id {
                    return Err(ObjectError::CyclicParent);
                }
                cursor = self.parent(current);
            }
        }
        self.write(id, |level| level.parent = parent);
        Ok(())
    }

    /// Ancestor chain from `subject` up to, but excluding, the root.
    pub fn ancestors(&self, subject: ObjectId) -> Ancestors<'_> {
        Ancestors::new(self, subject)
    }

    /// True if `prototype` appears anywhere above `id` (the root included).
    pub fn is_instance_of(&self, id: ObjectId, prototype: ObjectId) -> bool {
        let mut cursor = self.parent(id);
        while let Some(current) = cursor {
            if current == prototype {
                return true;
            }
            cursor = self.parent(current);
        }
        false
    }

    pub fn label(&self, id: ObjectId) -> Option<String> {
        self.read(id, |level| level.label.clone()).flatten()
    }

    pub fn set_label(&self, id: ObjectId, label: impl Into<String>) {
        self.write(id, |level| level.label = Some(label.into()));
    }

    // -------------------------------------------------------------------------
    // Own members
    // -------------------------------------------------------------------------

    /// Names declared directly on `id`, in declaration order.
    pub fn own_member_names(&self, id: ObjectId) -> Vec<String> {
        self.read(id, |level| level.members().iter().map(|(name, _)| name.clone()).collect())
            .unwrap_or_default()
    }

    /// Descriptors declared directly on `id`, in declaration order.
    pub fn own_members(&self, id: ObjectId) -> Vec<(String, MemberDescriptor)> {
        self.read(id, |level| level.members().to_vec())
            .unwrap_or_default()
    }

    pub fn own_member(&self, id: ObjectId, name: &str) -> Option<MemberDescriptor> {
        self.read(id, |level| level.get(name).cloned()).flatten()
    }

    pub fn has_own_member(&self, id: ObjectId, name: &str) -> bool {
        self.read(id, |level| level.get(name).is_some())
            .unwrap_or(false)
    }

    /// Enumerable own member names.
    pub fn keys(&self, id: ObjectId) -> Vec<String> {
        self.read(id, |level| {
            level
                .members()
                .iter()
                .filter(|(_, d)| d.is_enumerable())
                .map(|(name, _)| name.clone())
                .collect()
        })
        .unwrap_or_default()
    }

    /// Install `descriptor` as an own member, replacing any previous one.
    ///
    /// Never fails. Defining on an id this realm never allocated is a no-op.
    pub fn define_member(&self, id: ObjectId, name: impl Into<String>, descriptor: MemberDescriptor) {
        self.write(id, |level| level.define(name.into(), descriptor));
    }

    /// Own stored value with `DATA` flags.
    pub fn define_value(&self, id: ObjectId, name: impl Into<String>, value: impl Into<Value>) {
        self.define_member(id, name, MemberDescriptor::data(value));
    }

    /// Own stored function with `METHOD` flags, keyed by the function's name.
    pub fn define_method(&self, id: ObjectId, function: Function) {
        let name = function.name().to_string();
        self.define_member(id, name, MemberDescriptor::method(function));
    }

    pub fn define_accessor(
        &self,
        id: ObjectId,
        name: impl Into<String>,
        get: Option<Function>,
        set: Option<Function>,
    ) {
        self.define_member(id, name, MemberDescriptor::accessor(get, set));
    }

    /// Remove an own member. Returns whether a member was removed.
    pub fn delete_member(&self, id: ObjectId, name: &str) -> Result<bool, ObjectError> {
        self.write(id, |level| {
            let configurable = match level.get(name) {
                None => return Ok(false),
                Some(descriptor) => descriptor.is_configurable(),
            };
            if !configurable {
                return Err(ObjectError::NotConfigurable {
                    name: name.to_string(),
                });
            }
            Ok(level.remove(name).is_some())
        })
        .unwrap_or(Ok(false))
    }

    // -------------------------------------------------------------------------
    // Member access
    // -------------------------------------------------------------------------

    /// Resolve `name` along the full chain, root included.
    ///
    /// Returns the level that declares it and a copy of its descriptor.
    pub fn lookup(&self, id: ObjectId, name: &str) -> Option<(ObjectId, MemberDescriptor)> {
        let levels = self.levels.borrow();
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let level = levels.get(self.slot(current)?)?;
            if let Some(descriptor) = level.get(name) {
                return Some((current, descriptor.clone()));
            }
            cursor = level.parent;
        }
        None
    }

    /// Ordinary member read. Accessors run with `id` as receiver; missing
    /// members read as `Undefined`.
    pub fn get(&self, id: ObjectId, name: &str) -> Result<Value, ObjectError> {
        let Some((owner, descriptor)) = self.lookup(id, name) else {
            return Ok(Value::Undefined);
        };
        trace!("resolved `{name}` on {id} at {owner}");
        match descriptor.slot {
            Slot::Stored(value) => Ok(value),
            Slot::Accessor { get: Some(getter), .. } => getter.call(self, id, &[]),
            Slot::Accessor { get: None, .. } => Ok(Value::Undefined),
        }
    }

    /// Ordinary member write.
    ///
    /// An inherited accessor runs its setter; an inherited read-only value
    /// blocks the write; otherwise the value lands on `id` itself.
    pub fn set(&self, id: ObjectId, name: &str, value: impl Into<Value>) -> Result<(), ObjectError> {
        let value = value.into();
        match self.lookup(id, name) {
            Some((_, MemberDescriptor { slot: Slot::Accessor { set, .. }, .. })) => match set {
                Some(setter) => setter.call(self, id, &[value]).map(|_| ()),
                None => Err(ObjectError::ReadOnly {
                    name: name.to_string(),
                }),
            },
            Some((_, descriptor)) if !descriptor.is_writable() => Err(ObjectError::ReadOnly {
                name: name.to_string(),
            }),
            Some((owner, _)) if owner == id => {
                self.write(id, |level| {
                    if let Some(descriptor) = level.get_mut(name) {
                        descriptor.slot = Slot::Stored(value);
                    }
                });
                Ok(())
            }
            _ => {
                self.define_value(id, name, value);
                Ok(())
            }
        }
    }

    /// Read `name` and invoke it with `id` as receiver.
    pub fn call(&self, id: ObjectId, name: &str, args: &[Value]) -> Result<Value, ObjectError> {
        match self.get(id, name)? {
            Value::Function(function) => function.call(self, id, args),
            _ => Err(ObjectError::NotCallable {
                name: name.to_string(),
            }),
        }
    }

    // -------------------------------------------------------------------------
    // Classes
    // -------------------------------------------------------------------------

    /// Start declaring a class whose prototype lives in this realm.
    pub fn class(&self, name: &str) -> ClassBuilder<'_> {
        ClassBuilder::new(self, name)
    }

    /// Create an instance of `class`: a new object delegating to its
    /// prototype, carrying its fields as own data members.
    pub fn construct(&self, class: &Class) -> ObjectId {
        self.instantiate(class.prototype(), class.fields())
    }

    pub(crate) fn instantiate(&self, prototype: ObjectId, fields: &[(String, Value)]) -> ObjectId {
        let instance = self.create_with_parent(Some(prototype));
        for (name, value) in fields {
            self.define_value(instance, name.clone(), value.clone());
        }
        instance
    }

    // -------------------------------------------------------------------------
    // Root
    // -------------------------------------------------------------------------

    fn install_root_intrinsics(&self) {
        let root = self.root();

        self.define_method(
            root,
            Function::with_kind(CONSTRUCTOR_NAME, FunctionKind::Constructor, |realm, _, _| {
                Ok(Value::Object(realm.create()))
            }),
        );
        self.define_method(
            root,
            Function::new("toString", |realm, this, _| {
                let label = realm.label(this).unwrap_or_else(|| "Object".to_string());
                Ok(Value::Str(alloc::format!("[object {label}]")))
            }),
        );
        self.define_method(
            root,
            Function::new("valueOf", |_, this, _| Ok(Value::Object(this))),
        );
        self.define_method(
            root,
            Function::with_kind("hasOwnProperty", FunctionKind::Predicate, |realm, this, args| {
                let name = args.first().and_then(Value::as_str).unwrap_or_default();
                Ok(Value::Bool(realm.has_own_member(this, name)))
            }),
        );
    }
}
