//! Classes: a prototype level plus per-instance fields.
//!
//! ```ignore
//! let realm = Realm::new();
//! let unit = realm
//!     .class("Unit")
//!     .field("prop", 100)
//!     .method("double", |realm, this, _| {
//!         let prop = realm.get(this, "prop")?.as_number().unwrap_or_default();
//!         Ok(Value::Number(prop * 2.0))
//!     })
//!     .build();
//!
//! let instance = realm.construct(&unit);
//! assert!(realm.is_instance_of(instance, unit.prototype()));
//! ```

use alloc::format;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;

use super::descriptor::MemberDescriptor;
use super::{CONSTRUCTOR_NAME, ObjectId, Realm};
use crate::error::ObjectError;
use crate::value::{Function, FunctionKind, Value};

/// A declared class.
///
/// Methods and accessors live on the shared prototype; fields are copied
/// onto every instance by [`Realm::construct`].
#[derive(Debug, Clone)]
pub struct Class {
    name: String,
    prototype: ObjectId,
    fields: Rc<[(String, Value)]>,
}

impl Class {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The shared level holding methods and accessors.
    pub fn prototype(&self) -> ObjectId {
        self.prototype
    }

    /// Instance fields, base class fields first.
    pub fn fields(&self) -> &[(String, Value)] {
        &self.fields
    }
}

/// Builder returned by [`Realm::class`].
#[must_use = "a class is only created by calling `build`"]
pub struct ClassBuilder<'r> {
    realm: &'r Realm,
    name: String,
    base: Option<Class>,
    members: Vec<(String, MemberDescriptor)>,
    fields: Vec<(String, Value)>,
}

impl<'r> ClassBuilder<'r> {
    pub(crate) fn new(realm: &'r Realm, name: &str) -> Self {
        ClassBuilder {
            realm,
            name: String::from(name),
            base: None,
            members: Vec::new(),
            fields: Vec::new(),
        }
    }

    /// Delegate the prototype to `base`'s prototype and inherit its fields.
    pub fn extends(mut self, base: &Class) -> Self {
        self.base = Some(base.clone());
        self
    }

    pub fn field(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.fields.push((String::from(name), value.into()));
        self
    }

    pub fn method<F>(self, name: &str, body: F) -> Self
    where
        F: Fn(&Realm, ObjectId, &[Value]) -> Result<Value, ObjectError> + 'static,
    {
        self.function(Function::new(name, body))
    }

    /// A method returning a boolean verdict about its argument.
    pub fn predicate<F>(self, name: &str, body: F) -> Self
    where
        F: Fn(&Realm, ObjectId, &[Value]) -> bool + 'static,
    {
        self.function(Function::with_kind(name, FunctionKind::Predicate, move |realm, this, args| {
            Ok(Value::Bool(body(realm, this, args)))
        }))
    }

    pub fn generator<F>(self, name: &str, body: F) -> Self
    where
        F: Fn(&Realm, ObjectId, &[Value]) -> Result<Value, ObjectError> + 'static,
    {
        self.function(Function::with_kind(name, FunctionKind::Generator, body))
    }

    /// Declare an already built function as a method, keyed by its name.
    pub fn function(mut self, function: Function) -> Self {
        self.members
            .push((String::from(function.name()), MemberDescriptor::method(function)));
        self
    }

    /// Read-only computed member.
    pub fn getter<F>(self, name: &str, body: F) -> Self
    where
        F: Fn(&Realm, ObjectId, &[Value]) -> Result<Value, ObjectError> + 'static,
    {
        let get = Function::new(name, body);
        self.accessor(name, Some(get), None)
    }

    pub fn accessor(mut self, name: &str, get: Option<Function>, set: Option<Function>) -> Self {
        self.members
            .push((String::from(name), MemberDescriptor::accessor(get, set)));
        self
    }

    /// Allocate the prototype level and its `constructor`.
    pub fn build(self) -> Class {
        let ClassBuilder {
            realm,
            name,
            base,
            members,
            fields,
        } = self;

        let parent = base
            .as_ref()
            .map_or_else(|| realm.root(), Class::prototype);
        let prototype = realm.create_with_parent(Some(parent));
        realm.set_label(prototype, format!("{name}.prototype"));

        let fields: Rc<[(String, Value)]> = base
            .iter()
            .flat_map(|b| b.fields().iter().cloned())
            .chain(fields)
            .collect();

        let ctor_fields = Rc::clone(&fields);
        let constructor = Function::with_kind(&name, FunctionKind::Constructor, move |realm, _, _| {
            Ok(Value::Object(realm.instantiate(prototype, &ctor_fields)))
        });
        realm.define_member(prototype, CONSTRUCTOR_NAME, MemberDescriptor::method(constructor));

        for (member, descriptor) in members {
            realm.define_member(prototype, member, descriptor);
        }

        Class {
            name,
            prototype,
            fields,
        }
    }
}
