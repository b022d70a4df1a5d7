//! Dynamic values and native functions.
//!
//! A `Value` is what a member lookup produces. Objects are referenced by
//! `ObjectId` and live in a [`Realm`](crate::Realm); functions are native
//! closures that receive the realm and the receiver explicitly.

use alloc::rc::Rc;
use alloc::string::String;
use core::fmt;

use crate::error::ObjectError;
use crate::realm::{ObjectId, Realm};

// =============================================================================
// Function
// =============================================================================

/// Signature of a native function body: `(realm, this, args)`.
pub type NativeFn = dyn Fn(&Realm, ObjectId, &[Value]) -> Result<Value, ObjectError>;

/// Informational tag describing how a function was declared.
///
/// Every kind is callable; the checker makes no distinction between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FunctionKind {
    #[default]
    Method,
    /// Returns a boolean verdict about its argument (a type guard).
    Predicate,
    /// Produces a sequence of values.
    Generator,
    /// Builds new instances of a class.
    Constructor,
}

/// A named native function.
///
/// Cloning shares the body; two functions are equal only if they share it.
#[derive(Clone)]
pub struct Function {
    name: Rc<str>,
    kind: FunctionKind,
    body: Rc<NativeFn>,
}

impl Function {
    pub fn new<F>(name: &str, body: F) -> Self
    where
        F: Fn(&Realm, ObjectId, &[Value]) -> Result<Value, ObjectError> + 'static,
    {
        Self::with_kind(name, FunctionKind::Method, body)
    }

    pub fn with_kind<F>(name: &str, kind: FunctionKind, body: F) -> Self
    where
        F: Fn(&Realm, ObjectId, &[Value]) -> Result<Value, ObjectError> + 'static,
    {
        Function {
            name: Rc::from(name),
            kind,
            body: Rc::new(body),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> FunctionKind {
        self.kind
    }

    /// Invoke the body with `this` as receiver.
    pub fn call(&self, realm: &Realm, this: ObjectId, args: &[Value]) -> Result<Value, ObjectError> {
        (self.body)(realm, this, args)
    }

    /// True if both handles share the same body.
    pub fn ptr_eq(&self, other: &Function) -> bool {
        Rc::ptr_eq(&self.body, &other.body)
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Value
// =============================================================================

/// A dynamically typed value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    Str(String),
    Object(ObjectId),
    Function(Function),
}

impl Value {
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn is_callable(&self) -> bool {
        matches!(self, Value::Function(_))
    }

    pub fn as_function(&self) -> Option<&Function> {
        match self {
            Value::Function(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<ObjectId> {
        match self {
            Value::Object(id) => Some(*id),
            _ => None,
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

macro_rules! impl_from_number {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Value {
            fn from(n: $ty) -> Self { Value::Number(n as f64) }
        })*
    };
}

impl_from_number!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64, usize, isize);

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(String::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<ObjectId> for Value {
    fn from(id: ObjectId) -> Self {
        Value::Object(id)
    }
}

impl From<Function> for Value {
    fn from(f: Function) -> Self {
        Value::Function(f)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Undefined, Into::into)
    }
}
