//! Field, argument and type-reference definitions.
//!
//! This module contains the data structures nested inside type definitions:
//! output fields, input values (arguments and input-object fields), type
//! references and constant default values.

use std::fmt;

/// Output field of an object or interface.
#[derive(Debug, Clone)]
pub struct FieldDef {
    /// Field name.
    pub name: String,
    /// Declared arguments.
    pub arguments: Vec<InputValueDef>,
    /// Field type.
    pub ty: TypeRef,
}

impl FieldDef {
    /// Creates a new field without arguments.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
            ty,
        }
    }

    /// Adds an argument.
    #[must_use]
    pub fn with_argument(mut self, argument: InputValueDef) -> Self {
        self.arguments.push(argument);
        self
    }

    /// Returns true if the field declares arguments.
    #[must_use]
    pub fn has_arguments(&self) -> bool {
        !self.arguments.is_empty()
    }
}

/// Argument or input-object field.
#[derive(Debug, Clone)]
pub struct InputValueDef {
    /// Value name.
    pub name: String,
    /// Value type.
    pub ty: TypeRef,
    /// Default value literal, if declared.
    pub default_value: Option<Value>,
}

impl InputValueDef {
    /// Creates a new input value without a default.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            default_value: None,
        }
    }

    /// Sets the default value.
    #[must_use]
    pub fn with_default(mut self, value: Value) -> Self {
        self.default_value = Some(value);
        self
    }
}

/// Reference to a type: named, non-null or list, recursively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    /// `Name`.
    Named(String),
    /// `Inner!`.
    NonNull(Box<TypeRef>),
    /// `[Inner]`.
    List(Box<TypeRef>),
}

impl TypeRef {
    /// Creates a named reference.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Wraps this reference as non-null.
    #[must_use]
    pub fn non_null(self) -> Self {
        Self::NonNull(Box::new(self))
    }

    /// Wraps this reference in a list.
    #[must_use]
    pub fn list(self) -> Self {
        Self::List(Box::new(self))
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => write!(f, "{name}"),
            Self::NonNull(inner) => write!(f, "{inner}!"),
            Self::List(inner) => write!(f, "[{inner}]"),
        }
    }
}

/// Constant value literal.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// `null`.
    Null,
    /// Integer literal.
    Int(i64),
    /// Float literal.
    Float(f64),
    /// String literal.
    String(String),
    /// `true` / `false`.
    Boolean(bool),
    /// Enum value literal.
    Enum(String),
    /// List literal.
    List(Vec<Value>),
    /// Object literal, fields in source order.
    Object(Vec<(String, Value)>),
}

impl Value {
    /// Returns a short name for the literal kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Boolean(_) => "boolean",
            Self::Enum(_) => "enum",
            Self::List(_) => "list",
            Self::Object(_) => "object",
        }
    }
}
