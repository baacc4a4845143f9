//! Schema type definitions.
//!
//! This module contains the data structures representing top-level GraphQL
//! schema definitions: object types, interfaces, enums, unions, input
//! objects, scalars, schema blocks and directives.

use crate::fields::{FieldDef, InputValueDef};
use std::collections::HashMap;

/// Complete parsed schema document.
#[derive(Debug, Clone, Default)]
pub struct SchemaDocument {
    /// Top-level definitions in source order.
    pub definitions: Vec<Definition>,
    /// Type lookup map (built while adding definitions).
    name_map: HashMap<String, usize>,
    /// Directive lookup map; directives have their own namespace.
    directive_map: HashMap<String, usize>,
}

impl SchemaDocument {
    /// Creates a new empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a definition to the document.
    pub fn add_definition(&mut self, definition: Definition) {
        let index = self.definitions.len();
        match &definition {
            Definition::Directive(directive) => {
                self.directive_map.insert(directive.name.clone(), index);
            }
            Definition::Schema(_) => {}
            _ => {
                if let Some(name) = definition.name() {
                    self.name_map.insert(name.to_string(), index);
                }
            }
        }
        self.definitions.push(definition);
    }

    /// Adds a definition and returns the document, for chained construction.
    #[must_use]
    pub fn with_definition(mut self, definition: Definition) -> Self {
        self.add_definition(definition);
        self
    }

    /// Looks up a type definition by name.
    #[must_use]
    pub fn get_definition(&self, name: &str) -> Option<&Definition> {
        self.name_map.get(name).map(|&idx| &self.definitions[idx])
    }

    /// Returns true if a type definition with the given name exists.
    #[must_use]
    pub fn has_definition(&self, name: &str) -> bool {
        self.name_map.contains_key(name)
    }

    /// Looks up a directive declaration by name, without the leading `@`.
    #[must_use]
    pub fn get_directive(&self, name: &str) -> Option<&DirectiveDef> {
        match self.directive_map.get(name).map(|&idx| &self.definitions[idx]) {
            Some(Definition::Directive(directive)) => Some(directive),
            _ => None,
        }
    }

    /// Returns true if a directive with the given name is declared.
    #[must_use]
    pub fn has_directive(&self, name: &str) -> bool {
        self.directive_map.contains_key(name)
    }

    /// Returns true if `definition` would clash with one already added.
    ///
    /// Types and directives are checked in separate namespaces.
    #[must_use]
    pub fn conflicts_with(&self, definition: &Definition) -> bool {
        match definition {
            Definition::Directive(directive) => self.has_directive(&directive.name),
            Definition::Schema(_) => false,
            _ => definition
                .name()
                .is_some_and(|name| self.has_definition(name)),
        }
    }

    /// Returns an iterator over the names of every named type definition.
    ///
    /// Schema blocks and directives are not types and are not yielded.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.definitions
            .iter()
            .filter(|definition| definition.is_type())
            .filter_map(Definition::name)
    }
}

impl FromIterator<Definition> for SchemaDocument {
    fn from_iter<I: IntoIterator<Item = Definition>>(iter: I) -> Self {
        let mut document = Self::new();
        for definition in iter {
            document.add_definition(definition);
        }
        document
    }
}

/// Top-level definition variants.
#[derive(Debug, Clone)]
pub enum Definition {
    /// `type Name { ... }`.
    Object(ObjectTypeDef),
    /// `interface Name { ... }`.
    Interface(InterfaceTypeDef),
    /// `enum Name { ... }`.
    Enum(EnumTypeDef),
    /// `union Name = A | B`.
    Union(UnionTypeDef),
    /// `input Name { ... }`.
    InputObject(InputObjectTypeDef),
    /// `scalar Name`.
    Scalar(ScalarTypeDef),
    /// `schema { query: ... }`.
    Schema(SchemaDef),
    /// `directive @name on ...`.
    Directive(DirectiveDef),
}

impl Definition {
    /// Returns the definition name; schema blocks have none.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Object(o) => Some(&o.name),
            Self::Interface(i) => Some(&i.name),
            Self::Enum(e) => Some(&e.name),
            Self::Union(u) => Some(&u.name),
            Self::InputObject(i) => Some(&i.name),
            Self::Scalar(s) => Some(&s.name),
            Self::Directive(d) => Some(&d.name),
            Self::Schema(_) => None,
        }
    }

    /// Returns a short name for the definition kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Object(_) => "object",
            Self::Interface(_) => "interface",
            Self::Enum(_) => "enum",
            Self::Union(_) => "union",
            Self::InputObject(_) => "input object",
            Self::Scalar(_) => "scalar",
            Self::Schema(_) => "schema",
            Self::Directive(_) => "directive",
        }
    }

    /// Returns true if this definition declares a type.
    #[must_use]
    pub const fn is_type(&self) -> bool {
        !matches!(self, Self::Schema(_) | Self::Directive(_))
    }
}

/// Object type definition.
#[derive(Debug, Clone)]
pub struct ObjectTypeDef {
    /// Type name.
    pub name: String,
    /// Names of implemented interfaces.
    pub implements: Vec<String>,
    /// Field definitions.
    pub fields: Vec<FieldDef>,
}

impl ObjectTypeDef {
    /// Creates a new object type with no fields.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            implements: Vec::new(),
            fields: Vec::new(),
        }
    }

    /// Adds a field.
    #[must_use]
    pub fn with_field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }

    /// Adds an implemented interface.
    #[must_use]
    pub fn implementing(mut self, interface: impl Into<String>) -> Self {
        self.implements.push(interface.into());
        self
    }
}

/// Interface type definition.
#[derive(Debug, Clone)]
pub struct InterfaceTypeDef {
    /// Type name.
    pub name: String,
    /// Field definitions.
    pub fields: Vec<FieldDef>,
}

impl InterfaceTypeDef {
    /// Creates a new interface with no fields.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Adds a field.
    #[must_use]
    pub fn with_field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }
}

/// Enum type definition.
#[derive(Debug, Clone)]
pub struct EnumTypeDef {
    /// Type name.
    pub name: String,
    /// Declared values in source order.
    pub values: Vec<String>,
}

impl EnumTypeDef {
    /// Creates a new enum definition.
    #[must_use]
    pub fn new<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

/// Union type definition.
#[derive(Debug, Clone)]
pub struct UnionTypeDef {
    /// Type name.
    pub name: String,
    /// Member type names.
    pub members: Vec<String>,
}

impl UnionTypeDef {
    /// Creates a new union definition.
    #[must_use]
    pub fn new<I, S>(name: impl Into<String>, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            members: members.into_iter().map(Into::into).collect(),
        }
    }
}

/// Input object type definition.
#[derive(Debug, Clone)]
pub struct InputObjectTypeDef {
    /// Type name.
    pub name: String,
    /// Input fields.
    pub fields: Vec<InputValueDef>,
}

impl InputObjectTypeDef {
    /// Creates a new input object with no fields.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Adds an input field.
    #[must_use]
    pub fn with_field(mut self, field: InputValueDef) -> Self {
        self.fields.push(field);
        self
    }
}

/// Custom scalar definition.
#[derive(Debug, Clone)]
pub struct ScalarTypeDef {
    /// Scalar name.
    pub name: String,
}

/// `schema { ... }` block.
#[derive(Debug, Clone, Default)]
pub struct SchemaDef {
    /// Root query type name.
    pub query: Option<String>,
    /// Root mutation type name.
    pub mutation: Option<String>,
    /// Root subscription type name.
    pub subscription: Option<String>,
}

/// Directive declaration.
#[derive(Debug, Clone)]
pub struct DirectiveDef {
    /// Directive name without the leading `@`.
    pub name: String,
    /// Declared arguments.
    pub arguments: Vec<InputValueDef>,
}
