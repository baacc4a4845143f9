//! Symbolic Python type expressions and emitted code blocks.

use std::fmt;

/// Module providing the generic wrappers.
pub const TYPING_MODULE: &str = "typing";

/// Reference to a Python type.
///
/// Generic wrappers are closed variants so that rendering and import
/// collection never go through string concatenation of type names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymbolicType {
    /// Plain name, optionally imported from `module`.
    Bare {
        /// Type name.
        name: String,
        /// Owning module; `None` for builtins.
        module: Option<String>,
    },
    /// `Optional[inner]`.
    Optional(Box<SymbolicType>),
    /// `Sequence[inner]`.
    SequenceOf(Box<SymbolicType>),
}

impl SymbolicType {
    /// Creates a builtin type that needs no import.
    #[must_use]
    pub fn builtin(name: impl Into<String>) -> Self {
        Self::Bare {
            name: name.into(),
            module: None,
        }
    }

    /// Creates a type imported from `module`.
    #[must_use]
    pub fn imported(name: impl Into<String>, module: impl Into<String>) -> Self {
        Self::Bare {
            name: name.into(),
            module: Some(module.into()),
        }
    }

    /// Wraps `inner` as `Optional[inner]`.
    #[must_use]
    pub fn optional(inner: Self) -> Self {
        Self::Optional(Box::new(inner))
    }

    /// Wraps `inner` as `Sequence[inner]`.
    #[must_use]
    pub fn sequence_of(inner: Self) -> Self {
        Self::SequenceOf(Box::new(inner))
    }

    /// Returns the head name: the bare name or the generic wrapper name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Bare { name, .. } => name,
            Self::Optional(_) => "Optional",
            Self::SequenceOf(_) => "Sequence",
        }
    }

    /// Returns the module owning the head name.
    #[must_use]
    pub fn module(&self) -> Option<&str> {
        match self {
            Self::Bare { module, .. } => module.as_deref(),
            Self::Optional(_) | Self::SequenceOf(_) => Some(TYPING_MODULE),
        }
    }

    /// Returns the nested type arguments.
    #[must_use]
    pub fn children(&self) -> &[SymbolicType] {
        match self {
            Self::Bare { .. } => &[],
            Self::Optional(inner) | Self::SequenceOf(inner) => std::slice::from_ref(&**inner),
        }
    }

    /// Returns the default expression used for record fields, if any.
    #[must_use]
    pub const fn default_expression(&self) -> Option<&'static str> {
        match self {
            Self::Optional(_) => Some("None"),
            Self::Bare { .. } | Self::SequenceOf(_) => None,
        }
    }

    /// Returns true for `Optional[...]`.
    #[must_use]
    pub const fn is_optional(&self) -> bool {
        matches!(self, Self::Optional(_))
    }

    /// Strips one `Optional` level, handing back the original on mismatch.
    pub fn into_required(self) -> Result<Self, Self> {
        match self {
            Self::Optional(inner) => Ok(*inner),
            other => Err(other),
        }
    }

    /// Returns the imports needed by this type and every nested type.
    ///
    /// Builtins are skipped. The iterator is lazy and walks depth-first.
    pub fn imports(&self) -> Imports<'_> {
        Imports { stack: vec![self] }
    }

    /// Renders the type as seen from `module`.
    ///
    /// Names owned by `module` itself become quoted forward references.
    #[must_use]
    pub fn render(&self, module: &str) -> String {
        let children = self.children();
        if !children.is_empty() {
            let children: Vec<_> = children.iter().map(|child| child.render(module)).collect();
            return format!("{}[{}]", self.name(), children.join(", "));
        }
        if self.module() == Some(module) {
            format!("\"{}\"", self.name())
        } else {
            self.name().to_string()
        }
    }
}

/// Lazy depth-first iterator over the imports of a [`SymbolicType`].
#[derive(Debug)]
pub struct Imports<'a> {
    stack: Vec<&'a SymbolicType>,
}

impl<'a> Iterator for Imports<'a> {
    type Item = Import<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(ty) = self.stack.pop() {
            self.stack.extend(ty.children().iter().rev());
            if let Some(module) = ty.module() {
                return Some(Import {
                    name: ty.name(),
                    module,
                });
            }
        }
        None
    }
}

/// Single `from module import name` requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Import<'a> {
    /// Imported name.
    pub name: &'a str,
    /// Source module.
    pub module: &'a str,
}

impl fmt::Display for Import<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "from {} import {}", self.module, self.name)
    }
}

/// Emission order of a block within its module; lower goes first.
pub type Weight = u32;

/// Weight of union aliases.
pub const UNION_WEIGHT: Weight = 0;
/// Weight of enum classes.
pub const ENUM_WEIGHT: Weight = 1;
/// Weight of protocol classes.
pub const PROTOCOL_WEIGHT: Weight = 2;
/// Weight of record classes.
pub const RECORD_WEIGHT: Weight = 3;
/// Weight of blocks with no ordering constraint.
pub const DEFAULT_WEIGHT: Weight = Weight::MAX;

/// One emittable unit of generated source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    /// Source text without trailing newline.
    pub body: String,
    /// Types referenced by the body, used to build imports.
    pub used_types: Vec<SymbolicType>,
    /// Emission order within the module.
    pub weight: Weight,
}

impl CodeBlock {
    /// Creates a block with the default weight.
    #[must_use]
    pub fn new(body: impl Into<String>, used_types: Vec<SymbolicType>) -> Self {
        Self {
            body: body.into(),
            used_types,
            weight: DEFAULT_WEIGHT,
        }
    }

    /// Sets the weight.
    #[must_use]
    pub const fn with_weight(mut self, weight: Weight) -> Self {
        self.weight = weight;
        self
    }

    /// Returns every import required by the used types.
    pub fn imports(&self) -> impl Iterator<Item = Import<'_>> {
        self.used_types.iter().flat_map(SymbolicType::imports)
    }
}
