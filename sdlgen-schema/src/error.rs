//! Error types for schema parsing.

use thiserror::Error;

/// Error type for schema parsing operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// SDL syntax error.
    #[error("{0}")]
    Syntax(#[from] async_graphql_parser::Error),

    /// Type or schema extension, which the generator does not merge.
    #[error("extensions are not supported: 'extend {name}'")]
    UnsupportedExtension {
        /// Extended name.
        name: String,
    },

    /// Literal kind with no counterpart in the definition model.
    #[error("unsupported literal: {kind}")]
    UnsupportedValue {
        /// Literal description.
        kind: String,
    },

    /// Duplicate definition.
    #[error("duplicate {kind} definition: '{name}'")]
    DuplicateDefinition {
        /// Kind of definition (object, enum, etc.).
        kind: String,
        /// Name of the duplicate.
        name: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ParseError {
    /// Creates a duplicate definition error.
    pub fn duplicate(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self::DuplicateDefinition {
            kind: kind.into(),
            name: name.into(),
        }
    }
}
