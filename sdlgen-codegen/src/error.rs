//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema parsing error.
    #[error("schema parse error: {0}")]
    Parse(#[from] sdlgen_schema::ParseError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Named type that is neither a schema type nor a builtin scalar.
    #[error("unresolved type '{type_name}'")]
    UnresolvedType {
        /// Type name.
        type_name: String,
    },

    /// Argument default literal that cannot be rendered.
    #[error("unsupported {kind} default value for argument '{argument}'")]
    UnsupportedDefault {
        /// Argument name.
        argument: String,
        /// Literal kind.
        kind: String,
    },

    /// Internal inconsistency; never caused by input.
    #[error("invariant violation: {message}")]
    InvariantViolation {
        /// Error message.
        message: String,
    },
}

impl CodegenError {
    /// Creates an unresolved type error.
    pub fn unresolved(type_name: impl Into<String>) -> Self {
        Self::UnresolvedType {
            type_name: type_name.into(),
        }
    }

    /// Creates an invariant violation error with the given message.
    pub fn invariant(message: impl Into<String>) -> Self {
        Self::InvariantViolation {
            message: message.into(),
        }
    }
}
