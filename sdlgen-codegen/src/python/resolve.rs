//! Resolution of schema type references into Python types.

use crate::error::CodegenError;
use crate::known::KnownTypes;
use crate::python::symbolic::SymbolicType;
use sdlgen_schema::TypeRef;

/// Returns the Python type of a builtin scalar.
#[must_use]
pub fn builtin_scalar(name: &str) -> Option<SymbolicType> {
    match name {
        "ID" => Some(SymbolicType::imported("UUID", "uuid")),
        "String" => Some(SymbolicType::builtin("str")),
        "Float" => Some(SymbolicType::imported("Decimal", "decimal")),
        "Int" => Some(SymbolicType::builtin("int")),
        "Boolean" => Some(SymbolicType::builtin("bool")),
        _ => None,
    }
}

/// Resolves a named type without the nullable wrapper.
///
/// Known schema types win over builtin scalars.
///
/// # Errors
/// Returns `CodegenError::UnresolvedType` if `name` is neither known nor a
/// builtin scalar.
pub fn resolve_named(name: &str, known: &KnownTypes) -> Result<SymbolicType, CodegenError> {
    if let Some(module) = known.module_of(name) {
        return Ok(SymbolicType::imported(name, module));
    }
    builtin_scalar(name).ok_or_else(|| CodegenError::unresolved(name))
}

/// Resolves a type reference.
///
/// Schema types are nullable unless marked non-null, so every named or list
/// level comes back wrapped in `Optional` and each non-null marker strips one
/// such wrapper.
///
/// # Errors
/// Returns `CodegenError::UnresolvedType` for unknown names and
/// `CodegenError::InvariantViolation` if a non-null marker meets a type that
/// is not optional.
pub fn resolve(ty: &TypeRef, known: &KnownTypes) -> Result<SymbolicType, CodegenError> {
    match ty {
        TypeRef::Named(name) => Ok(SymbolicType::optional(resolve_named(name, known)?)),
        TypeRef::NonNull(inner) => resolve(inner, known)?.into_required().map_err(|found| {
            CodegenError::invariant(format!(
                "non-null '{ty}' wraps non-optional {}",
                found.render("")
            ))
        }),
        TypeRef::List(inner) => Ok(SymbolicType::optional(SymbolicType::sequence_of(
            resolve(inner, known)?,
        ))),
    }
}
