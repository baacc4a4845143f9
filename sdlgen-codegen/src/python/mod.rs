//! Python code generation modules.

pub mod naming;
pub mod resolve;
pub mod resolvers;
pub mod symbolic;
pub mod types;

pub use resolvers::ResolverGenerator;
pub use symbolic::{CodeBlock, Import, SymbolicType};
pub use types::TypeGenerator;

/// Names of the root operation types.
pub const ROOT_TYPES: [&str; 2] = ["Query", "Mutation"];

/// Placeholder body for classes and functions.
pub const EMPTY_BODY: &str = "    ...";

/// Returns true if `name` is a root operation type.
#[must_use]
pub fn is_root_type(name: &str) -> bool {
    ROOT_TYPES.contains(&name)
}
