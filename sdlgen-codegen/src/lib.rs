//! # sdlgen Codegen
//!
//! Python code generation from GraphQL schemas.
//!
//! This crate provides:
//! - Schema type resolution into Python type expressions
//! - Dataclass, protocol, enum and union generation (`types` module)
//! - Ariadne binding and resolver stub generation (`resolvers` module)
//! - A staged pipeline threading known types between modules
//! - Module rendering with import collection, and file writers

pub mod error;
pub mod generator;
pub mod known;
pub mod python;
pub mod writer;

pub use error::CodegenError;
pub use generator::{GeneratedModules, Generator, Stage};
pub use known::KnownTypes;
pub use writer::{DirectoryWriter, MemoryWriter, ModuleWriter};

/// Generates Python modules from GraphQL SDL text.
///
/// # Arguments
/// * `sdl` - Schema definition language source
///
/// # Returns
/// Blocks of every generated module.
///
/// # Errors
/// Returns `CodegenError` if parsing or generation fails.
pub fn generate_from_sdl(sdl: &str) -> Result<GeneratedModules, CodegenError> {
    let document = sdlgen_schema::parse_schema(sdl)?;
    Generator::new(&document).generate()
}

/// Generates Python modules from a GraphQL SDL file.
///
/// # Arguments
/// * `path` - Path to the schema file
///
/// # Returns
/// Blocks of every generated module.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, or generation fails.
pub fn generate_from_file(path: &std::path::Path) -> Result<GeneratedModules, CodegenError> {
    let sdl = std::fs::read_to_string(path)?;
    generate_from_sdl(&sdl)
}
