//! # sdlgen
//!
//! Python scaffolding generator for GraphQL services built on Ariadne.
//!
//! Given a GraphQL schema, sdlgen emits a `types` module with one frozen
//! dataclass, protocol, enum or union alias per schema type, and a
//! `resolvers` module with Ariadne bindings and a stub for every field that
//! takes arguments.
//!
//! ## Quick Start
//!
//! ```ignore
//! use sdlgen::prelude::*;
//!
//! let document = parse_schema("type Query { hello(name: String): String }")?;
//! let mut writer = DirectoryWriter::new("service");
//! Generator::new(&document).generate_into(&mut writer)?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - SDL parsing and the definition model
//! - [`codegen`] - Type resolution, generators, pipeline and writers

pub mod prelude;

/// SDL parsing and the definition model.
pub mod schema {
    pub use sdlgen_schema::*;
}

/// Python code generation.
pub mod codegen {
    pub use sdlgen_codegen::*;
}

// Re-export commonly used items at the crate root
pub use sdlgen_codegen::{
    CodegenError, DirectoryWriter, GeneratedModules, Generator, KnownTypes, MemoryWriter,
    ModuleWriter, Stage, generate_from_file, generate_from_sdl,
};
pub use sdlgen_schema::{ParseError, SchemaDocument, parse_schema, parse_schema_file};
