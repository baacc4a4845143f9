//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits.
//!
//! ```ignore
//! use sdlgen::prelude::*;
//! ```

// Schema types
pub use sdlgen_schema::{
    Definition, FieldDef, InputValueDef, ParseError, SchemaDocument, TypeRef, Value,
    parse_schema, parse_schema_file,
};

// Generation
pub use sdlgen_codegen::python::{CodeBlock, SymbolicType};
pub use sdlgen_codegen::{
    CodegenError, GeneratedModules, Generator, KnownTypes, Stage, generate_from_file,
    generate_from_sdl,
};

// Output
pub use sdlgen_codegen::writer::{render_app, render_module};
pub use sdlgen_codegen::{DirectoryWriter, MemoryWriter, ModuleWriter};
