//! # sdlgen Schema
//!
//! GraphQL schema parser and definition model.
//!
//! This crate provides:
//! - SDL parsing on top of `async-graphql-parser`
//! - A closed, read-only model of top-level definitions
//! - Field, argument, type-reference and literal definitions

pub mod error;
pub mod fields;
pub mod parser;
pub mod types;

pub use error::ParseError;
pub use fields::{FieldDef, InputValueDef, TypeRef, Value};
pub use parser::{parse_schema, parse_schema_file};
pub use types::{
    Definition, DirectiveDef, EnumTypeDef, InputObjectTypeDef, InterfaceTypeDef, ObjectTypeDef,
    ScalarTypeDef, SchemaDef, SchemaDocument, UnionTypeDef,
};
