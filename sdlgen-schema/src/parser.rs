//! GraphQL SDL parser.
//!
//! This module parses schema definition language text with
//! `async-graphql-parser` and lowers the resulting service document into the
//! closed definition model of this crate.

use crate::error::ParseError;
use crate::fields::{FieldDef, InputValueDef, TypeRef, Value};
use crate::types::{
    Definition, DirectiveDef, EnumTypeDef, InputObjectTypeDef, InterfaceTypeDef, ObjectTypeDef,
    ScalarTypeDef, SchemaDef, SchemaDocument, UnionTypeDef,
};
use async_graphql_parser::Positioned;
use async_graphql_parser::types::{
    BaseType, FieldDefinition, InputValueDefinition, Type, TypeDefinition, TypeKind,
    TypeSystemDefinition,
};
use async_graphql_value::ConstValue;

/// Parses a schema document from SDL text.
///
/// # Arguments
/// * `sdl` - Schema definition language source
///
/// # Returns
/// Parsed document or parse error.
///
/// # Errors
/// Returns `ParseError` if the text is not valid SDL, declares a type
/// extension, declares the same name twice or uses an unsupported literal.
pub fn parse_schema(sdl: &str) -> Result<SchemaDocument, ParseError> {
    let service = async_graphql_parser::parse_schema(sdl)?;
    let mut document = SchemaDocument::new();

    for definition in service.definitions {
        let definition = match definition {
            TypeSystemDefinition::Schema(schema) => {
                let schema = schema.node;
                if schema.extend {
                    return Err(ParseError::UnsupportedExtension {
                        name: "schema".to_string(),
                    });
                }
                Definition::Schema(SchemaDef {
                    query: schema.query.map(|name| name.node.to_string()),
                    mutation: schema.mutation.map(|name| name.node.to_string()),
                    subscription: schema.subscription.map(|name| name.node.to_string()),
                })
            }
            TypeSystemDefinition::Type(type_def) => lower_type(type_def.node)?,
            TypeSystemDefinition::Directive(directive) => {
                let directive = directive.node;
                Definition::Directive(DirectiveDef {
                    name: directive.name.node.to_string(),
                    arguments: lower_input_values(directive.arguments)?,
                })
            }
        };

        if document.conflicts_with(&definition) {
            let name = definition.name().unwrap_or_default();
            return Err(ParseError::duplicate(definition.kind(), name));
        }
        document.add_definition(definition);
    }

    Ok(document)
}

/// Reads and parses a schema document from a file.
///
/// # Errors
/// Returns `ParseError` if the file cannot be read or does not parse.
pub fn parse_schema_file(path: &std::path::Path) -> Result<SchemaDocument, ParseError> {
    let sdl = std::fs::read_to_string(path)?;
    parse_schema(&sdl)
}

/// Lowers a type definition.
fn lower_type(type_def: TypeDefinition) -> Result<Definition, ParseError> {
    let name = type_def.name.node.to_string();
    if type_def.extend {
        return Err(ParseError::UnsupportedExtension { name });
    }

    let definition = match type_def.kind {
        TypeKind::Scalar => Definition::Scalar(ScalarTypeDef { name }),
        TypeKind::Object(object) => Definition::Object(ObjectTypeDef {
            name,
            implements: object
                .implements
                .into_iter()
                .map(|name| name.node.to_string())
                .collect(),
            fields: lower_fields(object.fields)?,
        }),
        TypeKind::Interface(interface) => Definition::Interface(InterfaceTypeDef {
            name,
            fields: lower_fields(interface.fields)?,
        }),
        TypeKind::Union(union) => Definition::Union(UnionTypeDef {
            name,
            members: union
                .members
                .into_iter()
                .map(|member| member.node.to_string())
                .collect(),
        }),
        TypeKind::Enum(enum_type) => Definition::Enum(EnumTypeDef {
            name,
            values: enum_type
                .values
                .into_iter()
                .map(|value| value.node.value.node.to_string())
                .collect(),
        }),
        TypeKind::InputObject(input) => Definition::InputObject(InputObjectTypeDef {
            name,
            fields: lower_input_values(input.fields)?,
        }),
    };

    Ok(definition)
}

fn lower_fields(fields: Vec<Positioned<FieldDefinition>>) -> Result<Vec<FieldDef>, ParseError> {
    fields
        .into_iter()
        .map(|field| {
            let field = field.node;
            Ok(FieldDef {
                name: field.name.node.to_string(),
                arguments: lower_input_values(field.arguments)?,
                ty: lower_type_ref(&field.ty.node),
            })
        })
        .collect()
}

fn lower_input_values(
    values: Vec<Positioned<InputValueDefinition>>,
) -> Result<Vec<InputValueDef>, ParseError> {
    values
        .into_iter()
        .map(|value| {
            let value = value.node;
            Ok(InputValueDef {
                name: value.name.node.to_string(),
                ty: lower_type_ref(&value.ty.node),
                default_value: value
                    .default_value
                    .map(|default| lower_value(default.node))
                    .transpose()?,
            })
        })
        .collect()
}

/// Lowers a parser type into a recursive reference.
///
/// The parser models non-null as a flag on each level; here it becomes an
/// explicit wrapper around the nullable form.
fn lower_type_ref(ty: &Type) -> TypeRef {
    let base = match &ty.base {
        BaseType::Named(name) => TypeRef::Named(name.to_string()),
        BaseType::List(inner) => TypeRef::List(Box::new(lower_type_ref(inner))),
    };
    if ty.nullable { base } else { base.non_null() }
}

fn lower_value(value: ConstValue) -> Result<Value, ParseError> {
    let value = match value {
        ConstValue::Null => Value::Null,
        ConstValue::Number(number) => match number.as_i64() {
            Some(int) => Value::Int(int),
            None => Value::Float(number.as_f64().ok_or_else(|| ParseError::UnsupportedValue {
                kind: format!("number {number}"),
            })?),
        },
        ConstValue::String(string) => Value::String(string),
        ConstValue::Boolean(boolean) => Value::Boolean(boolean),
        ConstValue::Enum(name) => Value::Enum(name.to_string()),
        ConstValue::List(items) => Value::List(
            items
                .into_iter()
                .map(lower_value)
                .collect::<Result<_, _>>()?,
        ),
        ConstValue::Object(fields) => Value::Object(
            fields
                .into_iter()
                .map(|(name, value)| Ok((name.to_string(), lower_value(value)?)))
                .collect::<Result<_, ParseError>>()?,
        ),
        ConstValue::Binary(_) => {
            return Err(ParseError::UnsupportedValue {
                kind: "binary".to_string(),
            });
        }
    };
    Ok(value)
}
