//! Data-model code generation for the `types` module.

use crate::error::CodegenError;
use crate::known::KnownTypes;
use crate::python::naming::camel_to_snake;
use crate::python::resolve::{resolve, resolve_named};
use crate::python::symbolic::{
    CodeBlock, ENUM_WEIGHT, PROTOCOL_WEIGHT, RECORD_WEIGHT, SymbolicType, UNION_WEIGHT, Weight,
};
use crate::python::{EMPTY_BODY, is_root_type};
use sdlgen_schema::{
    Definition, EnumTypeDef, InputObjectTypeDef, InterfaceTypeDef, ObjectTypeDef, SchemaDocument,
    TypeRef, UnionTypeDef,
};

/// Module receiving the generated types.
pub const MODULE: &str = ".types";

/// Returns every type declared by `document`, custom scalars included, as
/// owned by [`MODULE`], with the entries of `known` on top.
///
/// Entries of `known` take precedence, so a caller can point a scalar at the
/// module that really provides it.
#[must_use]
pub fn declared_types(document: &SchemaDocument, known: &KnownTypes) -> KnownTypes {
    document
        .type_names()
        .map(|name| (name, MODULE))
        .collect::<KnownTypes>()
        .widened(known.iter())
}

/// Generator for dataclasses, protocols, enums and union aliases.
pub struct TypeGenerator<'a> {
    document: &'a SchemaDocument,
    known: KnownTypes,
}

impl<'a> TypeGenerator<'a> {
    /// Creates a new type generator.
    ///
    /// Resolves against [`declared_types`] layered under `known`.
    #[must_use]
    pub fn new(document: &'a SchemaDocument, known: &KnownTypes) -> Self {
        Self {
            document,
            known: declared_types(document, known),
        }
    }

    /// Returns the table the generator resolves against.
    #[must_use]
    pub fn known_types(&self) -> &KnownTypes {
        &self.known
    }

    /// Generates one block per declarable definition, in definition order.
    ///
    /// # Errors
    /// Returns `CodegenError` if a field or member type cannot be resolved.
    pub fn generate(&self) -> Result<Vec<CodeBlock>, CodegenError> {
        let mut blocks = Vec::new();
        for definition in &self.document.definitions {
            if let Some(block) = self.generate_definition(definition)? {
                blocks.push(block);
            }
        }
        Ok(blocks)
    }

    fn generate_definition(&self, definition: &Definition) -> Result<Option<CodeBlock>, CodegenError> {
        match definition {
            Definition::Object(object) => self.generate_object(object),
            Definition::InputObject(input) => self.generate_input(input),
            Definition::Interface(interface) => self.generate_interface(interface).map(Some),
            Definition::Enum(enum_def) => Ok(Some(generate_enum(enum_def))),
            Definition::Union(union) => self.generate_union(union).map(Some),
            Definition::Scalar(_) | Definition::Schema(_) | Definition::Directive(_) => {
                tracing::debug!(
                    kind = definition.kind(),
                    name = ?definition.name(),
                    "no type declaration generated"
                );
                Ok(None)
            }
        }
    }

    /// Generates a frozen dataclass for an object type.
    fn generate_object(&self, object: &ObjectTypeDef) -> Result<Option<CodeBlock>, CodegenError> {
        if is_root_type(&object.name) {
            return Ok(None);
        }

        let fields = object
            .fields
            .iter()
            .filter(|field| !field.has_arguments())
            .map(|field| (field.name.as_str(), &field.ty));
        let bases = if object.implements.is_empty() {
            String::new()
        } else {
            format!("({})", object.implements.join(", "))
        };

        self.generate_class(
            &object.name,
            fields,
            &format!("@dataclass(frozen=True)\nclass {}{}:", object.name, bases),
            SymbolicType::imported("dataclass", "dataclasses"),
            RECORD_WEIGHT,
        )
        .map(Some)
    }

    /// Generates a frozen dataclass for an input object.
    fn generate_input(&self, input: &InputObjectTypeDef) -> Result<Option<CodeBlock>, CodegenError> {
        if is_root_type(&input.name) {
            return Ok(None);
        }

        let fields = input
            .fields
            .iter()
            .map(|field| (field.name.as_str(), &field.ty));

        self.generate_class(
            &input.name,
            fields,
            &format!("@dataclass(frozen=True)\nclass {}:", input.name),
            SymbolicType::imported("dataclass", "dataclasses"),
            RECORD_WEIGHT,
        )
        .map(Some)
    }

    /// Generates a protocol class for an interface.
    fn generate_interface(&self, interface: &InterfaceTypeDef) -> Result<CodeBlock, CodegenError> {
        let fields = interface
            .fields
            .iter()
            .filter(|field| !field.has_arguments())
            .map(|field| (field.name.as_str(), &field.ty));

        self.generate_class(
            &interface.name,
            fields,
            &format!("class {}(Protocol):", interface.name),
            SymbolicType::imported("Protocol", "typing"),
            PROTOCOL_WEIGHT,
        )
    }

    /// Shared body of records and protocols.
    ///
    /// Fields with a default are moved after fields without one, otherwise
    /// ordered by their Python name.
    fn generate_class<'f>(
        &self,
        name: &str,
        fields: impl Iterator<Item = (&'f str, &'f TypeRef)>,
        header: &str,
        support: SymbolicType,
        weight: Weight,
    ) -> Result<CodeBlock, CodegenError> {
        let mut used_types = Vec::new();
        let mut lines = Vec::new();

        for (field_name, ty) in fields {
            let resolved = resolve(ty, &self.known)?;
            lines.push((
                resolved.default_expression(),
                camel_to_snake(field_name),
                resolved.render(MODULE),
            ));
            used_types.push(resolved);
        }
        lines.sort_by(|a, b| (a.0.is_some(), &a.1).cmp(&(b.0.is_some(), &b.1)));

        let mut output = String::from(header);
        for (default, field_name, rendered) in &lines {
            output.push_str(&format!("\n    {field_name}: {rendered}"));
            if let Some(default) = default {
                output.push_str(&format!(" = {default}"));
            }
        }
        if lines.is_empty() {
            output.push('\n');
            output.push_str(EMPTY_BODY);
        }

        used_types.push(support);
        used_types.push(SymbolicType::imported(name, MODULE));
        Ok(CodeBlock::new(output, used_types).with_weight(weight))
    }

    /// Generates a `Union[...]` alias; members are direct references.
    fn generate_union(&self, union: &UnionTypeDef) -> Result<CodeBlock, CodegenError> {
        let members = union
            .members
            .iter()
            .map(|member| resolve_named(member, &self.known))
            .collect::<Result<Vec<_>, _>>()?;
        let rendered: Vec<_> = members.iter().map(|member| member.render(MODULE)).collect();

        let mut used_types = members;
        used_types.push(SymbolicType::imported("Union", "typing"));
        used_types.push(SymbolicType::imported(&union.name, MODULE));
        Ok(CodeBlock::new(
            format!("{} = Union[{}]", union.name, rendered.join(", ")),
            used_types,
        )
        .with_weight(UNION_WEIGHT))
    }
}

/// Generates an `Enum` class whose members carry their own name as value.
fn generate_enum(enum_def: &EnumTypeDef) -> CodeBlock {
    let mut output = format!("class {}(Enum):", enum_def.name);
    for value in &enum_def.values {
        output.push_str(&format!("\n    {value} = \"{value}\""));
    }
    if enum_def.values.is_empty() {
        output.push('\n');
        output.push_str(EMPTY_BODY);
    }

    CodeBlock::new(
        output,
        vec![
            SymbolicType::imported("Enum", "enum"),
            SymbolicType::imported(&enum_def.name, MODULE),
        ],
    )
    .with_weight(ENUM_WEIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdlgen_schema::{FieldDef, InputValueDef, ScalarTypeDef, SchemaDef};

    fn generate(document: &SchemaDocument) -> Vec<CodeBlock> {
        TypeGenerator::new(document, &KnownTypes::new())
            .generate()
            .expect("generate")
    }

    fn person() -> ObjectTypeDef {
        ObjectTypeDef::new("Person")
            .with_field(FieldDef::new("id", TypeRef::named("ID").non_null()))
            .with_field(FieldDef::new("name", TypeRef::named("String")))
    }

    #[test]
    fn test_type_generator_registers_definitions() {
        let document = SchemaDocument::new()
            .with_definition(Definition::Object(person()))
            .with_definition(Definition::Scalar(ScalarTypeDef {
                name: "DateTime".to_string(),
            }));
        let generator = TypeGenerator::new(&document, &KnownTypes::new());

        assert_eq!(generator.known_types().module_of("Person"), Some(MODULE));
        assert_eq!(generator.known_types().module_of("DateTime"), Some(MODULE));
    }

    #[test]
    fn test_declared_scalar_is_forward_reference() {
        let event = ObjectTypeDef::new("Event")
            .with_field(FieldDef::new("at", TypeRef::named("DateTime")));
        let document = SchemaDocument::new()
            .with_definition(Definition::Scalar(ScalarTypeDef {
                name: "DateTime".to_string(),
            }))
            .with_definition(Definition::Object(event));
        let blocks = generate(&document);

        assert_eq!(blocks.len(), 1);
        assert_eq!(
            blocks[0].body,
            "@dataclass(frozen=True)\nclass Event:\n    at: Optional[\"DateTime\"] = None"
        );
    }

    #[test]
    fn test_seeded_entries_take_precedence() {
        let document = SchemaDocument::new().with_definition(Definition::Scalar(ScalarTypeDef {
            name: "DateTime".to_string(),
        }));
        let seeded: KnownTypes = [("DateTime", "datetime")].into_iter().collect();
        let generator = TypeGenerator::new(&document, &seeded);

        assert_eq!(
            generator.known_types().module_of("DateTime"),
            Some("datetime")
        );
    }

    #[test]
    fn test_generate_object() {
        let document = SchemaDocument::new().with_definition(Definition::Object(person()));
        let blocks = generate(&document);

        assert_eq!(blocks.len(), 1);
        assert_eq!(
            blocks[0].body,
            "@dataclass(frozen=True)\nclass Person:\n    id: UUID\n    name: Optional[str] = None"
        );
        assert_eq!(blocks[0].weight, RECORD_WEIGHT);

        let imports: Vec<_> = blocks[0].imports().map(|i| i.to_string()).collect();
        assert!(imports.contains(&"from uuid import UUID".to_string()));
        assert!(imports.contains(&"from dataclasses import dataclass".to_string()));
        assert!(imports.contains(&"from .types import Person".to_string()));
    }

    #[test]
    fn test_generate_object_skips_argument_fields() {
        let object = person().with_field(
            FieldDef::new("friends", TypeRef::named("Person").list())
                .with_argument(InputValueDef::new("first", TypeRef::named("Int"))),
        );
        let document = SchemaDocument::new().with_definition(Definition::Object(object));
        let blocks = generate(&document);

        assert!(!blocks[0].body.contains("friends"));
    }

    #[test]
    fn test_defaulted_fields_follow_required_fields() {
        let object = ObjectTypeDef::new("Order")
            .with_field(FieldDef::new("note", TypeRef::named("String")))
            .with_field(FieldDef::new("total", TypeRef::named("Float").non_null()))
            .with_field(FieldDef::new("createdBy", TypeRef::named("ID").non_null()))
            .with_field(FieldDef::new("lines", TypeRef::named("Int").non_null().list()));
        let document = SchemaDocument::new().with_definition(Definition::Object(object));
        let body = &generate(&document)[0].body;

        let fields: Vec<_> = body.lines().skip(2).collect();
        assert_eq!(
            fields,
            vec![
                "    created_by: UUID",
                "    total: Decimal",
                "    lines: Optional[Sequence[int]] = None",
                "    note: Optional[str] = None",
            ]
        );
        let first_default = fields.iter().position(|line| line.contains(" = "));
        let last_required = fields.iter().rposition(|line| !line.contains(" = "));
        assert!(last_required < first_default);
    }

    #[test]
    fn test_generate_object_with_interfaces_and_self_reference() {
        let object = ObjectTypeDef::new("Person")
            .implementing("Node")
            .implementing("Named")
            .with_field(FieldDef::new("parent", TypeRef::named("Person")));
        let document = SchemaDocument::new().with_definition(Definition::Object(object));
        let body = &generate(&document)[0].body;

        assert!(body.contains("class Person(Node, Named):"));
        assert!(body.contains("    parent: Optional[\"Person\"] = None"));
    }

    #[test]
    fn test_generate_skips_root_types() {
        let document = SchemaDocument::new()
            .with_definition(Definition::Object(ObjectTypeDef::new("Query")))
            .with_definition(Definition::Object(ObjectTypeDef::new("Mutation")))
            .with_definition(Definition::Schema(SchemaDef::default()));
        assert!(generate(&document).is_empty());
    }

    #[test]
    fn test_generate_interface() {
        let interface = InterfaceTypeDef::new("Node")
            .with_field(FieldDef::new("id", TypeRef::named("ID").non_null()));
        let document = SchemaDocument::new().with_definition(Definition::Interface(interface));
        let blocks = generate(&document);

        assert_eq!(blocks[0].body, "class Node(Protocol):\n    id: UUID");
        assert_eq!(blocks[0].weight, PROTOCOL_WEIGHT);
    }

    #[test]
    fn test_generate_enum() {
        let document = SchemaDocument::new()
            .with_definition(Definition::Enum(EnumTypeDef::new("Color", ["RED", "GREEN"])));
        let blocks = generate(&document);

        assert_eq!(
            blocks[0].body,
            "class Color(Enum):\n    RED = \"RED\"\n    GREEN = \"GREEN\""
        );
        assert_eq!(blocks[0].weight, ENUM_WEIGHT);
        assert!(
            blocks[0]
                .used_types
                .contains(&SymbolicType::imported("Color", MODULE))
        );
    }

    #[test]
    fn test_generate_union() {
        let document = SchemaDocument::new()
            .with_definition(Definition::Union(UnionTypeDef::new(
                "Search",
                ["Person", "Color"],
            )))
            .with_definition(Definition::Object(person()))
            .with_definition(Definition::Enum(EnumTypeDef::new("Color", ["RED"])));
        let blocks = generate(&document);

        assert_eq!(blocks[0].body, "Search = Union[\"Person\", \"Color\"]");
        assert_eq!(blocks[0].weight, UNION_WEIGHT);
    }

    #[test]
    fn test_generate_input_and_empty_class() {
        let input = InputObjectTypeDef::new("PersonFilter")
            .with_field(InputValueDef::new("name", TypeRef::named("String")));
        let document = SchemaDocument::new()
            .with_definition(Definition::InputObject(input))
            .with_definition(Definition::Object(ObjectTypeDef::new("Empty")));
        let blocks = generate(&document);

        assert_eq!(
            blocks[0].body,
            "@dataclass(frozen=True)\nclass PersonFilter:\n    name: Optional[str] = None"
        );
        assert_eq!(blocks[1].body, "@dataclass(frozen=True)\nclass Empty:\n    ...");
    }

    #[test]
    fn test_generate_unresolved_type() {
        let object =
            ObjectTypeDef::new("Person").with_field(FieldDef::new("born", TypeRef::named("Date")));
        let document = SchemaDocument::new().with_definition(Definition::Object(object));
        let result = TypeGenerator::new(&document, &KnownTypes::new()).generate();

        assert!(matches!(
            result,
            Err(CodegenError::UnresolvedType { type_name }) if type_name == "Date"
        ));
    }
}
