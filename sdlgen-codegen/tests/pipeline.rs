//! End-to-end generation from SDL text.

use sdlgen_codegen::python::types;
use sdlgen_codegen::{
    CodegenError, DirectoryWriter, Generator, KnownTypes, MemoryWriter, Stage,
    generate_from_file, generate_from_sdl,
};
use sdlgen_schema::parse_schema;

const SCHEMA: &str = r#"
enum Color {
    RED
    GREEN
}

type Person {
    id: ID!
    name: String
    favourite: Color
    friends(first: Int): [Person!]
}

type Query {
    person(id: ID!): Person
    greet(name: String = DEFAULT): String
}
"#;

const EXPECTED_TYPES: &str = concat!(
    "from dataclasses import dataclass\n",
    "from enum import Enum\n",
    "from typing import Optional\n",
    "from uuid import UUID\n",
    "\n\n",
    "class Color(Enum):\n",
    "    RED = \"RED\"\n",
    "    GREEN = \"GREEN\"\n",
    "\n\n",
    "@dataclass(frozen=True)\n",
    "class Person:\n",
    "    id: UUID\n",
    "    favourite: Optional[\"Color\"] = None\n",
    "    name: Optional[str] = None\n",
);

const EXPECTED_RESOLVERS: &str = concat!(
    "from ariadne import EnumType, ObjectType, QueryType\n",
    "from graphql import GraphQLResolveInfo\n",
    "from typing import Optional, Sequence\n",
    "from uuid import UUID\n",
    "from .types import Color, Person\n",
    "\n\n",
    "color = EnumType(\"Color\", values=Color)\n",
    "\n\n",
    "person = ObjectType(\"Person\")\n",
    "@person.field(\"friends\")\n",
    "def resolve_person_friends(person_: Person, info: GraphQLResolveInfo, first: Optional[int]) -> Optional[Sequence[Person]]:\n",
    "    ...\n",
    "\n\n",
    "query = QueryType()\n",
    "@query.field(\"person\")\n",
    "def resolve_query_person(_: None, info: GraphQLResolveInfo, id: UUID) -> Optional[Person]:\n",
    "    ...\n",
    "@query.field(\"greet\")\n",
    "def resolve_query_greet(_: None, info: GraphQLResolveInfo, name: str = str.DEFAULT) -> Optional[str]:\n",
    "    ...\n",
    "\n\n",
    "resolvers = [color, person, query]\n",
);

#[test]
fn test_generate_types_module() {
    let generated = generate_from_sdl(SCHEMA).expect("generate");
    assert_eq!(
        generated.render(Stage::Types).as_deref(),
        Some(EXPECTED_TYPES)
    );
}

#[test]
fn test_generate_resolvers_module() {
    let generated = generate_from_sdl(SCHEMA).expect("generate");
    assert_eq!(
        generated.render(Stage::Resolvers).as_deref(),
        Some(EXPECTED_RESOLVERS)
    );
}

#[test]
fn test_generation_is_idempotent() {
    let document = parse_schema(SCHEMA).expect("parse");
    let first = Generator::new(&document).generate().expect("generate");
    let second = Generator::new(&document).generate().expect("generate");
    assert_eq!(first, second);
}

#[test]
fn test_known_types_point_at_types_module() {
    let generated = generate_from_sdl(SCHEMA).expect("generate");
    for name in ["Color", "Person", "Query"] {
        assert_eq!(
            generated.known_types().module_of(name),
            Some(types::MODULE)
        );
    }
}

#[test]
fn test_declared_scalar_in_resolver_argument() {
    let sdl = r#"
        scalar DateTime
        type Query {
            since(at: DateTime!): Boolean
        }
    "#;
    let generated = generate_from_sdl(sdl).expect("generate");
    let module = generated.render(Stage::Resolvers).expect("resolvers");

    assert!(module.contains("from .types import DateTime\n"));
    assert!(module.contains(
        "def resolve_query_since(_: None, info: GraphQLResolveInfo, at: DateTime) -> Optional[bool]:"
    ));
}

#[test]
fn test_unions_and_protocols_precede_records() {
    let sdl = r#"
        type Dog implements Pet { name: String! }
        interface Pet { name: String! }
        union Animal = Dog
    "#;
    let generated = generate_from_sdl(sdl).expect("generate");
    let module = generated.render(Stage::Types).expect("types");

    let union = module.find("Animal = Union[\"Dog\"]").expect("union");
    let protocol = module.find("class Pet(Protocol):").expect("protocol");
    let record = module.find("class Dog(Pet):").expect("record");
    assert!(union < protocol && protocol < record);
    assert!(module.contains("from typing import Protocol, Union\n"));

    // Interfaces and unions get no resolver binding.
    let resolvers = generated.blocks(Stage::Resolvers).expect("resolvers");
    assert_eq!(resolvers.len(), 2);
    assert_eq!(resolvers[1].body, "resolvers = [dog]");
}

#[test]
fn test_mutation_binding() {
    let sdl = r#"
        type Mutation {
            rename(personId: ID!, newName: String!): Boolean!
        }
    "#;
    let generated = generate_from_sdl(sdl).expect("generate");
    let module = generated.render(Stage::Resolvers).expect("resolvers");

    assert!(module.contains("mutation = MutationType()\n"));
    assert!(module.contains(
        "def resolve_mutation_rename(_: None, info: GraphQLResolveInfo, person_id: UUID, new_name: str) -> bool:"
    ));
    assert!(generated.blocks(Stage::Types).expect("types").is_empty());
}

#[test]
fn test_unknown_type_aborts_before_writing() {
    let sdl = "type Person { born: Date }";
    let dir = tempfile::tempdir().expect("tempdir");
    let document = parse_schema(sdl).expect("parse");
    let mut writer = DirectoryWriter::new(dir.path());

    let result = Generator::new(&document).generate_into(&mut writer);

    assert!(matches!(
        result,
        Err(CodegenError::UnresolvedType { type_name }) if type_name == "Date"
    ));
    assert!(!writer.path_for(Stage::Types).exists());
    assert!(!writer.path_for(Stage::Resolvers).exists());
}

#[test]
fn test_declared_scalar_resolves_to_types_module() {
    let generated =
        generate_from_sdl("scalar DateTime\ntype Event { at: DateTime }").expect("generate");
    let module = generated.render(Stage::Types).expect("types");

    assert!(module.contains("    at: Optional[\"DateTime\"] = None\n"));
    assert_eq!(
        generated.known_types().module_of("DateTime"),
        Some(types::MODULE)
    );
}

#[test]
fn test_undeclared_scalar_is_unresolved() {
    let result = generate_from_sdl("type Event { at: DateTime }");
    assert!(matches!(
        result,
        Err(CodegenError::UnresolvedType { type_name }) if type_name == "DateTime"
    ));
}

#[test]
fn test_seeded_custom_scalar() {
    let document = parse_schema("scalar DateTime\ntype Event { at: DateTime! }").expect("parse");
    let known: KnownTypes = [("DateTime", "datetime")].into_iter().collect();
    let mut writer = MemoryWriter::new();

    Generator::new(&document)
        .with_known_types(known)
        .generate_into(&mut writer)
        .expect("generate");

    let module = writer.get(Stage::Types).expect("types");
    assert!(module.contains("from datetime import DateTime\n"));
    assert!(module.contains("    at: DateTime\n"));
}

#[test]
fn test_non_enum_default_is_fatal() {
    let result = generate_from_sdl("type Query { items(first: Int = 10): [Int] }");
    assert!(matches!(
        result,
        Err(CodegenError::UnsupportedDefault { argument, .. }) if argument == "first"
    ));
}

#[test]
fn test_parse_error_is_reported() {
    let result = generate_from_sdl("type {");
    assert!(matches!(result, Err(CodegenError::Parse(_))));
}

#[test]
fn test_generate_from_file_and_write_directory() {
    let dir = tempfile::tempdir().expect("tempdir");
    let schema_path = dir.path().join("schema.graphql");
    std::fs::write(&schema_path, SCHEMA).expect("write schema");

    let generated = generate_from_file(&schema_path).expect("generate");
    let mut writer = DirectoryWriter::new(dir.path());
    generated.write_to(&mut writer).expect("write");

    let types = std::fs::read_to_string(dir.path().join("types.py")).expect("read types");
    let resolvers =
        std::fs::read_to_string(dir.path().join("resolvers.py")).expect("read resolvers");
    assert_eq!(types, EXPECTED_TYPES);
    assert_eq!(resolvers, EXPECTED_RESOLVERS);
}
