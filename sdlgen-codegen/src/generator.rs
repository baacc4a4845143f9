//! Multi-stage generation pipeline.
//!
//! Stages run in a fixed order. Each one receives the known-types table left
//! by the previous stage; after it runs, every type its blocks import from
//! the stage's own module is added to the table handed to the next stage.

use crate::error::CodegenError;
use crate::known::KnownTypes;
use crate::python::{CodeBlock, ResolverGenerator, TypeGenerator, resolvers, types};
use crate::writer::{ModuleWriter, render_module};
use sdlgen_schema::SchemaDocument;
use std::fmt;

/// Generation stage, one per output module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    /// Data-model declarations.
    Types,
    /// Resolver bindings and stubs.
    Resolvers,
}

impl Stage {
    /// Every stage in execution order.
    pub const ALL: [Self; 2] = [Self::Types, Self::Resolvers];

    /// Returns the stage name, which is also the output file stem.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Types => "types",
            Self::Resolvers => "resolvers",
        }
    }

    /// Returns the module the stage's declarations live in.
    #[must_use]
    pub const fn module(&self) -> &'static str {
        match self {
            Self::Types => types::MODULE,
            Self::Resolvers => resolvers::MODULE,
        }
    }

    fn run(self, document: &SchemaDocument, known: &KnownTypes) -> Result<Vec<CodeBlock>, CodegenError> {
        match self {
            Self::Types => TypeGenerator::new(document, known).generate(),
            Self::Resolvers => ResolverGenerator::new(document, known).generate(),
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns the `(name, module)` pairs `blocks` import from `module`.
#[must_use]
pub fn discovered_types(module: &str, blocks: &[CodeBlock]) -> Vec<(String, String)> {
    blocks
        .iter()
        .flat_map(CodeBlock::imports)
        .filter(|import| import.module == module)
        .map(|import| (import.name.to_string(), import.module.to_string()))
        .collect()
}

/// Blocks produced by one stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageOutput {
    /// Producing stage.
    pub stage: Stage,
    /// Blocks in definition order.
    pub blocks: Vec<CodeBlock>,
}

/// Output of a complete pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedModules {
    stages: Vec<StageOutput>,
    known: KnownTypes,
}

impl GeneratedModules {
    /// Returns the blocks of `stage`.
    #[must_use]
    pub fn blocks(&self, stage: Stage) -> Option<&[CodeBlock]> {
        self.stages
            .iter()
            .find(|output| output.stage == stage)
            .map(|output| output.blocks.as_slice())
    }

    /// Iterates over stage outputs in execution order.
    pub fn iter(&self) -> impl Iterator<Item = &StageOutput> {
        self.stages.iter()
    }

    /// Returns the known-types table after the last stage.
    #[must_use]
    pub fn known_types(&self) -> &KnownTypes {
        &self.known
    }

    /// Renders the module source of `stage`.
    #[must_use]
    pub fn render(&self, stage: Stage) -> Option<String> {
        self.blocks(stage)
            .map(|blocks| render_module(stage.module(), blocks))
    }

    /// Hands every stage's blocks to `writer`.
    ///
    /// # Errors
    /// Returns the first error reported by the writer.
    pub fn write_to<W: ModuleWriter + ?Sized>(&self, writer: &mut W) -> Result<(), CodegenError> {
        for output in &self.stages {
            writer.write_module(output.stage, &output.blocks)?;
        }
        Ok(())
    }
}

/// Pipeline driver for one schema document.
pub struct Generator<'a> {
    document: &'a SchemaDocument,
    known: KnownTypes,
}

impl<'a> Generator<'a> {
    /// Creates a generator starting from an empty known-types table.
    #[must_use]
    pub fn new(document: &'a SchemaDocument) -> Self {
        Self {
            document,
            known: KnownTypes::new(),
        }
    }

    /// Seeds the known-types table, e.g. with types declared elsewhere.
    #[must_use]
    pub fn with_known_types(mut self, known: KnownTypes) -> Self {
        self.known = known;
        self
    }

    /// Runs every stage.
    ///
    /// The table starts with every type the document declares, attributed
    /// to the types module, under the seeded entries. Nothing is written
    /// here; a failing stage aborts the whole run.
    ///
    /// # Errors
    /// Returns `CodegenError` if any stage fails.
    pub fn generate(&self) -> Result<GeneratedModules, CodegenError> {
        let mut known = types::declared_types(self.document, &self.known);
        let mut stages = Vec::with_capacity(Stage::ALL.len());

        for stage in Stage::ALL {
            tracing::debug!(%stage, known = known.len(), "running stage");
            let blocks = stage.run(self.document, &known)?;

            let discovered = discovered_types(stage.module(), &blocks);
            tracing::debug!(%stage, discovered = discovered.len(), "registering declared types");
            known = known.widened(discovered);

            tracing::info!(%stage, blocks = blocks.len(), "stage generated");
            stages.push(StageOutput { stage, blocks });
        }

        Ok(GeneratedModules { stages, known })
    }

    /// Runs every stage, then hands the output to `writer`.
    ///
    /// # Errors
    /// Returns `CodegenError` if a stage or the writer fails. If a stage
    /// fails the writer is never called.
    pub fn generate_into<W: ModuleWriter + ?Sized>(
        &self,
        writer: &mut W,
    ) -> Result<GeneratedModules, CodegenError> {
        let generated = self.generate()?;
        generated.write_to(writer)?;
        Ok(generated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::python::SymbolicType;
    use crate::writer::MemoryWriter;
    use sdlgen_schema::{Definition, EnumTypeDef, FieldDef, ObjectTypeDef, TypeRef};

    fn document() -> SchemaDocument {
        SchemaDocument::new()
            .with_definition(Definition::Object(
                ObjectTypeDef::new("Person")
                    .with_field(FieldDef::new("id", TypeRef::named("ID").non_null())),
            ))
            .with_definition(Definition::Enum(EnumTypeDef::new("Color", ["RED"])))
    }

    #[test]
    fn test_stage_names() {
        assert_eq!(Stage::Types.name(), "types");
        assert_eq!(Stage::Resolvers.module(), ".resolvers");
        assert_eq!(Stage::Resolvers.to_string(), "resolvers");
    }

    #[test]
    fn test_discovered_types_filters_module() {
        let blocks = vec![CodeBlock::new(
            "x",
            vec![
                SymbolicType::imported("Person", ".types"),
                SymbolicType::imported("UUID", "uuid"),
            ],
        )];
        assert_eq!(
            discovered_types(".types", &blocks),
            vec![("Person".to_string(), ".types".to_string())]
        );
    }

    #[test]
    fn test_generate_registers_types_for_resolvers() {
        let document = document();
        let generated = Generator::new(&document).generate().expect("generate");

        assert_eq!(generated.known_types().module_of("Person"), Some(".types"));
        assert_eq!(generated.known_types().module_of("Color"), Some(".types"));

        let resolvers = generated.blocks(Stage::Resolvers).expect("resolvers");
        assert_eq!(resolvers[0].body, "person = ObjectType(\"Person\")");
        assert_eq!(resolvers[1].body, "color = EnumType(\"Color\", values=Color)");
    }

    #[test]
    fn test_generate_keeps_seeded_types() {
        let document = document();
        let seeded: KnownTypes = [("Money", "billing")].into_iter().collect();
        let generated = Generator::new(&document)
            .with_known_types(seeded)
            .generate()
            .expect("generate");

        assert_eq!(generated.known_types().module_of("Money"), Some("billing"));
    }

    #[test]
    fn test_failure_writes_nothing() {
        let document = SchemaDocument::new().with_definition(Definition::Object(
            ObjectTypeDef::new("Person").with_field(FieldDef::new("x", TypeRef::named("Nope"))),
        ));
        let mut writer = MemoryWriter::new();
        let result = Generator::new(&document).generate_into(&mut writer);

        assert!(matches!(result, Err(CodegenError::UnresolvedType { .. })));
        assert!(writer.is_empty());
    }

    #[test]
    fn test_generate_into_writes_every_stage() {
        let document = document();
        let mut writer = MemoryWriter::new();
        Generator::new(&document)
            .generate_into(&mut writer)
            .expect("generate");

        assert!(writer.get(Stage::Types).is_some());
        assert!(writer.get(Stage::Resolvers).is_some());
    }
}
