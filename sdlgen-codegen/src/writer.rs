//! Module rendering and output writers.

use crate::error::CodegenError;
use crate::generator::Stage;
use crate::python::CodeBlock;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

/// Separator between top-level statements.
const BLOCK_SEPARATOR: &str = "\n\n\n";

/// Renders a complete module from its blocks.
///
/// Imports of every used type are collected, grouped per module and sorted,
/// with absolute modules before relative ones; names declared by `module`
/// itself are not imported. Blocks are emitted by ascending weight, keeping
/// their original order on ties.
#[must_use]
pub fn render_module(module: &str, blocks: &[CodeBlock]) -> String {
    let mut imports: BTreeMap<(bool, &str), BTreeSet<&str>> = BTreeMap::new();
    for import in blocks.iter().flat_map(CodeBlock::imports) {
        if import.module != module {
            imports
                .entry((import.module.starts_with('.'), import.module))
                .or_default()
                .insert(import.name);
        }
    }

    let mut sorted: Vec<_> = blocks.iter().collect();
    sorted.sort_by_key(|block| block.weight);

    let mut sections = Vec::new();
    if !imports.is_empty() {
        let lines: Vec<_> = imports
            .iter()
            .map(|((_, source), names)| {
                let names: Vec<_> = names.iter().copied().collect();
                format!("from {} import {}", source, names.join(", "))
            })
            .collect();
        sections.push(lines.join("\n"));
    }
    sections.extend(sorted.into_iter().map(|block| block.body.clone()));

    if sections.is_empty() {
        return String::new();
    }
    let mut output = sections.join(BLOCK_SEPARATOR);
    output.push('\n');
    output
}

/// Renders the Ariadne ASGI application module.
///
/// The application loads `schema_file` from its own directory and binds the
/// generated resolver registry.
#[must_use]
pub fn render_app(schema_file: &str) -> String {
    format!(
        "from pathlib import Path\n\
         \n\
         from ariadne import load_schema_from_path\n\
         from ariadne import make_executable_schema\n\
         from ariadne.asgi import GraphQL\n\
         \n\
         from .resolvers import resolvers\n\
         \n\
         type_defs = load_schema_from_path(Path(__file__).parent / \"{schema_file}\")\n\
         \n\
         schema = make_executable_schema(type_defs, resolvers)\n\
         app = GraphQL(schema, debug=True)\n"
    )
}

/// Destination of generated modules.
pub trait ModuleWriter {
    /// Persists the blocks produced by `stage`.
    ///
    /// # Errors
    /// Returns `CodegenError` if the module cannot be stored.
    fn write_module(&mut self, stage: Stage, blocks: &[CodeBlock]) -> Result<(), CodegenError>;
}

/// Writer keeping rendered modules in memory.
#[derive(Debug, Default)]
pub struct MemoryWriter {
    modules: BTreeMap<Stage, String>,
}

impl MemoryWriter {
    /// Creates an empty writer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the rendered module of `stage`.
    #[must_use]
    pub fn get(&self, stage: Stage) -> Option<&str> {
        self.modules.get(&stage).map(String::as_str)
    }

    /// Returns true if nothing was written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl ModuleWriter for MemoryWriter {
    fn write_module(&mut self, stage: Stage, blocks: &[CodeBlock]) -> Result<(), CodegenError> {
        self.modules
            .insert(stage, render_module(stage.module(), blocks));
        Ok(())
    }
}

/// Writer creating one `<stage>.py` file per module in a directory.
#[derive(Debug, Clone)]
pub struct DirectoryWriter {
    root: PathBuf,
}

impl DirectoryWriter {
    /// Creates a writer targeting `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the output directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the file path of `stage`.
    #[must_use]
    pub fn path_for(&self, stage: Stage) -> PathBuf {
        self.root.join(format!("{}.py", stage.name()))
    }

    /// Writes `app.py` serving `schema_file` with the generated resolvers.
    ///
    /// # Errors
    /// Returns `CodegenError::Io` if the file cannot be written.
    pub fn write_app(&self, schema_file: &str) -> Result<PathBuf, CodegenError> {
        std::fs::create_dir_all(&self.root)?;
        let path = self.root.join("app.py");
        std::fs::write(&path, render_app(schema_file))?;
        tracing::info!(path = %path.display(), "wrote application module");
        Ok(path)
    }
}

impl ModuleWriter for DirectoryWriter {
    fn write_module(&mut self, stage: Stage, blocks: &[CodeBlock]) -> Result<(), CodegenError> {
        std::fs::create_dir_all(&self.root)?;
        let path = self.path_for(stage);
        std::fs::write(&path, render_module(stage.module(), blocks))?;
        tracing::info!(%stage, path = %path.display(), "wrote module");
        Ok(())
    }
}
