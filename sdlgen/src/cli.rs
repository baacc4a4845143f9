//! Command-line arguments.

use clap::Parser;
use std::path::{Path, PathBuf};

/// Generate Ariadne service scaffolding from a GraphQL schema
#[derive(Parser, Debug)]
#[command(name = "sdlgen", version)]
pub struct CommandLineInterface {
    /// path to the GraphQL schema
    pub schema: PathBuf,

    /// directory receiving types.py and resolvers.py (defaults to the schema's directory)
    #[arg(long, short)]
    pub out_dir: Option<PathBuf>,

    /// also write app.py serving the schema with the generated resolvers
    #[arg(long, default_value_t = false)]
    pub app: bool,

    /// enable debug-level logging
    #[arg(long, default_value_t = false)]
    pub debug: bool,
}

impl CommandLineInterface {
    /// Returns the output directory.
    #[must_use]
    pub fn output_dir(&self) -> PathBuf {
        match &self.out_dir {
            Some(dir) => dir.clone(),
            None => self
                .schema
                .parent()
                .map_or_else(|| PathBuf::from("."), Path::to_path_buf),
        }
    }

    /// Returns the schema file name as referenced from `app.py`.
    #[must_use]
    pub fn schema_file_name(&self) -> String {
        self.schema.file_name().map_or_else(
            || "schema.graphql".to_string(),
            |name| name.to_string_lossy().into_owned(),
        )
    }

    /// Returns the default log filter directive.
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        if self.debug { "debug" } else { "info" }
    }
}
