//! `sdlgen` command-line entry point.

mod cli;

use anyhow::Context;
use clap::Parser;
use cli::CommandLineInterface;
use sdlgen::{DirectoryWriter, Generator, parse_schema_file};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = CommandLineInterface::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_level()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let document = match parse_schema_file(&args.schema) {
        Ok(document) => document,
        Err(e) => {
            error!(schema = %args.schema.display(), "schema rejected");
            eprintln!("Failed to parse schema - {e}");
            std::process::exit(1);
        }
    };
    info!(
        schema = %args.schema.display(),
        definitions = document.definitions.len(),
        "Schema parsed"
    );

    let out_dir = args.output_dir();
    let mut writer = DirectoryWriter::new(&out_dir);
    Generator::new(&document)
        .generate_into(&mut writer)
        .with_context(|| format!("generating modules into {}", out_dir.display()))?;

    if args.app {
        writer
            .write_app(&args.schema_file_name())
            .context("writing app.py")?;
    }

    Ok(())
}
