//! Schema Type Generator CLI
//!
//! Generates TypeScript interfaces from a schema document.
//!
//! Usage:
//!   schema-typegen --input src/schema/meta/context.yaml --output context.ts
//!   schema-typegen --check
//!   schema-typegen --help

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use schema_typegen::output::{check_drift, write_output, LineChangeKind};
use schema_typegen::{loader, TypegenConfig, TypegenError};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "schema-typegen")]
#[command(about = "Generate TypeScript interfaces from a schema document")]
struct Cli {
    /// Config file layered over typegen.toml and the environment
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Schema document (YAML or JSON)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Generated TypeScript file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Entry the document must define as an object
    #[arg(short, long)]
    root_key: Option<String>,

    /// JSON pointer to the mapping holding the entries (e.g. /meta)
    #[arg(short, long)]
    pointer: Option<String>,

    /// Emit doc comments from schema descriptions
    #[arg(long)]
    docs: bool,

    /// Print to stdout instead of writing the output file
    #[arg(long)]
    stdout: bool,

    /// Fail if the output file differs from freshly generated code
    #[arg(long, conflicts_with = "stdout")]
    check: bool,

    /// Write the effective configuration to this path and exit
    #[arg(long)]
    init: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("❌ Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = TypegenConfig::load_from(cli.config.as_deref()).context("loading configuration")?;

    if let Some(input) = cli.input {
        config.input.path = input;
    }
    if let Some(output) = cli.output {
        config.output.path = output;
    }
    if let Some(root_key) = cli.root_key {
        config.generate.root_key = root_key;
    }
    if let Some(pointer) = cli.pointer {
        config.input.pointer = Some(pointer);
    }
    if cli.docs {
        config.output.docs = true;
    }

    if let Some(path) = cli.init {
        config
            .save(&path)
            .with_context(|| format!("writing configuration to {}", path.display()))?;
        eprintln!("📝 Configuration written to {}", path.display());
        return Ok(());
    }

    let document = loader::load_document(&config.input.path)
        .with_context(|| format!("loading schema {}", config.input.path.display()))?;
    let generated = schema_typegen::generate(&document, &config.generate_options())?;

    if cli.stdout {
        print!("{}", generated.code);
        return Ok(());
    }

    let output_path = &config.output.path;

    if cli.check {
        let report = check_drift(output_path, &generated.code)?;
        if report.is_clean() {
            eprintln!("✅ {} is up to date", output_path.display());
            return Ok(());
        }
        if report.missing {
            eprintln!("⚠️  {} does not exist", output_path.display());
        } else {
            let removed = report.changes.iter().filter(|c| c.kind == LineChangeKind::Removed).count();
            let added = report.changes.len() - removed;
            eprintln!("⚠️  {} is stale (-{} +{})", output_path.display(), removed, added);
            eprint!("{}", report.diff);
        }
        return Err(TypegenError::Drift {
            path: output_path.clone(),
        }
        .into());
    }

    let bytes = write_output(output_path, &generated.code)?;
    eprintln!("📦 TypeScript declarations generated at '{}'", output_path.display());
    eprintln!(
        "   {} interfaces, {} fields, {} bytes",
        generated.declaration_count, generated.field_count, bytes
    );

    Ok(())
}
