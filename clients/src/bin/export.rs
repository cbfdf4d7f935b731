//! `dm-export` — Exports TerraDCAT-AP ontology classes as JSON Schema documents.
//!
//! Reads a Turtle data model and writes `<class>.json` for every selected class.
//!
//! **Usage:**
//! ```
//! dm-export -f <model.ttl> (-l <class>... | -c <classes.txt>) [-o <dir>] [-y]
//! ```
//!
//! Existing files are only replaced after an interactive `y`, unless `--yes`
//! is given. Logging honours `RUST_LOG` (default `info`).

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use dm_exporter::{
    export, AlwaysOverwrite, ClassSelection, ExportReport, OverwritePrompt, SchemaWriter,
    StdinPrompt,
};
use tracing_subscriber::EnvFilter;

/// Export data model classes to JSON Schema.
#[derive(Parser, Debug)]
#[command(name = "dm-export", about = "Process data model export")]
#[command(group(ArgGroup::new("classes").required(true).args(["class_list", "class_path"])))]
struct Args {
    /// Path to the data model, e.g. `src/terra-core/TerraDCAT-AP.ttl`.
    #[arg(short = 'f', long)]
    file_path: PathBuf,

    /// Class names, e.g. `DataCollection BiomedicalResearch`.
    #[arg(short = 'l', long, num_args = 1..)]
    class_list: Vec<String>,

    /// Newline-delimited file of class names, e.g. `class_name.txt`.
    #[arg(short = 'c', long)]
    class_path: Option<PathBuf>,

    /// Output directory for the generated schemas.
    #[arg(short = 'o', long, default_value = ".")]
    out: PathBuf,

    /// Overwrite existing schema files without asking.
    #[arg(short = 'y', long)]
    yes: bool,
}

impl Args {
    fn selection(&self) -> ClassSelection {
        match &self.class_path {
            Some(path) => ClassSelection::File(path.clone()),
            None => ClassSelection::List(self.class_list.clone()),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .with_level(false)
        .init();

    let classes = args
        .selection()
        .resolve()
        .context("Failed to resolve class selection")?;

    let report = if args.yes {
        run(&args, &classes, AlwaysOverwrite)?
    } else {
        run(&args, &classes, StdinPrompt::new())?
    };

    tracing::info!(
        "Export complete: {} written, {} skipped",
        report.written_count(),
        report.skipped_count()
    );
    Ok(())
}

fn run<P: OverwritePrompt>(args: &Args, classes: &[String], prompt: P) -> Result<ExportReport> {
    let mut writer = SchemaWriter::create(&args.out, prompt)
        .with_context(|| format!("Failed to prepare output directory {}", args.out.display()))?;
    export(&args.file_path, classes, &mut writer)
        .with_context(|| format!("Failed to export {}", args.file_path.display()))
}
