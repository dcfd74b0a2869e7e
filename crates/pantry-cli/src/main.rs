//! Pantry CLI
//!
//! Batch operations over the ingredient-ontology artifact:
//! - Building a fresh ontology from the two synonym datasets (`build`)
//! - Folding an incremental patch spec into an existing one (`patch`)
//! - Recomputing and printing the aggregate counts (`stats`)
//!
//! Every command is a single offline run: read everything, transform, write
//! everything. A read or parse failure aborts before any output is written.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod build;
mod patch;
mod report;
mod stats;

const DEFAULT_LEGACY: &str = "data/synonyms-1.json";
const DEFAULT_CURATED: &str = "data/synonyms-2.json";
const DEFAULT_ONTOLOGY: &str = "data/ingredient-ontology.json";

#[derive(Parser)]
#[command(name = "pantry")]
#[command(author, version, about = "Ingredient ontology builder")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge both synonym datasets into a fresh enriched ontology.
    Build {
        /// Legacy synonym dataset (normalized_name/canonical_name schema)
        #[arg(long, default_value = DEFAULT_LEGACY)]
        legacy: PathBuf,
        /// Curated synonym dataset (slug/display_name schema)
        #[arg(long, default_value = DEFAULT_CURATED)]
        curated: PathBuf,
        /// Output ontology JSON
        #[arg(short, long, default_value = DEFAULT_ONTOLOGY)]
        out: PathBuf,
    },

    /// Apply a patch spec (surface-form additions + new entries) to an
    /// existing ontology. Idempotent; re-running the same spec is a no-op.
    Patch {
        /// Patch specification JSON
        spec: PathBuf,
        /// Ontology to patch
        #[arg(long, default_value = DEFAULT_ONTOLOGY)]
        ontology: PathBuf,
        /// Where to write the patched ontology (defaults to in place)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Print aggregate counts for an existing ontology.
    Stats {
        /// Ontology JSON
        #[arg(default_value = DEFAULT_ONTOLOGY)]
        ontology: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Build {
            legacy,
            curated,
            out,
        } => build::run(&legacy, &curated, &out),
        Commands::Patch {
            spec,
            ontology,
            out,
        } => {
            let out = out.unwrap_or_else(|| ontology.clone());
            patch::run(&spec, &ontology, &out)
        }
        Commands::Stats { ontology } => stats::run(&ontology),
    }
}
