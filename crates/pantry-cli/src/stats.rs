//! `pantry stats`: aggregate counts for an existing ontology artifact.

use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use crate::report;

pub(crate) fn run(ontology_path: &Path) -> Result<()> {
    let ontology = report::read_ontology(ontology_path)?;
    println!("{} {}", "ontology".cyan(), ontology_path.display());
    report::print_stats(&ontology.stats());
    Ok(())
}
