//! `pantry patch`: fold a patch spec into an existing ontology.

use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use pantry_ontology::{apply_patch, ModifierLexicon, PatchSpec};

use crate::report;

pub(crate) fn run(spec_path: &Path, ontology_path: &Path, out: &Path) -> Result<()> {
    // All inputs are read and parsed before anything is written; a bad spec
    // never leaves a half-patched artifact behind.
    let spec: PatchSpec = serde_json::from_str(&report::read_to_string(spec_path)?)
        .with_context(|| format!("parsing patch spec {}", spec_path.display()))?;
    let mut ontology = report::read_ontology(ontology_path)?;

    let summary = apply_patch(&mut ontology, &spec, &ModifierLexicon::builtin());

    println!(
        "{} {} surface forms, {} new entries, {} merged into existing",
        "added".cyan(),
        summary.forms_added.to_string().bold(),
        summary.entries_added.to_string().bold(),
        summary.entries_merged,
    );
    if !summary.unknown_slugs.is_empty() {
        println!(
            "{} {} unknown slug(s) skipped: {}",
            "warning".yellow().bold(),
            summary.unknown_slugs.len(),
            summary.unknown_slugs.join(", "),
        );
    }
    report::print_stats(&ontology.stats());

    report::write_ontology(out, &ontology)
}
