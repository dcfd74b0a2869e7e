//! `pantry build`: synonym datasets → merged, enriched ontology.

use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use pantry_ingest_synonyms::{load_curated, load_legacy};
use pantry_ontology::{enrich_record, merge_sources, ModifierLexicon, Ontology};

use crate::report;

pub(crate) fn run(legacy_path: &Path, curated_path: &Path, out: &Path) -> Result<()> {
    println!("{} {}", "loading".cyan(), legacy_path.display());
    let legacy = load_legacy(&report::read_to_string(legacy_path)?)?;
    println!("  {} entries", legacy.len().to_string().bold());

    println!("{} {}", "loading".cyan(), curated_path.display());
    let curated = load_curated(&report::read_to_string(curated_path)?)?;
    println!("  {} entries", curated.len().to_string().bold());

    println!("{}", "merging".cyan());
    let (merged, summary) = merge_sources(&legacy, &curated);
    println!(
        "  {} unique slugs ({} overlapping, {} legacy-only, {} curated-only)",
        summary.entries.to_string().bold(),
        summary.overlapping,
        summary.legacy_only,
        summary.curated_only,
    );

    println!("{}", "enriching".cyan());
    let lexicon = ModifierLexicon::builtin();
    let ontology = Ontology::from_entries(
        merged
            .into_values()
            .map(|record| enrich_record(record, &lexicon)),
    );
    report::print_stats(&ontology.stats());

    report::write_ontology(out, &ontology)
}
