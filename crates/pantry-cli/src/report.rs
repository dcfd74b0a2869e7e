//! Shared I/O + reporting helpers for the batch commands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use pantry_ontology::{Ontology, OntologyStats};

pub(crate) fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

pub(crate) fn read_ontology(path: &Path) -> Result<Ontology> {
    let text = read_to_string(path)?;
    serde_json::from_str(&text).with_context(|| format!("parsing ontology {}", path.display()))
}

/// Write the full ontology as pretty-printed JSON. This is the only output
/// write of a run; everything before it is read-only.
pub(crate) fn write_ontology(path: &Path, ontology: &Ontology) -> Result<()> {
    let mut json = serde_json::to_string_pretty(ontology).context("serializing ontology")?;
    json.push('\n');
    fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    println!("{} {}", "wrote".green().bold(), path.display().to_string().bold());
    Ok(())
}

pub(crate) fn print_stats(stats: &OntologyStats) {
    println!(
        "  {} entries, {} with fdc id, {} surface forms",
        stats.entries.to_string().bold(),
        stats.with_fdc.to_string().bold(),
        stats.surface_forms.to_string().bold(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use pantry_ontology::{enrich_record, ModifierLexicon, NormalizedRecord};
    use tempfile::tempdir;

    fn small_ontology() -> Ontology {
        let lexicon = ModifierLexicon::builtin();
        Ontology::from_entries([enrich_record(
            NormalizedRecord {
                slug: "salt".to_string(),
                display_name: "Salt".to_string(),
                surface_forms: vec!["Salt".to_string(), "sea salt".to_string()],
                fdc_id: Some(173468),
            },
            &lexicon,
        )])
    }

    #[test]
    fn write_then_read_round_trips_the_artifact() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ingredient-ontology.json");

        let ontology = small_ontology();
        write_ontology(&path, &ontology).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.ends_with('\n'), "artifact should end with a newline");
        // Pretty-printed, like the artifacts downstream tooling diffs.
        assert!(text.starts_with("[\n"));

        let reloaded = read_ontology(&path).unwrap();
        assert_eq!(reloaded, ontology);
    }

    #[test]
    fn read_errors_name_the_offending_path() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        let err = read_ontology(&missing).unwrap_err();
        assert!(format!("{err:#}").contains("nope.json"));

        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, "not json").unwrap();
        let err = read_ontology(&bad).unwrap_err();
        assert!(format!("{err:#}").contains("bad.json"));
    }
}
