//! Idempotent incremental patching of an enriched ontology.
//!
//! A patch adds surface forms to existing entries and/or introduces new
//! entries. It never deletes anything, never rewrites `display_name` or
//! `fdc` of a pre-existing entry, and deliberately does NOT re-derive
//! `tokens`/`modifiers`/`equivalence_class` when only surface forms change;
//! those fields keep their last-enriched values until the next full rebuild.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::enrich::enrich_with_class;
use crate::entry::{FdcRef, Ontology, OntologyEntry};
use crate::lexicon::ModifierLexicon;
use crate::record::{dedup_surface_forms, NormalizedRecord};

/// A candidate new entry in a patch specification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEntry {
    pub slug: String,
    pub display_name: String,
    pub surface_forms: Vec<String>,
    #[serde(default)]
    pub fdc: FdcRef,
    /// Curated equivalence class; absent means the slug itself.
    #[serde(default)]
    pub equivalence_class: Option<String>,
}

/// A patch specification: surface-form additions keyed by existing slug,
/// plus brand-new entry candidates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchSpec {
    #[serde(default)]
    pub surface_forms: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub new_entries: Vec<NewEntry>,
}

/// Counts for the run summary.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PatchSummary {
    pub forms_added: usize,
    pub entries_added: usize,
    pub entries_merged: usize,
    /// Patch keys that matched no entry; skipped, non-fatal.
    pub unknown_slugs: Vec<String>,
}

/// Append `candidates` to the entry's surface forms, skipping any already
/// present case-insensitively. Returns how many were added.
fn append_surface_forms(entry: &mut OntologyEntry, candidates: &[String]) -> usize {
    let mut present: BTreeSet<String> = entry
        .surface_forms
        .iter()
        .map(|f| f.to_lowercase())
        .collect();

    let mut added = 0;
    for form in dedup_surface_forms(candidates) {
        if present.insert(form.to_lowercase()) {
            entry.surface_forms.push(form);
            added += 1;
        }
    }
    added
}

/// Apply a patch specification to the ontology in place.
///
/// Idempotent: a second application of the same spec adds nothing.
pub fn apply_patch(
    ontology: &mut Ontology,
    spec: &PatchSpec,
    lexicon: &ModifierLexicon,
) -> PatchSummary {
    let mut summary = PatchSummary::default();

    // Step 1: surface-form additions to existing entries.
    for (slug, candidates) in &spec.surface_forms {
        match ontology.get_mut(slug) {
            Some(entry) => {
                summary.forms_added += append_surface_forms(entry, candidates);
            }
            None => {
                tracing::warn!(slug = %slug, "patch references unknown slug, skipping");
                summary.unknown_slugs.push(slug.clone());
            }
        }
    }

    // Step 2: new entries; an already-present slug degrades to a
    // surface-form patch, every other field of the holder untouched.
    for candidate in &spec.new_entries {
        if let Some(existing) = ontology.get_mut(&candidate.slug) {
            summary.forms_added += append_surface_forms(existing, &candidate.surface_forms);
            summary.entries_merged += 1;
            continue;
        }

        let record = NormalizedRecord {
            slug: candidate.slug.clone(),
            display_name: candidate.display_name.clone(),
            surface_forms: dedup_surface_forms(&candidate.surface_forms),
            fdc_id: candidate.fdc.fdc_id,
        };
        let class = Some(
            candidate
                .equivalence_class
                .clone()
                .unwrap_or_else(|| candidate.slug.clone()),
        );
        let mut entry = enrich_with_class(record, lexicon, class);
        // Curated patch entries carry full fdc metadata, not just the id.
        entry.fdc = candidate.fdc.clone();
        ontology.insert(entry);
        summary.entries_added += 1;
    }

    summary
}
