//! Lexical enrichment: normalized record → full ontology entry.
//!
//! Pure and idempotent: enriching the same surface forms always reproduces
//! the same tokens, modifiers and equivalence class.

use std::collections::{BTreeMap, BTreeSet};

use crate::canonical::derive_equivalence_class;
use crate::entry::{FdcRef, Modifiers, OntologyEntry, Taxonomy};
use crate::lexicon::ModifierLexicon;
use crate::record::NormalizedRecord;

/// Derive the sorted token set from surface forms: lowercase, alphanumeric
/// only, length ≥ 2, deduplicated.
pub fn derive_tokens<S: AsRef<str>>(surface_forms: &[S]) -> Vec<String> {
    let mut tokens: BTreeSet<String> = BTreeSet::new();
    for form in surface_forms {
        for word in form.as_ref().to_lowercase().split_whitespace() {
            let cleaned: String = word.chars().filter(|c| c.is_ascii_alphanumeric()).collect();
            if cleaned.len() >= 2 {
                tokens.insert(cleaned);
            }
        }
    }
    tokens.into_iter().collect()
}

/// Classify tokens into the fixed modifier categories.
pub fn derive_modifiers(tokens: &[String], lexicon: &ModifierLexicon) -> Modifiers {
    let pick = |table: &[&str]| -> Vec<String> {
        tokens
            .iter()
            .filter(|t| table.binary_search(&t.as_str()).is_ok())
            .cloned()
            .collect()
    };
    Modifiers {
        color: pick(lexicon.color),
        form: pick(lexicon.form),
        prep: pick(lexicon.prep),
        size: pick(lexicon.size),
        origin: Vec::new(),
    }
}

/// Enrich a merged record into a full entry: derived lexical fields plus
/// null/empty stubs for the fields other processes own.
pub fn enrich_record(record: NormalizedRecord, lexicon: &ModifierLexicon) -> OntologyEntry {
    enrich_with_class(record, lexicon, None)
}

/// Enrich with an explicit equivalence class (used by patch new-entry
/// descriptors, which may carry a curated one); `None` derives it from the
/// slug.
pub(crate) fn enrich_with_class(
    record: NormalizedRecord,
    lexicon: &ModifierLexicon,
    equivalence_class: Option<String>,
) -> OntologyEntry {
    let tokens = derive_tokens(&record.surface_forms);
    let modifiers = derive_modifiers(&tokens, lexicon);
    let equivalence_class =
        equivalence_class.unwrap_or_else(|| derive_equivalence_class(&record.slug));

    OntologyEntry {
        slug: record.slug,
        display_name: record.display_name,
        surface_forms: record.surface_forms,
        tokens,
        modifiers,
        aliases: BTreeMap::new(),
        fdc: FdcRef::from_id(record.fdc_id),
        equivalence_class,
        taxonomy: Taxonomy::default(),
        substitutions: Vec::new(),
    }
}
