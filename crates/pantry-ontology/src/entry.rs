//! The ontology document model.
//!
//! `OntologyEntry` serializes to the camelCase JSON shape consumed by the
//! downstream ingredient matcher. `Ontology` is the in-memory knowledge base:
//! an explicit ordered map from slug to entry, so every iteration (and the
//! serialized array) is in ascending slug order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Link to a third-party nutrition record (USDA FoodData Central).
///
/// `fdc_id` is the normalized positive id; `data_type` and `description` are
/// descriptive metadata populated for curated patch entries, null otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FdcRef {
    pub fdc_id: Option<u64>,
    pub data_type: Option<String>,
    pub description: Option<String>,
}

impl FdcRef {
    pub fn from_id(fdc_id: Option<u64>) -> Self {
        Self {
            fdc_id,
            data_type: None,
            description: None,
        }
    }
}

/// Categorized modifier tokens, derived from `tokens` via the fixed lexicons.
///
/// `origin` has no lexicon yet and stays empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub color: Vec<String>,
    pub form: Vec<String>,
    pub prep: Vec<String>,
    pub size: Vec<String>,
    pub origin: Vec<String>,
}

/// Taxonomy stub, reserved for a separate curation process.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Taxonomy {
    pub group: Option<String>,
    pub family: Option<String>,
    pub genus: Option<String>,
    pub species: Option<String>,
}

/// One knowledge-base entry.
///
/// Invariants:
/// - `slug` is the unique key, immutable once assigned.
/// - `surface_forms` are case-insensitively unique and insertion-ordered;
///   the casing of the first occurrence wins.
/// - `tokens`, `modifiers` and `equivalence_class` are derived fields,
///   consistent with their derivation rule as of the last enricher run.
///   A surface-form-only patch does not refresh them (see `patch`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OntologyEntry {
    pub slug: String,
    pub display_name: String,
    pub surface_forms: Vec<String>,
    pub tokens: Vec<String>,
    pub modifiers: Modifiers,
    /// Stub, reserved for alias curation.
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
    pub fdc: FdcRef,
    pub equivalence_class: String,
    pub taxonomy: Taxonomy,
    /// Stub, reserved for substitution curation.
    #[serde(default)]
    pub substitutions: Vec<String>,
}

/// Aggregate counts over an ontology, for run summaries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OntologyStats {
    pub entries: usize,
    pub with_fdc: usize,
    pub surface_forms: usize,
}

/// The knowledge base: slug → entry, ascending slug iteration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ontology {
    entries: BTreeMap<String, OntologyEntry>,
}

impl Ontology {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from an entry list, e.g. a deserialized ontology artifact.
    /// Duplicate slugs collapse to the last occurrence.
    pub fn from_entries(entries: impl IntoIterator<Item = OntologyEntry>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|e| (e.slug.clone(), e))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.entries.contains_key(slug)
    }

    pub fn get(&self, slug: &str) -> Option<&OntologyEntry> {
        self.entries.get(slug)
    }

    pub fn get_mut(&mut self, slug: &str) -> Option<&mut OntologyEntry> {
        self.entries.get_mut(slug)
    }

    /// Insert an entry under its own slug, replacing any previous holder.
    pub fn insert(&mut self, entry: OntologyEntry) {
        self.entries.insert(entry.slug.clone(), entry);
    }

    pub fn iter(&self) -> impl Iterator<Item = &OntologyEntry> {
        self.entries.values()
    }

    /// Consume into an ascending-slug entry list, the serialized shape.
    pub fn into_entries(self) -> Vec<OntologyEntry> {
        self.entries.into_values().collect()
    }

    pub fn stats(&self) -> OntologyStats {
        OntologyStats {
            entries: self.entries.len(),
            with_fdc: self
                .entries
                .values()
                .filter(|e| e.fdc.fdc_id.is_some())
                .count(),
            surface_forms: self.entries.values().map(|e| e.surface_forms.len()).sum(),
        }
    }
}

impl Serialize for Ontology {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.entries.values())
    }
}

impl<'de> Deserialize<'de> for Ontology {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = Vec::<OntologyEntry>::deserialize(deserializer)?;
        Ok(Self::from_entries(entries))
    }
}
