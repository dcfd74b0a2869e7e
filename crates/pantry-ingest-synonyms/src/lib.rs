//! Synonym-dataset adapters for the ingredient ontology.
//!
//! Two external schemas land here:
//! - the **legacy** dataset: `normalized_name` / `canonical_name` /
//!   `synonyms[]`, keyed by nothing in particular (slugs are derived), and
//! - the **curated** dataset: `slug` / `display_name` / `synonym_array[]`,
//!   already canonically keyed.
//!
//! Each adapter maps its schema into the common [`NormalizedRecord`] shape
//! and keys the result by slug, so the merge engine and enricher stay
//! schema-agnostic. `fdc_id` is accepted as any JSON value and coerced
//! leniently (see `pantry_ontology::normalize_fdc_id`); these are uncurated
//! inputs and a junk id is data, not an error.

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;

use pantry_ontology::{dedup_surface_forms, normalize_fdc_id, slugify, NormalizedRecord, RecordMap};

/// One legacy-dataset record as found on disk.
#[derive(Debug, Clone, Deserialize)]
pub struct LegacyRecord {
    pub normalized_name: String,
    #[serde(default)]
    pub canonical_name: Option<String>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub fdc_id: Option<Value>,
}

/// One curated-dataset record as found on disk.
#[derive(Debug, Clone, Deserialize)]
pub struct CuratedRecord {
    pub slug: String,
    pub display_name: String,
    #[serde(default)]
    pub synonym_array: Vec<String>,
    #[serde(default)]
    pub fdc_id: Option<Value>,
}

/// Maps one external synonym schema into slug-keyed normalized records.
///
/// Duplicate slugs within one dataset collapse to the last record, matching
/// plain keyed insertion.
pub trait SourceAdapter {
    type Record;

    fn normalize(&self, record: &Self::Record) -> NormalizedRecord;

    fn normalize_all<'a>(&self, records: impl IntoIterator<Item = &'a Self::Record>) -> RecordMap
    where
        Self::Record: 'a,
    {
        records
            .into_iter()
            .map(|r| {
                let normalized = self.normalize(r);
                (normalized.slug.clone(), normalized)
            })
            .collect()
    }
}

/// Adapter for the legacy dataset: slug derived from the normalized name,
/// display name falling back to the normalized name.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyAdapter;

impl SourceAdapter for LegacyAdapter {
    type Record = LegacyRecord;

    fn normalize(&self, record: &LegacyRecord) -> NormalizedRecord {
        let display = record
            .canonical_name
            .clone()
            .unwrap_or_else(|| record.normalized_name.clone());
        let mut candidates = vec![display.clone(), record.normalized_name.clone()];
        candidates.extend(record.synonyms.iter().cloned());

        NormalizedRecord {
            slug: slugify(&record.normalized_name),
            display_name: display,
            surface_forms: dedup_surface_forms(candidates),
            fdc_id: normalize_fdc_id(record.fdc_id.as_ref()),
        }
    }
}

/// Adapter for the curated dataset: the slug field is trusted verbatim, not
/// re-slugified.
#[derive(Debug, Clone, Copy, Default)]
pub struct CuratedAdapter;

impl SourceAdapter for CuratedAdapter {
    type Record = CuratedRecord;

    fn normalize(&self, record: &CuratedRecord) -> NormalizedRecord {
        let mut candidates = vec![record.display_name.clone()];
        candidates.extend(record.synonym_array.iter().cloned());

        NormalizedRecord {
            slug: record.slug.clone(),
            display_name: record.display_name.clone(),
            surface_forms: dedup_surface_forms(candidates),
            fdc_id: normalize_fdc_id(record.fdc_id.as_ref()),
        }
    }
}

/// Parse + normalize a legacy dataset document (a JSON array of records).
pub fn load_legacy(json: &str) -> Result<RecordMap> {
    let records: Vec<LegacyRecord> =
        serde_json::from_str(json).context("parsing legacy synonym dataset")?;
    Ok(LegacyAdapter.normalize_all(&records))
}

/// Parse + normalize a curated dataset document (a JSON array of records).
pub fn load_curated(json: &str) -> Result<RecordMap> {
    let records: Vec<CuratedRecord> =
        serde_json::from_str(json).context("parsing curated synonym dataset")?;
    Ok(CuratedAdapter.normalize_all(&records))
}
