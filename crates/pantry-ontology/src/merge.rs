//! Cross-source merge with fixed priority.
//!
//! Source B (the curated dataset) wins conflicts: its display name is used,
//! its fdc id is preferred (falling back to source A's), and its surface
//! forms sort first in the combined dedup pass. Output order is ascending by
//! slug, independent of input order.

use serde::Serialize;

use crate::record::{dedup_surface_forms, NormalizedRecord, RecordMap};

/// Counts for the run summary.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct MergeSummary {
    pub entries: usize,
    pub overlapping: usize,
    pub legacy_only: usize,
    pub curated_only: usize,
}

/// Merge the two slug-keyed source record sets into one ordered set.
pub fn merge_sources(legacy: &RecordMap, curated: &RecordMap) -> (RecordMap, MergeSummary) {
    let mut merged = RecordMap::new();
    let mut summary = MergeSummary::default();

    let slugs = legacy.keys().chain(curated.keys());
    for slug in slugs {
        if merged.contains_key(slug) {
            continue;
        }
        let record = match (legacy.get(slug), curated.get(slug)) {
            (Some(a), Some(b)) => {
                summary.overlapping += 1;
                NormalizedRecord {
                    slug: slug.clone(),
                    display_name: b.display_name.clone(),
                    surface_forms: dedup_surface_forms(
                        b.surface_forms.iter().chain(a.surface_forms.iter()),
                    ),
                    fdc_id: b.fdc_id.or(a.fdc_id),
                }
            }
            (None, Some(b)) => {
                summary.curated_only += 1;
                b.clone()
            }
            (Some(a), None) => {
                summary.legacy_only += 1;
                a.clone()
            }
            (None, None) => unreachable!("slug drawn from one of the two maps"),
        };
        merged.insert(slug.clone(), record);
    }

    summary.entries = merged.len();
    (merged, summary)
}
