//! The common intermediate record shape both source adapters emit, plus the
//! two helpers used at every step of the pipeline: ordered case-insensitive
//! surface-form dedup and lenient external-id coercion.

use std::collections::{BTreeMap, BTreeSet};

use serde_json::Value;

/// A source record after schema adaptation, before merge/enrichment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRecord {
    pub slug: String,
    pub display_name: String,
    pub surface_forms: Vec<String>,
    pub fdc_id: Option<u64>,
}

/// Slug-keyed record set for one source, ascending iteration.
pub type RecordMap = BTreeMap<String, NormalizedRecord>;

/// Deduplicate surface-form candidates.
///
/// Keeps the first case-insensitive occurrence of each non-empty (after
/// trimming) string, preserving its original casing and relative position;
/// later duplicates are dropped.
pub fn dedup_surface_forms<I, S>(candidates: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen: BTreeSet<String> = BTreeSet::new();
    let mut out = Vec::new();
    for candidate in candidates {
        let trimmed = candidate.as_ref().trim();
        if trimmed.is_empty() {
            continue;
        }
        if seen.insert(trimmed.to_lowercase()) {
            out.push(trimmed.to_string());
        }
    }
    out
}

/// Coerce an uncurated external-reference id to a usable one.
///
/// Positive integers, and strings parsing as positive integers, pass
/// through. Everything else (zero, negative, floats, other JSON types,
/// absent) coerces to `None` silently; malformed ids in source data are a
/// known condition, not an error.
pub fn normalize_fdc_id(value: Option<&Value>) -> Option<u64> {
    match value? {
        Value::Number(n) => n.as_u64().filter(|&id| id > 0),
        Value::String(s) => s.trim().parse::<u64>().ok().filter(|&id| id > 0),
        _ => None,
    }
}
