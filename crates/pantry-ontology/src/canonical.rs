//! Canonical-identity derivation: display text → slug, slug → equivalence
//! class.
//!
//! Both functions are total and deterministic. `slugify` is ASCII-only on
//! purpose: characters outside `[a-z0-9 -]` (after lowercasing) are dropped,
//! so accented names lose their accented letters rather than being
//! transliterated.

/// Suffixes denoting preparation/state/color, in stripping precedence order.
///
/// `derive_equivalence_class` strips the first of these the slug ends with
/// and then stops. A slug carrying two stacked suffixes is only partially
/// normalized; known limitation, kept for stability of existing class names.
const EQUIVALENCE_SUFFIXES: &[&str] = &[
    "-raw",
    "-cooked",
    "-frozen",
    "-canned",
    "-peeled",
    "-seeded",
    "-boneless",
    "-skinless",
    "-dried",
    "-ground",
    "-fresh",
    "-smoked",
    "-roasted",
    "-toasted",
    "-whole",
    "-sliced",
    "-diced",
    "-minced",
    "-chopped",
    "-shredded",
    "-crushed",
];

/// Convert a display name to its canonical slug.
///
/// Lowercase, keep only `[a-z0-9 -]`, collapse whitespace runs to a single
/// hyphen, collapse repeated hyphens, trim edge hyphens.
pub fn slugify(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for c in text.to_lowercase().chars() {
        let mapped = match c {
            'a'..='z' | '0'..='9' => Some(c),
            '-' => Some('-'),
            c if c.is_whitespace() => Some('-'),
            _ => None,
        };
        let Some(mapped) = mapped else { continue };

        if mapped == '-' {
            // Collapse runs; drop leading hyphens entirely.
            if !out.is_empty() {
                pending_hyphen = true;
            }
        } else {
            if pending_hyphen {
                out.push('-');
                pending_hyphen = false;
            }
            out.push(mapped);
        }
    }

    // A trailing pending hyphen is dropped, which is the edge trim.
    out
}

/// Strip at most one recognized modifier suffix from a slug to obtain its
/// equivalence class. Returns the slug unchanged when no suffix matches.
pub fn derive_equivalence_class(slug: &str) -> String {
    for suffix in EQUIVALENCE_SUFFIXES {
        if let Some(base) = slug.strip_suffix(suffix) {
            return base.to_string();
        }
    }
    slug.to_string()
}
