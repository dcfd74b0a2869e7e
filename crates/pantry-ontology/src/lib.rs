//! Canonical ingredient ontology core.
//!
//! Builds and incrementally updates a slug-keyed knowledge base of
//! ingredients, each entry carrying a deduplicated set of surface forms and
//! lexical metadata derived from them.
//!
//! Pipeline:
//!
//! ```text
//! source A ─┐
//!           ├─► NormalizedRecord maps ─► merge ─► enrich ─► Ontology
//! source B ─┘
//!
//! Ontology + PatchSpec ─► apply_patch ─► Ontology
//! ```
//!
//! This crate is pure transformation: reading and writing the JSON artifacts
//! is the caller's job (see `pantry-cli`). All keyed collections are ordered
//! (`BTreeMap`/`BTreeSet`) so output is deterministic regardless of input
//! iteration order.

pub mod canonical;
pub mod enrich;
pub mod entry;
pub mod lexicon;
pub mod merge;
pub mod patch;
pub mod record;

pub use canonical::{derive_equivalence_class, slugify};
pub use enrich::enrich_record;
pub use entry::{FdcRef, Modifiers, Ontology, OntologyEntry, OntologyStats, Taxonomy};
pub use lexicon::ModifierLexicon;
pub use merge::{merge_sources, MergeSummary};
pub use patch::{apply_patch, NewEntry, PatchSpec, PatchSummary};
pub use record::{dedup_surface_forms, normalize_fdc_id, NormalizedRecord, RecordMap};
