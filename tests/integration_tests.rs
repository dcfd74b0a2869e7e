//! End-to-end pipeline tests: synonym datasets → build → patch → patched
//! artifact, through the library crates and a JSON round trip on disk.

use std::fs;

use pantry_ingest_synonyms::{load_curated, load_legacy};
use pantry_ontology::{
    apply_patch, enrich_record, merge_sources, ModifierLexicon, Ontology, PatchSpec,
};

const LEGACY_JSON: &str = r#"[
    {
        "normalized_name": "Roma Tomato",
        "canonical_name": "Tomato",
        "synonyms": ["tomatoes"],
        "fdc_id": 170457
    },
    {
        "normalized_name": "salt",
        "synonyms": ["table salt", "Salt"],
        "fdc_id": "173468"
    },
    {
        "normalized_name": "thyme dried",
        "canonical_name": "Dried Thyme",
        "fdc_id": "n/a"
    }
]"#;

const CURATED_JSON: &str = r#"[
    {
        "slug": "salt",
        "display_name": "Salt",
        "synonym_array": ["sea salt", "kosher salt"],
        "fdc_id": 999
    },
    {
        "slug": "garlic-cloves",
        "display_name": "Garlic Cloves",
        "synonym_array": ["garlic"],
        "fdc_id": null
    }
]"#;

const PATCH_JSON: &str = r#"{
    "surfaceForms": {
        "garlic-cloves": ["garlic clove", "GARLIC"],
        "no-such-slug": ["ghost"]
    },
    "newEntries": [
        {
            "slug": "flour",
            "displayName": "Flour",
            "surfaceForms": ["flour", "all-purpose flour"],
            "fdc": {"fdcId": 789890, "dataType": "foundation", "description": "Flour, wheat"},
            "equivalenceClass": "flour"
        },
        {
            "slug": "salt",
            "displayName": "Salt (duplicate)",
            "surfaceForms": ["salt", "seasoned salt"],
            "fdc": {"fdcId": 1, "dataType": null, "description": null}
        }
    ]
}"#;

fn build_ontology() -> Ontology {
    let legacy = load_legacy(LEGACY_JSON).unwrap();
    let curated = load_curated(CURATED_JSON).unwrap();
    let (merged, summary) = merge_sources(&legacy, &curated);

    assert_eq!(summary.overlapping, 1, "only `salt` appears in both sources");
    assert_eq!(summary.legacy_only, 2);
    assert_eq!(summary.curated_only, 1);

    let lexicon = ModifierLexicon::builtin();
    Ontology::from_entries(merged.into_values().map(|r| enrich_record(r, &lexicon)))
}

#[test]
fn build_merges_and_enriches_both_sources() {
    let ontology = build_ontology();

    let slugs: Vec<&str> = ontology.iter().map(|e| e.slug.as_str()).collect();
    assert_eq!(
        slugs,
        vec!["garlic-cloves", "roma-tomato", "salt", "thyme-dried"]
    );

    let tomato = ontology.get("roma-tomato").unwrap();
    assert_eq!(tomato.display_name, "Tomato");
    assert_eq!(
        tomato.surface_forms,
        vec!["Tomato", "Roma Tomato", "tomatoes"]
    );
    for expected in ["tomato", "tomatoes", "roma"] {
        assert!(tomato.tokens.iter().any(|t| t == expected), "missing token {expected}");
    }
    assert_eq!(tomato.fdc.fdc_id, Some(170457));

    // Curated source wins conflicts; its forms sort first.
    let salt = ontology.get("salt").unwrap();
    assert_eq!(salt.display_name, "Salt");
    assert_eq!(salt.fdc.fdc_id, Some(999));
    // Legacy's lowercase "salt" deduplicates against curated's "Salt".
    assert_eq!(
        salt.surface_forms,
        vec!["Salt", "sea salt", "kosher salt", "table salt"]
    );

    // Junk fdc id coerced silently; suffix stripped for the class.
    let thyme = ontology.get("thyme-dried").unwrap();
    assert_eq!(thyme.fdc.fdc_id, None);
    assert_eq!(thyme.equivalence_class, "thyme");
    assert_eq!(thyme.modifiers.form, vec!["dried"]);
}

#[test]
fn build_is_deterministic() {
    let first = build_ontology();
    let second = build_ontology();
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn patch_round_trips_through_disk_and_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let ontology_path = dir.path().join("ingredient-ontology.json");

    let ontology = build_ontology();
    fs::write(
        &ontology_path,
        serde_json::to_string_pretty(&ontology).unwrap(),
    )
    .unwrap();

    // Reload from disk, as a patch run would.
    let text = fs::read_to_string(&ontology_path).unwrap();
    let mut reloaded: Ontology = serde_json::from_str(&text).unwrap();
    assert_eq!(reloaded, ontology);

    let spec: PatchSpec = serde_json::from_str(PATCH_JSON).unwrap();
    let lexicon = ModifierLexicon::builtin();
    let summary = apply_patch(&mut reloaded, &spec, &lexicon);

    // "GARLIC" collides case-insensitively with the existing "garlic".
    let garlic = reloaded.get("garlic-cloves").unwrap();
    assert_eq!(
        garlic.surface_forms,
        vec!["Garlic Cloves", "garlic", "garlic clove"]
    );

    // Unknown slug skipped, rest applied.
    assert_eq!(summary.unknown_slugs, vec!["no-such-slug"]);
    assert!(!reloaded.contains("no-such-slug"));

    // New entry enriched and inserted.
    let flour = reloaded.get("flour").unwrap();
    assert_eq!(flour.fdc.data_type.as_deref(), Some("foundation"));
    assert_eq!(flour.tokens, vec!["allpurpose", "flour"]);

    // Colliding new entry only appended genuinely new forms.
    let salt = reloaded.get("salt").unwrap();
    assert_eq!(salt.display_name, "Salt");
    assert_eq!(salt.fdc.fdc_id, Some(999));
    assert!(salt.surface_forms.contains(&"seasoned salt".to_string()));
    assert_eq!(summary.entries_merged, 1);

    // Second application over a fresh disk round trip changes nothing.
    fs::write(
        &ontology_path,
        serde_json::to_string_pretty(&reloaded).unwrap(),
    )
    .unwrap();
    let mut again: Ontology =
        serde_json::from_str(&fs::read_to_string(&ontology_path).unwrap()).unwrap();
    let second = apply_patch(&mut again, &spec, &lexicon);
    assert_eq!(second.forms_added, 0);
    assert_eq!(second.entries_added, 0);
    assert_eq!(again, reloaded);
}

#[test]
fn malformed_input_fails_before_any_output() {
    assert!(load_legacy("not json").is_err());
    assert!(load_curated(r#"[{"display_name": "missing slug"}]"#).is_err());
    assert!(serde_json::from_str::<PatchSpec>(r#"{"surfaceForms": []}"#).is_err());
}
