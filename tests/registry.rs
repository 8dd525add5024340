//! Tests for the definition registry: catalogs, schema validation, search,
//! favorites, and write-through persistence.
mod common;
use common::*;
use rensa::prelude::*;
use rensa::registry::{CUSTOM_CATALOG_KEY, FileStore};
use std::fs;

#[test]
fn builtin_catalog_loads_at_open() {
    let registry = open_registry();
    assert!(!registry.list_builtin().is_empty());
    assert!(registry.list_custom().is_empty());
    assert_eq!(
        registry.list_all().len(),
        registry.list_builtin().len() + registry.list_custom().len()
    );
    for def in registry.list_builtin() {
        assert_eq!(def.provenance, Provenance::Builtin);
        assert!(def.schema_valid(), "builtin '{}' fails its own schema", def.id);
    }
}

#[test]
fn add_validates_schema() {
    let mut registry = open_registry();

    assert!(registry.add(custom_def("translator", "Translator")).unwrap());

    // Empty required fields are rejected without side effect.
    assert!(!registry.add(AgentDefinition::new("", "X", "I", "#112233")).unwrap());
    assert!(!registry.add(AgentDefinition::new("x", "", "I", "#112233")).unwrap());
    assert!(!registry.add(AgentDefinition::new("x", "X", "", "#112233")).unwrap());

    // Color must be a #RRGGBB hex string.
    assert!(!registry.add(AgentDefinition::new("x", "X", "I", "112233")).unwrap());
    assert!(!registry.add(AgentDefinition::new("x", "X", "I", "#12")).unwrap());
    assert!(!registry.add(AgentDefinition::new("x", "X", "I", "#11223G")).unwrap());

    assert_eq!(registry.list_custom().len(), 1);
}

#[test]
fn add_replaces_existing_custom_entry() {
    let mut registry = open_registry();
    registry.add(custom_def("translator", "Old")).unwrap();
    registry.add(custom_def("translator", "New")).unwrap();

    assert_eq!(registry.list_custom().len(), 1);
    assert_eq!(registry.find_by_id("translator").unwrap().label, "New");
}

#[test]
fn delete_only_touches_custom_catalog() {
    let mut registry = open_registry();
    registry.add(custom_def("translator", "Translator")).unwrap();

    assert!(registry.delete("translator").unwrap());
    assert!(registry.find_by_id("translator").is_none());

    // Built-ins are never removable.
    assert!(!registry.delete("planner").unwrap());
    assert!(registry.find_by_id("planner").is_some());

    // Deleting an unknown id reports absence.
    assert!(!registry.delete("nope").unwrap());
}

#[test]
fn find_by_id_prefers_builtin() {
    let mut registry = open_registry();
    // A custom entry may shadow-write a builtin id, but resolution is
    // builtin-first.
    registry.add(custom_def("planner", "Shadow Planner")).unwrap();
    assert_eq!(registry.find_by_id("planner").unwrap().label, "Planner");
}

#[test]
fn search_is_case_insensitive_with_no_minimum_length() {
    let registry = open_registry();

    let lower = registry.search("qa", SearchScope::All);
    let upper = registry.search("QA", SearchScope::All);
    assert!(!lower.is_empty());
    let lower_ids: Vec<&str> = lower.iter().map(|d| d.id.as_str()).collect();
    let upper_ids: Vec<&str> = upper.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(lower_ids, upper_ids);
    assert!(lower_ids.contains(&"qa"));
}

#[test]
fn empty_query_returns_whole_scope() {
    let mut registry = open_registry();
    registry.add(custom_def("translator", "Translator")).unwrap();

    assert_eq!(
        registry.search("", SearchScope::All).len(),
        registry.list_all().len()
    );
    assert_eq!(registry.search("", SearchScope::Custom).len(), 1);
    assert_eq!(
        registry.search("", SearchScope::Builtin).len(),
        registry.list_builtin().len()
    );
}

#[test]
fn search_covers_category_and_template() {
    let mut registry = open_registry();
    registry
        .add(
            custom_def("translator", "Translator")
                .with_category("Localization")
                .with_prompt_template("Translate the text into French."),
        )
        .unwrap();

    let by_category = registry.search("localization", SearchScope::Custom);
    assert_eq!(by_category.len(), 1);
    let by_template = registry.search("french", SearchScope::Custom);
    assert_eq!(by_template.len(), 1);
}

#[test]
fn favorites_toggle_and_list() {
    let mut registry = open_registry();

    assert!(registry.toggle_favorite("qa").unwrap());
    assert!(registry.is_favorite("qa"));
    assert_eq!(registry.list_favorites().len(), 1);

    assert!(!registry.toggle_favorite("qa").unwrap());
    assert!(!registry.is_favorite("qa"));
    assert!(registry.list_favorites().is_empty());

    // The set only stores ids: favoriting an id with no catalog entry is
    // permitted, it just resolves to nothing when listed.
    assert!(registry.toggle_favorite("ghost").unwrap());
    assert!(registry.is_favorite("ghost"));
    assert!(registry.list_favorites().is_empty());
}

#[test]
fn custom_catalog_persists_across_reopen() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");

    let mut registry = DefinitionRegistry::open(FileStore::new(dir.path())).unwrap();
    registry.add(custom_def("translator", "Translator")).unwrap();
    registry.toggle_favorite("translator").unwrap();
    drop(registry);

    let reopened = DefinitionRegistry::open(FileStore::new(dir.path())).unwrap();
    assert_eq!(reopened.list_custom().len(), 1);
    assert_eq!(reopened.find_by_id("translator").unwrap().label, "Translator");
    assert_eq!(reopened.find_by_id("translator").unwrap().provenance, Provenance::Custom);
    assert!(reopened.is_favorite("translator"));
}

#[test]
fn corrupted_custom_records_are_dropped_at_load() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let payload = r##"[
        {"id": "good", "label": "Good", "icon": "G", "color": "#112233"},
        {"id": "badcolor", "label": "Bad", "icon": "B", "color": "chartreuse"},
        "not even an object"
    ]"##;
    fs::write(
        dir.path().join(format!("{}.json", CUSTOM_CATALOG_KEY)),
        payload,
    )
    .expect("Failed to seed store file");

    let registry = DefinitionRegistry::open(FileStore::new(dir.path())).unwrap();
    assert_eq!(registry.list_custom().len(), 1);
    assert_eq!(registry.list_custom()[0].id, "good");
}

#[test]
fn unparseable_custom_payload_loads_empty() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    fs::write(
        dir.path().join(format!("{}.json", CUSTOM_CATALOG_KEY)),
        "{ this is not json",
    )
    .expect("Failed to seed store file");

    let registry = DefinitionRegistry::open(FileStore::new(dir.path())).unwrap();
    assert!(registry.list_custom().is_empty());
}
