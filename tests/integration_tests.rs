//! End-to-end checks over the standard catalog: registration invariants,
//! dispatch through the registry and notepad persistence.

use std::collections::HashSet;

use toolbox_workspace::tools::standard::shared_store;
use toolbox_workspace::{
    Category, FileMemory, InMemoryMemory, SITE_NAME, StandardToolsConfig, Tool, ToolCall, ToolRegistry,
    standard_registry,
};

fn registry() -> toolbox_workspace::InMemoryToolRegistry {
    standard_registry(StandardToolsConfig::default()).expect("standard catalog registers")
}

fn run(registry: &impl ToolRegistry, slug: &str, input: &str) -> serde_json::Value {
    registry
        .dispatch(ToolCall::new(slug, input).expect("valid slug"))
        .expect("tool registered")
        .output_json()
        .expect("json output")
}

#[test]
fn every_tool_answers_to_its_slug() {
    let registry = registry();
    assert_eq!(registry.len(), 48);

    let mut seen = HashSet::new();
    for descriptor in registry.descriptors() {
        let slug = descriptor.slug.as_str();
        assert!(seen.insert(slug), "duplicate slug {slug}");

        let tool = registry.get_tool(slug).expect("implementation registered");
        assert_eq!(tool.name(), slug);
        assert_eq!(
            descriptor.page_title(),
            format!("{} - {}", descriptor.name, SITE_NAME)
        );
        assert!(!descriptor.description.is_empty(), "{slug} has no description");
    }
}

#[test]
fn categories_group_the_whole_catalog() {
    let registry = registry();
    let groups = registry.tools_by_category();

    let total: usize = groups.values().map(Vec::len).sum();
    assert_eq!(total, registry.len());

    let labels: Vec<&str> = groups.keys().map(Category::label).collect();
    let mut sorted = labels.clone();
    sorted.sort_by_key(|label| label.to_lowercase());
    assert_eq!(labels, sorted);

    for category in groups.keys() {
        assert_eq!(Category::from_label(category.label()), Some(*category));
    }
}

#[test]
fn search_ignores_case_and_blank_queries() {
    let registry = registry();
    let upper: Vec<&str> = registry.search("BASE64").iter().map(|d| d.slug.as_str()).collect();
    let lower: Vec<&str> = registry.search("base64").iter().map(|d| d.slug.as_str()).collect();
    assert_eq!(upper, lower);
    assert!(lower.contains(&"base64-encoder"));
    assert!(lower.contains(&"base64-decoder"));

    assert_eq!(registry.search("   ").len(), registry.len());
    assert!(registry.search("zzz-no-such-tool").is_empty());
}

#[test]
fn registry_rejects_unknown_and_malformed_slugs() {
    let registry = registry();
    assert!(registry.get_tool_by_slug("youtube-to-mp3-converter").is_none());
    assert!(registry.get_tool_by_slug("Word Counter").is_none());
    assert!(ToolCall::new("../etc/passwd", "").is_err());
}

#[test]
fn plain_text_and_options_object_are_equivalent() {
    let registry = registry();
    let plain = run(&registry, "word-counter", "one two three");
    let object = run(&registry, "word-counter", r#"{"text":"one two three"}"#);
    assert_eq!(plain, object);
    assert_eq!(plain["words"], 3);
}

#[test]
fn invalid_input_is_reported_not_panicked() {
    let registry = registry();
    let result = registry
        .dispatch(ToolCall::new("json-formatter", "{not json").expect("valid slug"))
        .expect("tool registered");
    assert!(result.is_failure());
    assert!(
        result
            .failure_reason()
            .expect("failure reason")
            .message()
            .starts_with("Invalid input")
    );
}

#[test]
fn notepad_state_is_shared_within_a_registry() {
    let registry = standard_registry(StandardToolsConfig {
        notepad_store: shared_store(InMemoryMemory::new()),
        ..Default::default()
    })
    .expect("standard catalog registers");

    run(&registry, "online-notepad", r#"{"action":"save","content":"groceries"}"#);
    assert_eq!(run(&registry, "online-notepad", "load")["content"], "groceries");

    assert_eq!(run(&registry, "online-notepad", "clear")["cleared"], true);
    assert_eq!(run(&registry, "online-notepad", "load")["content"], "");
}

#[test]
fn notepad_file_outlives_the_registry() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("notepad.json");

    let first = standard_registry(StandardToolsConfig {
        notepad_store: shared_store(FileMemory::new(&path)),
        ..Default::default()
    })
    .expect("standard catalog registers");
    run(&first, "online-notepad", r#"{"action":"save","content":"remember me"}"#);
    drop(first);

    let second = standard_registry(StandardToolsConfig {
        notepad_store: shared_store(FileMemory::new(&path)),
        ..Default::default()
    })
    .expect("standard catalog registers");
    let note = run(&second, "online-notepad", "load");
    assert_eq!(note["content"], "remember me");
    assert!(note["saved_at"].is_string());
}
