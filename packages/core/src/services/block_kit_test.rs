//! Tests for the BlockKit builder facade
//!
//! Tests cover:
//! - Append ordering and all-or-nothing validation
//! - Callback registration on append
//! - Shared registries across builders
//! - JSON, wire and preview URL rendering with config

use super::*;
use crate::behaviors::Collect;
use crate::models::Block;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn kinds(kit: &BlockKit) -> Vec<&'static str> {
    kit.blocks().iter().map(Block::kind).collect()
}

#[test]
fn test_append_preserves_order() {
    let mut kit = BlockKit::new();
    let header = kit.header("Title").unwrap();
    let section = kit.section("Body").unwrap();
    kit.append([Block::from(header), Block::from(section)]).unwrap();
    kit.push(kit.divider()).unwrap();

    assert_eq!(kinds(&kit), vec!["header", "section", "divider"]);
    assert_eq!(kit.len(), 3);
}

#[test]
fn test_failed_append_leaves_tree_untouched() {
    let mut kit = BlockKit::new();
    kit.push(kit.divider()).unwrap();

    let button = kit
        .button("Go")
        .unwrap()
        .with_action_id("go")
        .unwrap()
        .on_click(|| {});
    let good = kit.section("Ok").unwrap().with_accessory(button).unwrap();
    let mut bad = kit.header("Title").unwrap();
    bad.text.text = "a".repeat(151);

    let err = kit
        .append([Block::from(good), Block::from(bad)])
        .unwrap_err();
    assert!(err.is_validation());
    assert_eq!(kit.len(), 1);
    assert!(kit.registry().is_empty());
}

#[test]
fn test_append_registers_bound_callbacks() {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);

    let mut kit = BlockKit::new();
    let button = kit
        .button("Approve")
        .unwrap()
        .with_action_id("approve")
        .unwrap()
        .on_click(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
    let actions = kit.actions().with_children(vec![Element::from(button)]).unwrap();
    kit.push(actions).unwrap();

    (kit.resolve_action("approve").unwrap())();
    assert_eq!(hits.load(Ordering::SeqCst), 1);
    assert!(kit.resolve_action("reject").is_err());
}

#[test]
fn test_generated_action_id_is_registered() {
    let mut kit = BlockKit::new();
    let button = kit.button("Go").unwrap().on_click(|| {});
    let action_id = button.action_id.clone().unwrap();

    kit.push(kit.section("Hi").unwrap().with_accessory(button).unwrap())
        .unwrap();
    assert!(kit.registry().contains(&action_id));
}

#[test]
fn test_shared_registry() {
    let registry = ActionRegistry::new();
    let mut first = BlockKit::with_registry(registry.clone());
    let mut second = BlockKit::with_registry(registry.clone());

    let one = first.button("One").unwrap().with_action_id("one").unwrap().on_click(|| {});
    let two = second.button("Two").unwrap().with_action_id("two").unwrap().on_click(|| {});
    first.push(first.section("A").unwrap().with_accessory(one).unwrap()).unwrap();
    second.push(second.section("B").unwrap().with_accessory(two).unwrap()).unwrap();

    assert_eq!(registry.len(), 2);
    assert!(first.resolve_action("two").is_ok());
}

#[test]
fn test_bind_modal() {
    let kit = BlockKit::new();
    let button = kit.button("Go").unwrap().with_action_id("go").unwrap().on_click(|| {});
    let modal = kit
        .modal("Hello")
        .unwrap()
        .with_child(kit.section("Hi").unwrap().with_accessory(button).unwrap())
        .unwrap();

    assert_eq!(kit.bind(&modal), 1);
    assert!(kit.registry().contains("go"));
}

#[test]
fn test_to_wire_is_block_array() {
    let mut kit = BlockKit::new();
    kit.push(kit.divider()).unwrap();

    assert_eq!(kit.to_wire().unwrap(), serde_json::json!([{"type": "divider"}]));
}

#[test]
fn test_to_json_uses_configured_indent() {
    let mut kit = BlockKit::new().with_config(BlockKitConfig::default().with_json_indent(2));
    kit.push(kit.divider()).unwrap();

    assert_eq!(
        kit.to_json().unwrap(),
        "{\n  \"blocks\": [\n    {\n      \"type\": \"divider\"\n    }\n  ]\n}"
    );
}

#[test]
fn test_preview_url() {
    let mut kit = BlockKit::new();
    kit.push(kit.divider()).unwrap();

    assert_eq!(
        kit.to_preview_url().unwrap(),
        "https://app.slack.com/block-kit-builder/#%7B%22blocks%22%3A%5B%7B%22type%22%3A%22divider%22%7D%5D%7D"
    );

    let kit = kit.with_config(BlockKitConfig::default().with_team_id("T123"));
    assert!(kit
        .to_preview_url()
        .unwrap()
        .starts_with("https://app.slack.com/block-kit-builder/T123#%7B"));
}

#[test]
fn test_empty_kit() {
    let kit = BlockKit::new();
    assert!(kit.is_empty());
    assert_eq!(kit.to_json().unwrap(), r#"{"blocks":[]}"#);
}
