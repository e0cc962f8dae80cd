//! Block Kit Builder Integration Tests
//!
//! End-to-end tests driving the public API the way an application would:
//! build a tree through the `BlockKit` facade, bind callbacks, then render
//! JSON, wire payloads and preview URLs.
//!
//! ## Test Coverage
//! - Four-block message scenario and its exact wire shape
//! - Callback binding through append
//! - Value semantics of the composition API
//! - Emoji detection on plain text, read back through accessors
//! - Child limits enforced through the public composition API
//! - Preview URL escaping of `! ' ( ) *`
//! - Section and image invariants through the public constructors
//! - Rich text decomposition of markdown tokens

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use blockkit_core::utils::strip_nulls;
use blockkit_core::{
    ActionsBlock, Block, BlockKit, Button, Collect, Element, ImageBlock, MarkdownToken, Node,
    PlainText, RichElement, RichSection, RichText, RichTextBlock, SectionBlock, SlackFile,
    ValidationError,
};
use serde_json::{json, Value};

fn has_null(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Array(items) => items.iter().any(has_null),
        Value::Object(map) => map.values().any(has_null),
        _ => false,
    }
}

#[test]
fn test_four_block_message() {
    let mut kit = BlockKit::new();
    let header = kit.header("Hello").unwrap();
    let button = kit
        .button("Click me")
        .unwrap()
        .with_action_id("click_me")
        .unwrap();
    let section = kit.section("Hello").unwrap().with_accessory(button).unwrap();
    let divider = kit.divider();
    let closing = kit.section("Hello").unwrap();

    kit.append([
        Block::from(header),
        Block::from(section),
        Block::from(divider),
        Block::from(closing),
    ])
    .unwrap();

    let wire = kit.to_wire().unwrap();
    let blocks = wire.as_array().unwrap();
    assert_eq!(blocks.len(), 4);

    let types: Vec<&str> = blocks.iter().map(|b| b["type"].as_str().unwrap()).collect();
    assert_eq!(types, vec!["header", "section", "divider", "section"]);
    assert!(!has_null(&wire));

    assert_eq!(
        blocks[1],
        json!({
            "type": "section",
            "text": {"type": "plain_text", "text": "Hello", "emoji": false},
            "accessory": {
                "type": "button",
                "text": {"type": "plain_text", "text": "Click me", "emoji": false},
                "action_id": "click_me"
            },
            "expand": false
        })
    );

    let parsed: Value = serde_json::from_str(&kit.to_json().unwrap()).unwrap();
    assert_eq!(parsed["blocks"], wire);
}

#[test]
fn test_bound_button_resolves_to_same_callback() {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);

    let mut kit = BlockKit::new();
    let bound = kit
        .button("Approve")
        .unwrap()
        .with_action_id("approve")
        .unwrap()
        .on_click(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
    let unbound = kit.button("Later").unwrap().with_action_id("later").unwrap();

    let actions = kit
        .actions()
        .with_children(vec![Element::from(bound), Element::from(unbound)])
        .unwrap();
    kit.push(actions).unwrap();

    let callback = kit.resolve_action("approve").unwrap();
    callback();
    callback();
    assert_eq!(hits.load(Ordering::SeqCst), 2);

    assert!(!kit.registry().contains("later"));
    assert_eq!(kit.registry().len(), 1);
}

#[test]
fn test_bound_callback_is_shared_not_copied() {
    let shared: blockkit_core::Callback = Arc::new(|| {});
    let button = Button::new("Go")
        .unwrap()
        .with_action_id("go")
        .unwrap()
        .with_callback(Arc::clone(&shared));

    let mut kit = BlockKit::new();
    kit.push(SectionBlock::create("x").unwrap().with_accessory(button).unwrap())
        .unwrap();

    let resolved = kit.resolve_action("go").unwrap();
    assert!(Arc::ptr_eq(&resolved, &shared));
}

#[test]
fn test_composition_keeps_order_and_receiver() {
    let empty = ActionsBlock::new();
    let a = Button::new("a").unwrap().with_action_id("a").unwrap();
    let b = Button::new("b").unwrap().with_action_id("b").unwrap();
    let c = Button::new("c").unwrap().with_action_id("c").unwrap();

    let composed = empty.with_children(vec![a, b, c]).unwrap();

    let ids: Vec<Value> = composed.to_mapping().unwrap()["elements"]
        .as_array()
        .unwrap()
        .iter()
        .map(|element| element["action_id"].clone())
        .collect();
    assert_eq!(ids, vec![json!("a"), json!("b"), json!("c")]);
    assert!(empty.children().is_empty());
}

#[test]
fn test_emoji_detection() {
    assert!(!PlainText::new("Hello").unwrap().emoji());
    assert!(PlainText::new("Hello 🎉").unwrap().emoji());

    let text = PlainText::new("Party 🎉").unwrap();
    assert_eq!(text.text(), "Party 🎉");
    assert_eq!(text.to_wire().unwrap()["emoji"], true);
}

#[test]
fn test_limits_hold_through_public_api() {
    let buttons: Vec<Button> = (0..31)
        .map(|i| Button::new(format!("B{}", i)).unwrap())
        .collect();
    let err = ActionsBlock::new().with_children(buttons).unwrap_err();
    assert!(err.is_length());

    let section = SectionBlock::create("Hello").unwrap();
    assert!(section.text().is_some());
    assert!(section.fields().is_none());
    assert!(!section.expand());
}

#[test]
fn test_preview_url_escapes_reserved_marks() {
    let mut kit = BlockKit::new();
    kit.push(kit.section("Wow! It's (really) *done*").unwrap())
        .unwrap();

    let url = kit.to_preview_url().unwrap();
    assert!(url.starts_with("https://app.slack.com/block-kit-builder/#%7B%22blocks%22"));
    for escaped in ["%21", "%27", "%28", "%29", "%2A"] {
        assert!(url.contains(escaped), "missing {} in {}", escaped, url);
    }
    for literal in ['!', '\'', '(', ')', '*'] {
        assert!(!url.contains(literal), "literal {} in {}", literal, url);
    }
    assert!(!url.contains("%2a"));
}

#[test]
fn test_preview_url_of_single_node() {
    let header = BlockKit::new().header("Hi").unwrap();
    let url = header.to_preview_url().unwrap();
    assert!(url.starts_with("https://app.slack.com/block-kit-builder/#%7B%22blocks%22%3A%5B%7B"));
    assert!(url.ends_with("%7D%5D%7D"));
}

#[test]
fn test_section_invariants() {
    assert!(SectionBlock::create("text only").is_ok());
    assert!(SectionBlock::from_fields(["a", "b"]).is_ok());

    let both = SectionBlock::create("text").unwrap().with_fields(["a"]);
    assert!(matches!(both, Err(ValidationError::MutuallyExclusive { .. })));

    let neither = SectionBlock::from_fields(Vec::<String>::new());
    assert!(matches!(neither, Err(ValidationError::MissingOneOf { .. })));

    let mut kit = BlockKit::new();
    let cleared = SectionBlock::create("Hello")
        .unwrap()
        .with_fields(Vec::<String>::new())
        .unwrap();
    kit.push(cleared).unwrap();
    let wire = kit.to_wire().unwrap();
    assert!(wire[0].get("fields").is_none());
    assert_eq!(wire[0]["text"]["text"], "Hello");
}

#[test]
fn test_image_invariants() {
    assert!(ImageBlock::new("http://example.com/a.png", "a").is_err());
    assert!(ImageBlock::new("https://example.com/a.png", "a").is_ok());

    let bmp = SlackFile::new("https://files.example.com/a.bmp");
    assert!(ImageBlock::from_slack_file(bmp, "a").is_err());

    let hosted = SlackFile::new("F0123ABC");
    assert!(ImageBlock::from_slack_file(hosted, "a").is_ok());
}

#[test]
fn test_type_is_fixed_by_node() {
    let section = SectionBlock::create("x").unwrap();
    assert_eq!(SectionBlock::TYPE, Some("section"));
    assert_eq!(section.to_mapping().unwrap()["type"], "section");
}

#[test]
fn test_rich_text_decomposes_tokens() {
    let section = RichSection::new()
        .with_children(vec![
            RichText::create("Plain "),
            RichText::create(MarkdownToken::bold(MarkdownToken::italic("loud"))),
            RichText::create(MarkdownToken::link("https://example.com", Some("docs"))),
        ])
        .unwrap();
    let block = RichTextBlock::new().with_child(section).unwrap();

    let wire = block.to_wire().unwrap();
    let elements = &wire["elements"][0]["elements"];
    assert_eq!(elements[0], json!({"type": "text", "text": "Plain "}));
    assert_eq!(
        elements[1],
        json!({
            "type": "text",
            "text": "loud",
            "style": {"bold": true, "italic": true, "strike": false, "code": false}
        })
    );
    assert_eq!(
        elements[2],
        json!({"type": "link", "url": "https://example.com", "text": "docs", "unsafe": false})
    );

    assert!(matches!(RichText::create("x"), RichElement::Text(_)));
}

#[test]
fn test_round_trip_through_json() {
    let mut kit = BlockKit::new();
    kit.push(kit.header("Round trip").unwrap()).unwrap();
    kit.push(kit.section(MarkdownToken::code("x")).unwrap()).unwrap();

    let mapping = strip_nulls(Value::Object(kit.to_mapping().unwrap()));
    let decoded: Value = serde_json::from_str(&kit.to_json().unwrap()).unwrap();
    assert_eq!(decoded, mapping);
}
