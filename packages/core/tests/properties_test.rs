//! Property Tests
//!
//! Length bounds hold exactly at their limits for every text-bearing
//! constructor, and null-stripping is idempotent and lossless through JSON.

use blockkit_core::utils::strip_nulls;
use blockkit_core::{Button, HeaderBlock, Modal, Node, PlainText, SectionBlock};
use proptest::prelude::*;
use serde_json::{json, Value};

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        "[a-z ]{0,8}".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 64, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,6}", inner, 0..6)
                .prop_map(|map| Value::Object(map.into_iter().collect())),
        ]
    })
}

proptest! {
    #[test]
    fn plain_text_accepts_within_bounds(len in 1usize..=3000) {
        prop_assert!(PlainText::new("x".repeat(len)).is_ok());
    }

    #[test]
    fn plain_text_rejects_over_max(extra in 1usize..50) {
        let err = PlainText::new("x".repeat(3000 + extra)).unwrap_err();
        prop_assert!(err.is_length());
    }

    #[test]
    fn header_bound_is_exact(len in 140usize..160) {
        let result = HeaderBlock::new("h".repeat(len));
        prop_assert_eq!(result.is_ok(), len <= 150);
    }

    #[test]
    fn button_text_bound_is_exact(len in 60usize..90) {
        let result = Button::new("b".repeat(len));
        prop_assert_eq!(result.is_ok(), len <= 75);
    }

    #[test]
    fn modal_title_bound_is_exact(len in 1usize..40) {
        let result = Modal::new("m".repeat(len));
        prop_assert_eq!(result.is_ok(), len <= 24);
    }

    #[test]
    fn length_counts_characters_not_bytes(len in 1usize..=150) {
        prop_assert!(HeaderBlock::new("é".repeat(len)).is_ok());
    }

    #[test]
    fn strip_nulls_is_idempotent(value in arb_json()) {
        let once = strip_nulls(value);
        let twice = strip_nulls(once.clone());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn section_json_round_trips(text in "[a-zA-Z0-9 !'()*]{1,200}") {
        let section = SectionBlock::create(text).unwrap();
        let mapping = strip_nulls(Value::Object(section.to_mapping().unwrap()));
        let decoded: Value = serde_json::from_str(&section.to_json(Some(2)).unwrap()).unwrap();
        prop_assert_eq!(decoded, mapping);
    }
}

#[test]
fn empty_text_is_below_minimum() {
    let err = PlainText::new("").unwrap_err();
    assert_eq!(err.to_string(), "text: Length 0 is less than minimum 1");
}
