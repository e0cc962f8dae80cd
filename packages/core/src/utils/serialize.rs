//! Wire serialization helpers
//!
//! Everything here works on `serde_json::Value` trees produced by
//! [`Node::to_mapping`](crate::models::Node::to_mapping). Field order is
//! preserved because `serde_json` is built with `preserve_order`.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};

/// Base URL of the Block Kit Builder preview
pub const PREVIEW_BASE_URL: &str = "https://app.slack.com/block-kit-builder/";

/// Characters left untouched by standard percent-encoding that the preview
/// URL still escapes
const EXTRA_ESCAPES: [char; 5] = ['!', '\'', '(', ')', '*'];

/// Recursively remove null object entries and null array items
///
/// Arrays keep their order. Applying this twice yields the same value as
/// applying it once.
///
/// # Examples
///
/// ```rust
/// use blockkit_core::utils::strip_nulls;
/// use serde_json::json;
///
/// let value = json!({"a": null, "b": [1, null, {"c": null}]});
/// assert_eq!(strip_nulls(value), json!({"b": [1, {}]}));
/// ```
pub fn strip_nulls(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(_, value)| !value.is_null())
                .map(|(key, value)| (key, strip_nulls(value)))
                .collect::<Map<String, Value>>(),
        ),
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .filter(|item| !item.is_null())
                .map(strip_nulls)
                .collect(),
        ),
        other => other,
    }
}

/// Encode a value as JSON, compact unless `indent` is given
pub fn to_json_string(value: &Value, indent: Option<usize>) -> Result<String, serde_json::Error> {
    let Some(width) = indent else {
        return serde_json::to_string(value);
    };

    let indent = " ".repeat(width);
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;

    // serde_json only ever writes valid UTF-8
    String::from_utf8(buffer).map_err(|err| {
        <serde_json::Error as serde::ser::Error>::custom(format!("invalid UTF-8: {}", err))
    })
}

/// The `blocks` entry of a mapping if present, otherwise the mapping itself
pub fn wire_payload(mapping: Value) -> Value {
    match mapping {
        Value::Object(mut map) if map.contains_key("blocks") => {
            map.remove("blocks").unwrap_or(Value::Null)
        }
        other => other,
    }
}

/// Wrap a payload under a `blocks` key unless it already is
///
/// A single mapping becomes a one-element list, so `blocks` is always an
/// array when the payload is a node or a list of nodes.
pub fn wrap_blocks(payload: Value) -> Value {
    let blocks = match payload {
        Value::Object(map) if map.contains_key("blocks") => return Value::Object(map),
        Value::Object(map) => Value::Array(vec![Value::Object(map)]),
        other => other,
    };

    let mut map = Map::new();
    map.insert("blocks".to_string(), blocks);
    Value::Object(map)
}

/// Percent-encode a JSON string for the preview URL fragment
///
/// Unreserved characters and `/` stay literal. `! ' ( ) *` are escaped with
/// uppercase hex.
pub fn encode_preview_fragment(json: &str) -> String {
    let encoded = urlencoding::encode(json).replace("%2F", "/");

    let mut fragment = String::with_capacity(encoded.len());
    for ch in encoded.chars() {
        if EXTRA_ESCAPES.contains(&ch) {
            fragment.push_str(&format!("%{:02X}", ch as u32));
        } else {
            fragment.push(ch);
        }
    }
    fragment
}

/// Build a Block Kit Builder preview URL for a null-stripped payload
///
/// `base_url` must end with `/`. A `team_id` is inserted between the base
/// and the fragment.
pub fn preview_url(
    payload: Value,
    base_url: &str,
    team_id: Option<&str>,
) -> Result<String, serde_json::Error> {
    let wrapped = wrap_blocks(strip_nulls(payload));
    let json = serde_json::to_string(&wrapped)?;
    let fragment = encode_preview_fragment(&json);

    Ok(match team_id {
        Some(team) => format!("{}{}#{}", base_url, team, fragment),
        None => format!("{}#{}", base_url, fragment),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strip_nulls_nested() {
        let value = json!({
            "type": "section",
            "text": {"type": "plain_text", "text": "Hi", "emoji": null},
            "fields": null,
            "elements": [null, {"a": null, "b": 1}]
        });
        assert_eq!(
            strip_nulls(value),
            json!({
                "type": "section",
                "text": {"type": "plain_text", "text": "Hi"},
                "elements": [{"b": 1}]
            })
        );
    }

    #[test]
    fn test_strip_nulls_keeps_falsy_values() {
        let value = json!({"flag": false, "count": 0, "text": "", "list": []});
        assert_eq!(strip_nulls(value.clone()), value);
    }

    #[test]
    fn test_strip_nulls_idempotent() {
        let value = json!({"a": [null, {"b": null, "c": [null]}]});
        let once = strip_nulls(value);
        assert_eq!(strip_nulls(once.clone()), once);
    }

    #[test]
    fn test_strip_nulls_preserves_field_order() {
        let value = json!({"type": "button", "text": "x", "url": null, "action_id": "a"});
        let stripped = strip_nulls(value);
        let keys: Vec<&str> = stripped
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec!["type", "text", "action_id"]);
    }

    #[test]
    fn test_to_json_string_compact_and_indented() {
        let value = json!({"a": [1, 2]});
        assert_eq!(to_json_string(&value, None).unwrap(), r#"{"a":[1,2]}"#);
        assert_eq!(
            to_json_string(&value, Some(2)).unwrap(),
            "{\n  \"a\": [\n    1,\n    2\n  ]\n}"
        );
    }

    #[test]
    fn test_wire_payload_unwraps_blocks() {
        assert_eq!(wire_payload(json!({"blocks": [1, 2]})), json!([1, 2]));
        assert_eq!(wire_payload(json!({"type": "divider"})), json!({"type": "divider"}));
        assert_eq!(wire_payload(json!([1])), json!([1]));
    }

    #[test]
    fn test_wrap_blocks() {
        assert_eq!(wrap_blocks(json!([1])), json!({"blocks": [1]}));
        assert_eq!(wrap_blocks(json!({"blocks": []})), json!({"blocks": []}));
        assert_eq!(
            wrap_blocks(json!({"type": "divider"})),
            json!({"blocks": [{"type": "divider"}]})
        );
    }

    #[test]
    fn test_preview_url_of_single_mapping_is_a_list() {
        let url = preview_url(json!({"type": "divider"}), PREVIEW_BASE_URL, None).unwrap();
        assert_eq!(
            url,
            "https://app.slack.com/block-kit-builder/#%7B%22blocks%22%3A%5B%7B%22type%22%3A%22divider%22%7D%5D%7D"
        );
    }

    #[test]
    fn test_encode_preview_fragment_escapes_extra_characters() {
        let fragment = encode_preview_fragment("it's (fun)! *");
        assert_eq!(fragment, "it%27s%20%28fun%29%21%20%2A");
        assert!(!fragment.contains('!'));
        assert!(!fragment.contains('\''));
    }

    #[test]
    fn test_encode_preview_fragment_keeps_slash() {
        assert_eq!(
            encode_preview_fragment("https://example.com/a"),
            "https%3A//example.com/a"
        );
    }

    #[test]
    fn test_preview_url() {
        let url = preview_url(json!([{"type": "divider"}]), PREVIEW_BASE_URL, None).unwrap();
        assert_eq!(
            url,
            "https://app.slack.com/block-kit-builder/#%7B%22blocks%22%3A%5B%7B%22type%22%3A%22divider%22%7D%5D%7D"
        );
    }

    #[test]
    fn test_preview_url_with_team() {
        let url = preview_url(json!({"blocks": []}), PREVIEW_BASE_URL, Some("T123")).unwrap();
        assert!(url.starts_with("https://app.slack.com/block-kit-builder/T123#"));
    }
}
