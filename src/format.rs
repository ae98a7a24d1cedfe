use std::borrow::Cow;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::RenderError;

const INDENT: &[u8] = b"    ";

/// Turns informal single-quoted JSON into the double-quoted form.
pub fn normalize_quotes(text: &str) -> Cow<'_, str> {
    if text.contains('\'') {
        Cow::Owned(text.replace('\'', "\""))
    } else {
        Cow::Borrowed(text)
    }
}

/// Decodes a response body and re-serialises it with sorted keys and a
/// four space indent.
pub fn render_body(bytes: &[u8]) -> Result<String, RenderError> {
    let text = String::from_utf8(bytes.to_vec())?;

    // Valid JSON may carry apostrophes inside strings, so only normalise
    // when the payload does not parse as-is.
    let value = match serde_json::from_str::<serde_json::Value>(&text) {
        Ok(value) => value,
        Err(_) => serde_json::from_str(&normalize_quotes(&text))?,
    };

    to_indented_string(&value)
}

// `Value` objects are backed by a `BTreeMap`, so keys come out sorted.
fn to_indented_string(value: &serde_json::Value) -> Result<String, RenderError> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8(buf)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorts_keys_and_indents_four_spaces() {
        let rendered = render_body(br#"{"type": "Robot", "id": "r1"}"#).unwrap();
        assert_eq!(rendered, "{\n    \"id\": \"r1\",\n    \"type\": \"Robot\"\n}");
    }

    #[test]
    fn test_single_quoted_payload_matches_double_quoted() {
        let single = render_body(b"{'id': 'r1', 'type': 'Robot'}").unwrap();
        let double = render_body(br#"{"id": "r1", "type": "Robot"}"#).unwrap();
        assert_eq!(single, double);
        assert_eq!(single, "{\n    \"id\": \"r1\",\n    \"type\": \"Robot\"\n}");
    }

    #[test]
    fn test_nested_values_are_sorted_at_every_level() {
        let body = br#"{"z": [1, {"b": true, "a": null}], "a": {"y": 2.5, "x": "s"}}"#;
        let expected = "{\n    \"a\": {\n        \"x\": \"s\",\n        \"y\": 2.5\n    },\n    \"z\": [\n        1,\n        {\n            \"a\": null,\n            \"b\": true\n        }\n    ]\n}";
        assert_eq!(render_body(body).unwrap(), expected);
    }

    #[test]
    fn test_numbers_keep_their_source_text() {
        let rendered = render_body(br#"{"n": 12345678901234567890123, "f": 1.5e-7}"#).unwrap();
        assert_eq!(
            rendered,
            "{\n    \"f\": 1.5e-7,\n    \"n\": 12345678901234567890123\n}"
        );
    }

    #[test]
    fn test_empty_containers_stay_compact() {
        assert_eq!(
            render_body(br#"{"list": [], "map": {}}"#).unwrap(),
            "{\n    \"list\": [],\n    \"map\": {}\n}"
        );
    }

    #[test]
    fn test_apostrophe_in_valid_json_is_kept() {
        let rendered = render_body(br#"{"name": "robot's arm"}"#).unwrap();
        assert!(rendered.contains("robot's arm"));
    }

    #[test]
    fn test_scalar_body_is_rendered() {
        assert_eq!(render_body(b"42").unwrap(), "42");
        assert_eq!(render_body(b"'ok'").unwrap(), "\"ok\"");
    }

    #[test]
    fn test_invalid_utf8_is_rejected() {
        let err = render_body(&[0x7b, 0xff, 0xfe, 0x7d]).unwrap_err();
        assert!(matches!(err, RenderError::Utf8(_)));
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        let err = render_body(b"<html>not json</html>").unwrap_err();
        assert!(matches!(err, RenderError::Json(_)));
    }

    #[test]
    fn test_normalize_quotes_borrows_when_nothing_to_replace() {
        assert!(matches!(normalize_quotes(r#"{"a": 1}"#), Cow::Borrowed(_)));
        assert_eq!(normalize_quotes("{'a': 1}"), r#"{"a": 1}"#);
    }
}
