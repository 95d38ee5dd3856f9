//! Turning raw model replies into structured results.
//!
//! Models asked for JSON frequently wrap the document in a markdown code
//! fence. [`strip_json_fence`] removes that wrapper; [`parse_structured`]
//! then parses and shape-checks the payload.

use crate::error::CraftError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Characters of the raw reply quoted in parse errors
pub const DEFAULT_SNIPPET_CHARS: usize = 300;

/// Characters of the parsed value quoted when the shape is wrong
pub const RECEIVED_SNIPPET_CHARS: usize = 200;

static FENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^```(\w*)?\s*\n?(.*?)\n?\s*```$").expect("fence pattern is valid")
});

/// Extra structural checks serde cannot express.
///
/// Missing or mistyped fields are already rejected during deserialization;
/// implement this for "present but empty" style requirements.
pub trait ExpectedShape {
    fn check_shape(&self) -> Result<(), String> {
        Ok(())
    }
}

/// Strip a surrounding ```` ```lang ... ``` ```` fence.
///
/// Input that is not entirely wrapped in a fence is returned trimmed but
/// otherwise unchanged.
pub fn strip_json_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    match FENCE.captures(trimmed).and_then(|caps| caps.get(2)) {
        Some(inner) if !inner.as_str().is_empty() => inner.as_str().trim(),
        _ => trimmed,
    }
}

/// Truncate to at most `max` characters without splitting a code point
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Parse a model reply into `T`.
///
/// `context` names the expected result in error messages; `snippet_chars`
/// bounds how much of the raw reply is quoted back.
pub fn parse_structured<T>(raw: &str, context: &str, snippet_chars: usize) -> Result<T, CraftError>
where
    T: DeserializeOwned + ExpectedShape,
{
    let fail = |reason: String| {
        tracing::warn!("failed to parse JSON response for {}: {}", context, reason);
        CraftError::malformed(context, raw, snippet_chars, reason)
    };

    let payload = strip_json_fence(raw);
    let value: serde_json::Value =
        serde_json::from_str(payload).map_err(|e| fail(e.to_string()))?;

    let parsed = T::deserialize(&value).map_err(|e| {
        let received = value.to_string();
        fail(format!(
            "Parsed JSON does not match expected {} structure ({}). Received: {}",
            context,
            e,
            truncate_chars(&received, RECEIVED_SNIPPET_CHARS)
        ))
    })?;

    parsed.check_shape().map_err(|reason| {
        fail(format!(
            "Parsed JSON does not match expected {} structure: {}",
            context, reason
        ))
    })?;

    Ok(parsed)
}

/// Field deserializers for the loosely typed parts of model replies.
///
/// Use with `#[serde(deserialize_with = "...")]`. Required fields still fail
/// when absent; these only relax what a present value may look like.
pub mod lenient {
    use serde::de::{DeserializeOwned, Error as _};
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    fn text(value: Value) -> Option<String> {
        match value {
            Value::Null => None,
            Value::String(s) => Some(s),
            other => Some(other.to_string()),
        }
    }

    /// Strings as-is, other values as their JSON text, null as empty
    pub fn string<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
        Ok(text(Value::deserialize(d)?).unwrap_or_default())
    }

    /// Like [`string`], with null mapped to `None`
    pub fn opt_string<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        Ok(text(Value::deserialize(d)?))
    }

    /// A list whose items may be anything; non-string items keep their JSON
    /// text. Anything other than a list is rejected.
    pub fn list<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
        match Value::deserialize(d)? {
            Value::Array(items) => Ok(items.into_iter().filter_map(text).collect()),
            other => Err(D::Error::custom(format!("expected a list, found {}", other))),
        }
    }

    /// A best-effort list of strings: a bare string is split on commas, and
    /// null or any other value yields an empty list
    pub fn strings<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::Array(items) => items.into_iter().filter_map(text).collect(),
            Value::String(s) => s
                .split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(String::from)
                .collect(),
            _ => Vec::new(),
        })
    }

    /// A best-effort list of records; items that do not fit are skipped
    pub fn records<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        Ok(match Value::deserialize(d)? {
            Value::Array(items) => items
                .into_iter()
                .filter_map(|item| T::deserialize(item).ok())
                .collect(),
            _ => Vec::new(),
        })
    }

    /// The default whenever the value does not fit
    pub fn or_default<'de, D, T>(d: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned + Default,
    {
        Ok(T::deserialize(Value::deserialize(d)?).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Meta {
        meta_title: String,
        meta_description: String,
    }

    impl ExpectedShape for Meta {}

    #[derive(Debug, Deserialize)]
    struct Headline {
        text: String,
    }

    impl ExpectedShape for Headline {
        fn check_shape(&self) -> Result<(), String> {
            if self.text.is_empty() {
                return Err("text is empty".to_string());
            }
            Ok(())
        }
    }

    #[test]
    fn test_strip_fenced_json() {
        let raw = "```json\n{\"a\": 1}\n```";
        assert_eq!(strip_json_fence(raw), "{\"a\": 1}");
    }

    #[test]
    fn test_strip_fence_without_language() {
        assert_eq!(strip_json_fence("  ```\n[1, 2]\n```  "), "[1, 2]");
        assert_eq!(strip_json_fence("```{\"a\":1}```"), "{\"a\":1}");
    }

    #[test]
    fn test_unfenced_passes_through() {
        let raw = "{\"metaTitle\": \"x\"}";
        assert_eq!(strip_json_fence(raw), raw);
        assert_eq!(strip_json_fence("\n  {}  \n"), "{}");
    }

    #[test]
    fn test_empty_fence_left_alone() {
        assert_eq!(strip_json_fence("```json```"), "```json```");
    }

    #[test]
    fn test_partial_fence_left_alone() {
        let raw = "Here you go:\n```json\n{}\n```";
        assert_eq!(strip_json_fence(raw), raw);
    }

    #[test]
    fn test_parse_fenced_payload() {
        let raw = "```json\n{\"metaTitle\": \"Title\", \"metaDescription\": \"Desc\"}\n```";
        let meta: Meta = parse_structured(raw, "meta tags", DEFAULT_SNIPPET_CHARS).unwrap();
        assert_eq!(meta.meta_title, "Title");
        assert_eq!(meta.meta_description, "Desc");
    }

    #[test]
    fn test_missing_field_rejected() {
        let raw = "{\"metaTitle\": \"Title\"}";
        let err = parse_structured::<Meta>(raw, "meta tags", DEFAULT_SNIPPET_CHARS).unwrap_err();

        match &err {
            CraftError::MalformedResponse {
                context, reason, ..
            } => {
                assert_eq!(context, "meta tags");
                assert!(reason.contains("metaDescription"));
                assert!(reason.contains("Received:"));
            }
            other => panic!("Expected MalformedResponse, got {:?}", other),
        }
        assert!(err
            .to_string()
            .starts_with("Failed to parse AI response for meta tags. Raw response snippet: {"));
    }

    #[test]
    fn test_wrong_type_rejected() {
        let raw = "{\"metaTitle\": 3, \"metaDescription\": \"Desc\"}";
        assert!(parse_structured::<Meta>(raw, "meta tags", DEFAULT_SNIPPET_CHARS).is_err());
    }

    #[test]
    fn test_invalid_json_quotes_snippet() {
        let raw = "x".repeat(400);
        let err = parse_structured::<Meta>(&raw, "meta tags", DEFAULT_SNIPPET_CHARS).unwrap_err();
        match &err {
            CraftError::MalformedResponse { snippet, .. } => assert_eq!(snippet.len(), 300),
            other => panic!("Expected MalformedResponse, got {:?}", other),
        }
        assert_eq!(err.raw_response(), Some(raw.as_str()));
    }

    #[test]
    fn test_shape_check_applies() {
        let err = parse_structured::<Headline>("{\"text\": \"\"}", "headline", 10).unwrap_err();
        assert!(matches!(err, CraftError::MalformedResponse { .. }));

        let ok: Headline = parse_structured("{\"text\": \"hi\"}", "headline", 10).unwrap();
        assert_eq!(ok.text, "hi");
    }

    #[test]
    fn test_truncate_chars_respects_code_points() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("abc", 10), "abc");
    }

    #[derive(Debug, Deserialize)]
    struct Loose {
        #[serde(default, deserialize_with = "lenient::string")]
        name: String,
        #[serde(deserialize_with = "lenient::list")]
        notes: Vec<String>,
        #[serde(default, deserialize_with = "lenient::strings")]
        tags: Vec<String>,
    }

    impl ExpectedShape for Loose {}

    #[test]
    fn test_lenient_fields() {
        let raw = r#"{"name": 7, "notes": ["plain", {"point": "nested"}, null], "tags": "ai, marketing ,"}"#;
        let loose: Loose = parse_structured(raw, "loose", DEFAULT_SNIPPET_CHARS).unwrap();
        assert_eq!(loose.name, "7");
        assert_eq!(loose.notes, vec!["plain", r#"{"point":"nested"}"#]);
        assert_eq!(loose.tags, vec!["ai", "marketing"]);

        let loose: Loose =
            parse_structured(r#"{"name": null, "notes": [], "tags": null}"#, "loose", 10).unwrap();
        assert!(loose.name.is_empty());
        assert!(loose.tags.is_empty());
    }

    #[test]
    fn test_lenient_list_still_requires_a_list() {
        let err = parse_structured::<Loose>(r#"{"notes": "one"}"#, "loose", 10).unwrap_err();
        assert!(matches!(err, CraftError::MalformedResponse { .. }));
        assert!(parse_structured::<Loose>(r#"{"name": "x"}"#, "loose", 10).is_err());
    }
}
