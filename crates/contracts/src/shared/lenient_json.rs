//! Lenient decoding for columns the backend may store as JSON-encoded text.
//!
//! Some article columns (`keyword_analysis_progress`, `analyzed_keywords`,
//! `selected_keywords`) arrive either as a JSON value or as a string that
//! itself contains JSON. Both shapes decode to the same typed value; anything
//! unparsable decodes as `None` so a single bad column never hides the whole
//! article.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// `deserialize_with` helper for `Option<T>` fields, used together with `#[serde(default)]`.
pub fn json_or_string<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.and_then(decode_value))
}

/// `deserialize_with` helper for numeric fields the backend may send as `null`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decodes an already parsed value, unwrapping one level of string encoding.
pub fn decode_value<T: DeserializeOwned>(value: Value) -> Option<T> {
    match value {
        Value::Null => None,
        Value::String(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return None;
            }
            serde_json::from_str(trimmed).ok()
        }
        other => serde_json::from_value(other).ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "json_or_string")]
        tags: Option<Vec<String>>,
    }

    #[test]
    fn test_plain_json_value() {
        let h: Holder = serde_json::from_str(r#"{"tags": ["a", "b"]}"#).unwrap();
        assert_eq!(h.tags, Some(vec!["a".to_string(), "b".to_string()]));
    }

    #[test]
    fn test_string_encoded_value() {
        let h: Holder = serde_json::from_str(r#"{"tags": "[\"a\", \"b\"]"}"#).unwrap();
        assert_eq!(h.tags, Some(vec!["a".to_string(), "b".to_string()]));
    }

    #[test]
    fn test_missing_null_and_garbage_are_absent() {
        let missing: Holder = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.tags, None);

        let null: Holder = serde_json::from_str(r#"{"tags": null}"#).unwrap();
        assert_eq!(null.tags, None);

        let garbage: Holder = serde_json::from_str(r#"{"tags": "not json"}"#).unwrap();
        assert_eq!(garbage.tags, None);

        let wrong_shape: Holder = serde_json::from_str(r#"{"tags": {"a": 1}}"#).unwrap();
        assert_eq!(wrong_shape.tags, None);
    }

    #[derive(Debug, Deserialize)]
    struct Counter {
        #[serde(default, deserialize_with = "null_as_default")]
        volume: i64,
    }

    #[test]
    fn test_null_number_becomes_default() {
        let c: Counter = serde_json::from_str(r#"{"volume": null}"#).unwrap();
        assert_eq!(c.volume, 0);
        let c: Counter = serde_json::from_str(r#"{"volume": 1500}"#).unwrap();
        assert_eq!(c.volume, 1500);
    }
}
