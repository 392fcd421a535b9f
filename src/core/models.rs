//! Core data models for keywords

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Fields of a keyword as returned under `data`.
///
/// The map is kept open: the well-known keys have accessors, anything else
/// the backend sends is preserved untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordFields(Map<String, Value>);

impl KeywordFields {
    /// Wrap an already decoded map
    pub fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Raw value for any key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Translated text
    pub fn translation(&self) -> Option<&str> {
        self.get_str("translation")
    }

    /// Where the keyword is used
    pub fn context(&self) -> Option<&str> {
        self.get_str("context")
    }

    /// Source reference text
    pub fn reference(&self) -> Option<&str> {
        self.get_str("reference")
    }

    /// Note left for translators
    pub fn comment(&self) -> Option<&str> {
        self.get_str("comment")
    }

    /// Creation timestamp as sent by the API
    pub fn created_at(&self) -> Option<&str> {
        self.get_str("createdAt")
    }

    /// Last update timestamp as sent by the API
    pub fn updated_at(&self) -> Option<&str> {
        self.get_str("updatedAt")
    }

    /// `updatedAt` parsed as an RFC 3339 instant, if it is one
    pub fn updated_at_time(&self) -> Option<DateTime<Utc>> {
        self.updated_at()
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// True when the entry carries no fields
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the underlying map
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Unwrap into the underlying map
    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}

/// One keyword entry as returned by the API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordRecord {
    /// Keyword identifier; empty when the API omitted it
    #[serde(default)]
    pub id: String,
    /// Translation and metadata
    #[serde(default)]
    pub data: KeywordFields,
    /// Top-level keys other than `id` and `data`
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl KeywordRecord {
    /// Shortcut for `data.translation()`
    pub fn translation(&self) -> Option<&str> {
        self.data.translation()
    }
}

impl From<Value> for KeywordRecord {
    /// Lenient conversion: never fails, whatever the element looks like.
    fn from(value: Value) -> Self {
        let mut object = match value {
            Value::Object(object) => object,
            _ => return Self::default(),
        };

        let id = match object.remove("id") {
            Some(Value::String(id)) => id,
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        };

        let data = match object.remove("data") {
            Some(Value::Object(map)) => KeywordFields(map),
            _ => KeywordFields::default(),
        };

        Self {
            id,
            data,
            extra: object,
        }
    }
}

/// Filters for a keyword query
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryOptions {
    /// Only return keywords updated after this instant
    pub after_updated_at: Option<DateTime<Utc>>,
}

impl QueryOptions {
    /// Only keywords updated after `after`
    pub fn updated_after(after: DateTime<Utc>) -> Self {
        Self {
            after_updated_at: Some(after),
        }
    }

    /// `afterUpdatedAtStr` value: ISO-8601, millisecond precision, `Z` suffix
    pub fn after_updated_at_param(&self) -> Option<String> {
        self.after_updated_at
            .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}

/// Flatten records into an `id -> translation` map.
///
/// Records with an empty id or no string translation are skipped; when an id
/// repeats, the later record wins.
pub fn translation_map(records: &[KeywordRecord]) -> BTreeMap<String, String> {
    records
        .iter()
        .filter(|record| !record.id.is_empty())
        .filter_map(|record| {
            record
                .translation()
                .map(|translation| (record.id.clone(), translation.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_record_from_well_formed_value() {
        let record = KeywordRecord::from(json!({
            "id": "k1",
            "data": {
                "translation": "Hola",
                "context": "greeting",
                "updatedAt": "2024-01-15T10:30:00.000Z",
                "plural": {"one": "Hola", "other": "Holas"}
            }
        }));

        assert_eq!(record.id, "k1");
        assert_eq!(record.translation(), Some("Hola"));
        assert_eq!(record.data.context(), Some("greeting"));
        assert_eq!(record.data.comment(), None);
        assert_eq!(
            record.data.get("plural"),
            Some(&json!({"one": "Hola", "other": "Holas"}))
        );
        assert_eq!(
            record.data.updated_at_time(),
            Some(Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap())
        );
        assert!(record.extra.is_empty());
    }

    #[test]
    fn test_record_conversion_is_lenient() {
        let missing = KeywordRecord::from(json!({"data": {"translation": "x"}}));
        assert_eq!(missing.id, "");
        assert_eq!(missing.translation(), Some("x"));

        let numeric = KeywordRecord::from(json!({"id": 42, "data": "oops"}));
        assert_eq!(numeric.id, "42");
        assert!(numeric.data.is_empty());

        let scalar = KeywordRecord::from(json!("not a record"));
        assert_eq!(scalar, KeywordRecord::default());
    }

    #[test]
    fn test_record_keeps_unknown_top_level_keys() {
        let record = KeywordRecord::from(json!({"id": "k1", "data": {}, "tags": ["ui"]}));
        assert_eq!(record.extra.get("tags"), Some(&json!(["ui"])));

        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(back, json!({"id": "k1", "data": {}, "tags": ["ui"]}));
    }

    #[test]
    fn test_non_string_translation_is_not_exposed() {
        let record = KeywordRecord::from(json!({"id": "k1", "data": {"translation": 7}}));
        assert_eq!(record.translation(), None);
        assert_eq!(record.data.get("translation"), Some(&json!(7)));
    }

    #[test]
    fn test_after_updated_at_param_format() {
        let options = QueryOptions::updated_after(Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap());
        assert_eq!(
            options.after_updated_at_param().as_deref(),
            Some("2024-01-15T10:30:00.000Z")
        );
        assert_eq!(QueryOptions::default().after_updated_at_param(), None);
    }

    #[test]
    fn test_translation_map() {
        let records: Vec<KeywordRecord> = vec![
            json!({"id": "hello", "data": {"translation": "Hola"}}),
            json!({"id": "bye", "data": {"comment": "no translation yet"}}),
            json!({"data": {"translation": "orphan"}}),
            json!({"id": "hello", "data": {"translation": "Buenas"}}),
        ]
        .into_iter()
        .map(KeywordRecord::from)
        .collect();

        let map = translation_map(&records);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("hello").map(String::as_str), Some("Buenas"));
    }
}
