//! Certificate payload model
//!
//! A payload is the semantic content of a credential: a flat mapping of
//! field name to string or number. It is immutable after issuance; any
//! correction means issuing a new certificate and revoking the old one.
//!
//! Payloads arrive from untrusted transports as arbitrary JSON. The
//! conversion in [`Payload::from_json`] is the boundary where shape is
//! enforced: only string and finite-number values pass, everything else
//! is rejected as `MalformedPayload` before entering the core.

use crate::error::{CredsealError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single payload field value
///
/// Untagged so payloads serialize as plain JSON objects
/// (`{"name": "Asha Rao", "year": "2024"}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Textual value
    Text(String),
    /// Numeric value (decimal text form, locale-free)
    Number(serde_json::Number),
}

impl FieldValue {
    /// Get the value as a string slice, if textual
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s.as_str()),
            FieldValue::Number(_) => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Number(serde_json::Number::from(n))
    }
}

/// The semantic content of a certificate
///
/// Field insertion order is deliberately not part of the model: two
/// payloads with identical field/value sets are the same payload, and
/// canonicalization produces identical bytes for both.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Payload(HashMap<String, FieldValue>);

impl Payload {
    /// Create a new empty payload
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Add a field (builder pattern)
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Insert a field
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Get a field value by name
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.0.get(key)
    }

    /// Check if a field exists
    pub fn contains_field(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over field name/value pairs (unspecified order)
    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.0.iter()
    }

    /// Convert an untrusted JSON object into a payload
    ///
    /// Rejects null, boolean, array and nested-object values: the
    /// canonical encoding covers strings and numbers only, and anything
    /// else must fail loudly here rather than deep in the pipeline.
    pub fn from_json(map: serde_json::Map<String, serde_json::Value>) -> Result<Self> {
        let mut fields = HashMap::with_capacity(map.len());
        for (key, value) in map {
            let field = match value {
                serde_json::Value::String(s) => FieldValue::Text(s),
                serde_json::Value::Number(n) => FieldValue::Number(n),
                other => {
                    return Err(CredsealError::MalformedPayload(format!(
                        "field '{}' has unsupported type ({})",
                        key,
                        json_type_name(&other)
                    )));
                }
            };
            fields.insert(key, field);
        }
        Ok(Self(fields))
    }

    /// Validate that all required fields are present
    ///
    /// Returns `MissingField` naming the first absent field.
    pub fn require_fields(&self, required: &[&str]) -> Result<()> {
        for field in required {
            if !self.0.contains_key(*field) {
                return Err(CredsealError::MissingField((*field).to_string()));
            }
        }
        Ok(())
    }

    /// Render as a JSON object for transport responses
    pub fn to_json(&self) -> serde_json::Map<String, serde_json::Value> {
        self.0
            .iter()
            .map(|(k, v)| {
                let value = match v {
                    FieldValue::Text(s) => serde_json::Value::String(s.clone()),
                    FieldValue::Number(n) => serde_json::Value::Number(n.clone()),
                };
                (k.clone(), value)
            })
            .collect()
    }
}

impl From<HashMap<String, FieldValue>> for Payload {
    fn from(map: HashMap<String, FieldValue>) -> Self {
        Self(map)
    }
}

impl IntoIterator for Payload {
    type Item = (String, FieldValue);
    type IntoIter = std::collections::hash_map::IntoIter<String, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_builder() {
        let payload = Payload::new()
            .with("name", "Asha Rao")
            .with("institution", "X University")
            .with("year", "2024");

        assert_eq!(payload.get("name").and_then(|v| v.as_text()), Some("Asha Rao"));
        assert_eq!(payload.len(), 3);
        assert!(payload.contains_field("institution"));
        assert!(!payload.contains_field("score"));
    }

    #[test]
    fn test_from_json_accepts_strings_and_numbers() {
        let map = serde_json::json!({
            "name": "Asha Rao",
            "year": 2024,
            "score": 8.7
        });
        let map = map.as_object().unwrap().clone();

        let payload = Payload::from_json(map).unwrap();
        assert_eq!(payload.len(), 3);
        assert_eq!(payload.get("name").and_then(|v| v.as_text()), Some("Asha Rao"));
    }

    #[test]
    fn test_from_json_rejects_nested_object() {
        let map = serde_json::json!({
            "name": "Asha Rao",
            "scores": {"sem1": 8.7}
        });
        let map = map.as_object().unwrap().clone();

        let result = Payload::from_json(map);
        assert!(matches!(result, Err(CredsealError::MalformedPayload(_))));
    }

    #[test]
    fn test_from_json_rejects_null_bool_and_array() {
        for value in [
            serde_json::json!({"f": null}),
            serde_json::json!({"f": true}),
            serde_json::json!({"f": [1, 2]}),
        ] {
            let map = value.as_object().unwrap().clone();
            assert!(matches!(
                Payload::from_json(map),
                Err(CredsealError::MalformedPayload(_))
            ));
        }
    }

    #[test]
    fn test_require_fields_reports_first_missing() {
        let payload = Payload::new().with("name", "Asha Rao");

        let result = payload.require_fields(&["name", "institution", "program"]);
        match result {
            Err(CredsealError::MissingField(field)) => assert_eq!(field, "institution"),
            other => panic!("expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_require_fields_all_present() {
        let payload = Payload::new()
            .with("name", "Asha Rao")
            .with("institution", "X University");

        assert!(payload.require_fields(&["name", "institution"]).is_ok());
    }

    #[test]
    fn test_to_json_round_trip() {
        let payload = Payload::new().with("name", "Asha Rao").with("year", 2024i64);

        let map = payload.to_json();
        let restored = Payload::from_json(map).unwrap();

        assert_eq!(restored, payload);
    }
}
