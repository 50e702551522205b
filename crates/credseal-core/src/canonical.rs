//! Canonical payload serialization
//!
//! The canonical form is the unique byte string a payload is sealed
//! over: field names sorted by their exact string bytes, serialized as
//! compact JSON, encoded UTF-8. It is a pure function of payload
//! content, so two payloads with the same field/value sets in different
//! insertion order canonicalize identically.
//!
//! JSON is used (rather than concatenating field values) because it is
//! delimiter-safe: moving characters between adjacent fields always
//! changes the output.

use crate::error::Result;
use crate::payload::{FieldValue, Payload};
use std::collections::BTreeMap;

/// Serialize a payload into its canonical byte form
///
/// Numbers pass through `serde_json::Number`, which prints a fixed
/// decimal text form regardless of platform or locale.
pub fn canonicalize(payload: &Payload) -> Result<Vec<u8>> {
    // BTreeMap orders keys by byte-wise string comparison
    let sorted: BTreeMap<&String, &FieldValue> = payload.iter().collect();
    let bytes = serde_json::to_vec(&sorted)?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_form_is_order_invariant() {
        let a = Payload::new()
            .with("name", "Asha Rao")
            .with("institution", "X University")
            .with("program", "B.Sc CS")
            .with("year", "2024")
            .with("score", "8.7");

        let b = Payload::new()
            .with("score", "8.7")
            .with("year", "2024")
            .with("program", "B.Sc CS")
            .with("institution", "X University")
            .with("name", "Asha Rao");

        assert_eq!(canonicalize(&a).unwrap(), canonicalize(&b).unwrap());
    }

    #[test]
    fn test_canonical_form_sorts_keys_bytewise() {
        let payload = Payload::new()
            .with("b", "2")
            .with("a", "1")
            .with("Z", "0");

        let bytes = canonicalize(&payload).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        // Uppercase sorts before lowercase in byte order
        assert_eq!(text, r#"{"Z":"0","a":"1","b":"2"}"#);
    }

    #[test]
    fn test_canonical_form_changes_with_any_value() {
        let original = Payload::new().with("name", "Asha Rao").with("score", "8.7");
        let tampered = Payload::new().with("name", "Asha Rao").with("score", "9.9");

        assert_ne!(
            canonicalize(&original).unwrap(),
            canonicalize(&tampered).unwrap()
        );
    }

    #[test]
    fn test_canonical_form_is_delimiter_safe() {
        // Undelimited concatenation would make these two identical
        // ("ab" + "" == "a" + "b"); the structured encoding must not.
        let a = Payload::new().with("first", "ab").with("second", "");
        let b = Payload::new().with("first", "a").with("second", "b");

        assert_ne!(canonicalize(&a).unwrap(), canonicalize(&b).unwrap());
    }

    #[test]
    fn test_canonical_form_distinguishes_number_from_text() {
        let as_text = Payload::new().with("year", "2024");
        let as_number = Payload::new().with("year", 2024i64);

        assert_ne!(
            canonicalize(&as_text).unwrap(),
            canonicalize(&as_number).unwrap()
        );
    }

    #[test]
    fn test_canonical_form_stable_across_calls() {
        let payload = Payload::new()
            .with("name", "Asha Rao")
            .with("score", "8.7");

        let first = canonicalize(&payload).unwrap();
        let second = canonicalize(&payload).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_canonical_form_escapes_string_values() {
        let payload = Payload::new().with("note", "line1\"}{\nline2");

        let bytes = canonicalize(&payload).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        // Braces and quotes inside values must be escaped, not structural
        assert_eq!(text, r#"{"note":"line1\"}{\nline2"}"#);
    }
}
