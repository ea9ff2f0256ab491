//! Loading and saving the verb record collection.
//!
//! The input is either a bare array of record objects or an object wrapping
//! that array under a `verbs` key; the wrapper shape is detected on load and
//! reproduced on save. Anything else is malformed and aborts the run before
//! any output is written.

use crate::error::{ConjError, Result};
use serde_json::Value;
use std::path::Path;

/// The whole input document: the records plus the wrapper shape they arrived in.
#[derive(Debug, Clone)]
pub struct VerbDocument {
    pub records: Vec<Value>,
    /// True when the input was `{"verbs": [...]}` rather than a bare array.
    pub wrapped: bool,
}

impl VerbDocument {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let data: Value = serde_json::from_str(&raw)?;
        Self::from_value(data)
    }

    fn from_value(data: Value) -> Result<Self> {
        let (records, wrapped) = match data {
            Value::Object(mut obj) if obj.contains_key("verbs") => match obj.remove("verbs") {
                Some(Value::Array(items)) => (items, true),
                _ => {
                    return Err(ConjError::Input {
                        message: "'verbs' field is not an array".to_string(),
                    });
                }
            },
            Value::Array(items) => (items, false),
            other => {
                return Err(ConjError::Input {
                    message: format!(
                        "expected an array of verb records or an object with a 'verbs' array, got {}",
                        json_kind(&other)
                    ),
                });
            }
        };
        Ok(Self { records, wrapped })
    }

    /// Write the document back out, preserving the wrapper shape. 2-space
    /// indentation, non-ASCII characters kept literal, no trailing newline.
    pub fn save(&self, path: &Path) -> Result<()> {
        let output = if self.wrapped {
            let mut wrapper = serde_json::Map::new();
            wrapper.insert("verbs".to_string(), Value::Array(self.records.clone()));
            Value::Object(wrapper)
        } else {
            Value::Array(self.records.clone())
        };
        let rendered = serde_json::to_string_pretty(&output)?;
        std::fs::write(path, rendered)?;
        Ok(())
    }
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// A record is complete iff its `conj` object has all three tense keys.
/// Key presence only; cells inside may well be empty.
pub fn has_complete_conjugation(record: &Value) -> bool {
    record
        .get("conj")
        .and_then(Value::as_object)
        .is_some_and(|conj| ["present", "past", "future"].iter().all(|k| conj.contains_key(*k)))
}

/// The lemma to look up, or `None` for a missing/blank one.
pub fn lemma(record: &Value) -> Option<&str> {
    let lv = record.get("lv")?.as_str()?.trim();
    if lv.is_empty() { None } else { Some(lv) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn detects_wrapped_and_bare_shapes() {
        let doc = VerbDocument::from_value(json!({"verbs": [{"lv": "iet"}]})).unwrap();
        assert!(doc.wrapped);
        assert_eq!(doc.records.len(), 1);

        let doc = VerbDocument::from_value(json!([{"lv": "iet"}, {"lv": "būt"}])).unwrap();
        assert!(!doc.wrapped);
        assert_eq!(doc.records.len(), 2);
    }

    #[test]
    fn rejects_unexpected_top_level_shapes() {
        assert!(VerbDocument::from_value(json!("nope")).is_err());
        assert!(VerbDocument::from_value(json!({"words": []})).is_err());
        assert!(VerbDocument::from_value(json!({"verbs": "not an array"})).is_err());
    }

    #[test]
    fn completeness_is_key_presence_only() {
        // All cells empty still counts as complete.
        assert!(has_complete_conjugation(&json!({
            "lv": "iet",
            "conj": {"present": {}, "past": {}, "future": {}}
        })));
        assert!(!has_complete_conjugation(&json!({
            "lv": "iet",
            "conj": {"present": {}, "past": {}}
        })));
        assert!(!has_complete_conjugation(&json!({"lv": "iet"})));
        assert!(!has_complete_conjugation(&json!({"lv": "iet", "conj": "weird"})));
    }

    #[test]
    fn blank_lemmas_are_none() {
        assert_eq!(lemma(&json!({"lv": "runāt"})), Some("runāt"));
        assert_eq!(lemma(&json!({"lv": "  iet  "})), Some("iet"));
        assert_eq!(lemma(&json!({"lv": ""})), None);
        assert_eq!(lemma(&json!({"lv": "   "})), None);
        assert_eq!(lemma(&json!({"en": "to speak"})), None);
        assert_eq!(lemma(&json!({"lv": 42})), None);
    }

    #[test]
    fn save_round_trips_wrapper_and_unicode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let doc = VerbDocument {
            records: vec![json!({"lv": "runāt"})],
            wrapped: true,
        };
        doc.save(&path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("runāt"), "non-ASCII must stay literal");
        assert!(written.ends_with(']') || written.ends_with('}'), "no trailing newline");
        let reloaded = VerbDocument::load(&path).unwrap();
        assert!(reloaded.wrapped);
        assert_eq!(reloaded.records, doc.records);
    }
}
