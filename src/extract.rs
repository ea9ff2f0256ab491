//! Schema-tolerant extraction of wordform entries from an inflection payload.
//!
//! Tēzaurs responses vary: objects or arrays, nested under different keys,
//! sometimes several levels deep. Rather than deserialize into a fixed shape,
//! walk the raw `serde_json::Value` tree and collect every object that looks
//! like a wordform entry, wherever it sits.

use serde_json::{Map, Value};

/// Container keys commonly seen wrapping wordform lists.
const CONTAINER_KEYS: &[&str] = &[
    "wordforms",
    "inflections",
    "forms",
    "paradigms",
    "analyses",
    "analysis",
];

/// Keys under which a surface form may appear.
pub const FORM_KEYS: &[&str] = &["wf", "form", "wordform"];

/// Keys carrying grammatical annotation directly on an entry.
const GRAM_KEYS: &[&str] = &["msd", "tag", "features", "feat"];

/// Nested objects that may hold the grammatical annotation one level down.
const GRAM_CONTAINER_KEYS: &[&str] = &["tags", "gram"];

/// True if this object carries a surface form plus grammatical information,
/// either directly or inside a nested object one level deep.
pub fn looks_like_wordform(obj: &Map<String, Value>) -> bool {
    if !FORM_KEYS.iter().any(|k| obj.contains_key(*k)) {
        return false;
    }
    if GRAM_KEYS
        .iter()
        .chain(GRAM_CONTAINER_KEYS.iter())
        .any(|k| obj.contains_key(*k))
    {
        return true;
    }
    obj.values().any(|v| {
        v.as_object()
            .is_some_and(|nested| GRAM_KEYS.iter().any(|k| nested.contains_key(*k)))
    })
}

/// Collect every wordform-looking object in the payload, in traversal order.
/// A payload legitimately holds many entries (one per inflected form), so the
/// walk never stops at the first match.
pub fn wordform_entries(payload: &Value) -> Vec<&Map<String, Value>> {
    let mut results = Vec::new();
    walk(payload, &mut results);
    results
}

fn walk<'a>(node: &'a Value, results: &mut Vec<&'a Map<String, Value>>) {
    match node {
        Value::Object(obj) => {
            // Known containers first, then every nested value as a safety
            // net, then the node itself.
            for key in CONTAINER_KEYS {
                if let Some(val) = obj.get(*key) {
                    if val.is_object() || val.is_array() {
                        walk(val, results);
                    }
                }
            }
            for (key, val) in obj {
                if CONTAINER_KEYS.contains(&key.as_str()) {
                    continue;
                }
                if val.is_object() || val.is_array() {
                    walk(val, results);
                }
            }
            if looks_like_wordform(obj) {
                results.push(obj);
            }
        }
        Value::Array(items) => {
            for item in items {
                walk(item, results);
            }
        }
        // Scalars carry nothing.
        _ => {}
    }
}
