//! Table building and the sequential batch pass over all records.

use crate::client::TezaursClient;
use crate::extract::{FORM_KEYS, wordform_entries};
use crate::morph::{Resolution, parse_tag, resolve_features};
use crate::table::ConjugationTable;
use crate::{records, records::VerbDocument};
use serde_json::{Map, Value};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Resolvers are tried in order; the first one that produces a triple wins.
/// Tag parsing comes first, the feature dictionary is the fallback, and an
/// entry neither can read is skipped silently, leaving its cell empty rather
/// than guessed.
const RESOLVERS: &[fn(&Map<String, Value>) -> Option<Resolution>] =
    &[tag_resolver, feature_resolver];

fn tag_resolver(entry: &Map<String, Value>) -> Option<Resolution> {
    // An empty string under "msd" falls through to "tag".
    let tag = ["msd", "tag"]
        .iter()
        .find_map(|k| entry.get(*k).and_then(Value::as_str).filter(|s| !s.is_empty()))?;
    parse_tag(tag)
}

fn feature_resolver(entry: &Map<String, Value>) -> Option<Resolution> {
    let feats = ["features", "feat"]
        .iter()
        .find_map(|k| entry.get(*k).and_then(Value::as_object).filter(|o| !o.is_empty()))?;
    resolve_features(feats)
}

fn resolve_entry(entry: &Map<String, Value>) -> Option<Resolution> {
    RESOLVERS.iter().find_map(|resolve| resolve(entry))
}

fn surface_form(entry: &Map<String, Value>) -> Option<&str> {
    FORM_KEYS
        .iter()
        .find_map(|k| entry.get(*k).and_then(Value::as_str).filter(|s| !s.is_empty()))
}

/// Build the complete-shape table for one lemma.
///
/// A fetch-level failure is isolated here: it yields an all-empty table with
/// a diagnostic `_note` so the batch can carry on with the next record.
pub async fn build_table(client: &TezaursClient, lemma: &str) -> ConjugationTable {
    let payload = match client.inflections(lemma).await {
        Ok(payload) => payload,
        Err(e) => {
            warn!(lemma, "inflection lookup failed: {}", e);
            return ConjugationTable::failed(format!("API error for '{}': {}", lemma, e));
        }
    };

    let mut table = ConjugationTable::default();
    for entry in wordform_entries(&payload) {
        let Some(form) = surface_form(entry) else {
            continue;
        };
        let Some(resolution) = resolve_entry(entry) else {
            continue;
        };
        if !table.fill_if_empty(resolution, form) {
            debug!(lemma, form, "discarding duplicate form for a filled cell");
        }
    }
    table
}

/// Run the whole batch, strictly sequentially, pausing between lookups.
///
/// Records that already carry a complete `conj` and records with a blank
/// lemma pass through untouched; everything else gets a table merged in as
/// its `conj` field, leaving the rest of the record exactly as it came.
pub async fn fill_records(client: &TezaursClient, doc: &mut VerbDocument, pacing: Duration) {
    let total = doc.records.len();
    let mut looked_up = 0usize;
    let mut skipped_complete = 0usize;
    let mut skipped_blank = 0usize;

    for (i, record) in doc.records.iter_mut().enumerate() {
        let Some(lemma) = records::lemma(record).map(str::to_string) else {
            debug!(index = i, "skipping record without a usable lemma");
            skipped_blank += 1;
            continue;
        };
        if records::has_complete_conjugation(record) {
            debug!(%lemma, "conjugation already complete, leaving untouched");
            skipped_complete += 1;
            continue;
        }

        info!(%lemma, index = i + 1, total, "filling conjugation table");
        let table = build_table(client, &lemma).await;
        if let Value::Object(map) = record {
            let conj = serde_json::to_value(&table).expect("conjugation table serializes");
            map.insert("conj".to_string(), conj);
        }
        looked_up += 1;

        // Be kind to the API.
        tokio::time::sleep(pacing).await;
    }

    info!(
        total,
        looked_up, skipped_complete, skipped_blank, "batch finished"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morph::Tense;
    use serde_json::json;

    fn obj(v: Value) -> Map<String, Value> {
        v.as_object().unwrap().clone()
    }

    #[test]
    fn tag_wins_over_features() {
        // The tag says past 3rd plural; the features disagree. Tag is first
        // in the chain, so it decides.
        let entry = obj(json!({
            "wf": "runāja",
            "msd": "vmis3p",
            "features": {"Laiks": "tagadne", "Persona": "1", "Skaitlis": "vienskaitlis"},
        }));
        let r = resolve_entry(&entry).unwrap();
        assert_eq!(r.tense, Tense::Past);
        assert_eq!(r.slot(), "3p");
    }

    #[test]
    fn empty_msd_falls_through_to_tag_key() {
        let entry = obj(json!({"wf": "runāju", "msd": "", "tag": "vmip1s"}));
        let r = resolve_entry(&entry).unwrap();
        assert_eq!(r.tense, Tense::Present);
        assert_eq!(r.slot(), "1s");
    }

    #[test]
    fn unparseable_tag_falls_back_to_features() {
        let entry = obj(json!({
            "wf": "runāju",
            "msd": "not-a-tag",
            "features": {"Laiks": "tagadne", "Persona": "1", "Skaitlis": "vienskaitlis"},
        }));
        let r = resolve_entry(&entry).unwrap();
        assert_eq!(r.slot(), "1s");
    }

    #[test]
    fn entry_with_neither_annotation_is_skipped() {
        let entry = obj(json!({"wf": "runāt", "gram": {"x": 1}}));
        assert!(resolve_entry(&entry).is_none());
    }

    #[test]
    fn surface_form_accepts_any_known_key_and_rejects_empty() {
        assert_eq!(surface_form(&obj(json!({"wf": "a"}))), Some("a"));
        assert_eq!(surface_form(&obj(json!({"form": "b"}))), Some("b"));
        assert_eq!(surface_form(&obj(json!({"wordform": "c"}))), Some("c"));
        assert_eq!(surface_form(&obj(json!({"wf": ""}))), None);
        assert_eq!(surface_form(&obj(json!({"lemma": "d"}))), None);
    }
}
