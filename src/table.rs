//! The fixed-shape conjugation table written into each verb record.

use crate::morph::{Number, Person, Resolution, Tense};
use serde::{Deserialize, Serialize};

/// One tense row: six person/number cells, empty string = unresolved.
/// Field order fixes the JSON key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenseForms {
    #[serde(rename = "1s", default)]
    pub first_sg: String,
    #[serde(rename = "2s", default)]
    pub second_sg: String,
    #[serde(rename = "3s", default)]
    pub third_sg: String,
    #[serde(rename = "1p", default)]
    pub first_pl: String,
    #[serde(rename = "2p", default)]
    pub second_pl: String,
    #[serde(rename = "3p", default)]
    pub third_pl: String,
}

impl TenseForms {
    fn cell_mut(&mut self, person: Person, number: Number) -> &mut String {
        match (person, number) {
            (Person::First, Number::Singular) => &mut self.first_sg,
            (Person::Second, Number::Singular) => &mut self.second_sg,
            (Person::Third, Number::Singular) => &mut self.third_sg,
            (Person::First, Number::Plural) => &mut self.first_pl,
            (Person::Second, Number::Plural) => &mut self.second_pl,
            (Person::Third, Number::Plural) => &mut self.third_pl,
        }
    }
}

/// Complete-shape table: all nine tense keys always present, plus an optional
/// diagnostic note recorded on fetch-level failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConjugationTable {
    pub present: TenseForms,
    pub past: TenseForms,
    pub future: TenseForms,
    #[serde(rename = "_note", default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ConjugationTable {
    /// Empty table annotated with a diagnostic, for isolated fetch failures.
    pub fn failed(note: String) -> Self {
        Self {
            note: Some(note),
            ..Self::default()
        }
    }

    fn row_mut(&mut self, tense: Tense) -> &mut TenseForms {
        match tense {
            Tense::Present => &mut self.present,
            Tense::Past => &mut self.past,
            Tense::Future => &mut self.future,
        }
    }

    /// Fill a cell unless something already claimed it. The first resolved
    /// form per cell is assumed canonical; later duplicates (participles and
    /// other secondary forms) are discarded.
    pub fn fill_if_empty(&mut self, resolution: Resolution, form: &str) -> bool {
        let cell = self
            .row_mut(resolution.tense)
            .cell_mut(resolution.person, resolution.number);
        if cell.is_empty() {
            *cell = form.to_string();
            true
        } else {
            false
        }
    }
}
