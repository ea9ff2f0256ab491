//! Morphological annotation parsers.
//!
//! Tēzaurs annotates each wordform either with a compact MULTEXT-East tag
//! (e.g. `vmip1s`) or with a free-text feature dictionary whose keys and
//! values may be in Latvian. Both parsers resolve to the same triple and
//! refuse to guess: anything unrecognised comes back as `None` and the
//! corresponding table cell stays empty for manual review.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

/// Verb tense, the first axis of the conjugation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tense {
    Present,
    Past,
    Future,
}

/// Grammatical number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Number {
    Singular,
    Plural,
}

/// Grammatical person as the digit the annotation carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Person {
    First,
    Second,
    Third,
}

impl Person {
    fn from_digit(d: char) -> Option<Self> {
        match d {
            '1' => Some(Person::First),
            '2' => Some(Person::Second),
            '3' => Some(Person::Third),
            _ => None,
        }
    }
}

/// One fully resolved (tense, person, number) triple. Resolvers return
/// `Option<Resolution>`; `None` means "unresolved, skip this entry".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub tense: Tense,
    pub person: Person,
    pub number: Number,
}

impl Resolution {
    /// Slot key within a tense row, e.g. `1s` or `2p`.
    pub fn slot(&self) -> &'static str {
        match (self.person, self.number) {
            (Person::First, Number::Singular) => "1s",
            (Person::Second, Number::Singular) => "2s",
            (Person::Third, Number::Singular) => "3s",
            (Person::First, Number::Plural) => "1p",
            (Person::Second, Number::Plural) => "2p",
            (Person::Third, Number::Plural) => "3p",
        }
    }
}

// Typical Latvian verb tag: v m i p 1 s ...
// v = verb, then two lexical-subtype slots we skip, then tense (p/s/f),
// person (1/2/3) and number (s/p). Anchored at the start; anything that
// deviates is left unresolved rather than guessed.
static TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^v..([psf])([123])([sp])").expect("valid tag regex"));

/// Parse a compact MULTEXT-East tag into a resolution, if recognisable.
pub fn parse_tag(tag: &str) -> Option<Resolution> {
    let caps = TAG_RE.captures(tag)?;
    let tense = match caps[1].to_ascii_lowercase().as_str() {
        "p" => Tense::Present,
        "s" => Tense::Past,
        "f" => Tense::Future,
        _ => return None,
    };
    let person = Person::from_digit(caps[2].chars().next()?)?;
    let number = match caps[3].to_ascii_lowercase().as_str() {
        "s" => Number::Singular,
        "p" => Number::Plural,
        _ => return None,
    };
    Some(Resolution {
        tense,
        person,
        number,
    })
}

// An empty value under an earlier key falls through to the next one, the
// same way an empty "msd" falls through to "tag" in the resolver chain.
fn feature_value(feats: &Map<String, Value>, keys: &[&str]) -> String {
    keys.iter()
        .find_map(|k| {
            feats
                .get(*k)
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
        })
        .unwrap_or("")
        .to_lowercase()
}

/// Person scan, quirks included: digits are tried in order 1..3 and a later
/// match overwrites an earlier one, and a tense value that is a bare digit
/// (weird upstream data) also sets the person. Known quirk, kept as-is
/// rather than "fixed".
fn person_scan(tense_val: &str, person_val: &str) -> Option<Person> {
    let mut person = None;
    for d in ['1', '2', '3'] {
        if tense_val == d.to_string() {
            person = Person::from_digit(d);
        }
        if person_val.starts_with(d) || person_val == d.to_string() {
            person = Person::from_digit(d);
        }
    }
    person
}

/// Resolve tense/person/number from a feature dictionary.
///
/// Tēzaurs may label in Latvian; the common keys are Laiks (tense:
/// tagadne/pagātne/nākotne), Persona (person: 1./2./3.), Skaitlis (number:
/// vienskaitlis/daudzskaitlis) and Izteiksme (mood: īstenības = indicative).
/// Only indicative-mood forms are accepted.
pub fn resolve_features(feats: &Map<String, Value>) -> Option<Resolution> {
    let tense_val = feature_value(feats, &["Tense", "Laiks", "tense"]);
    let mood_val = feature_value(feats, &["Mood", "Izteiksme", "mood"]);
    let person_val = feature_value(feats, &["Person", "Persona", "person"]);
    let number_val = feature_value(feats, &["Number", "Skaitlis", "number"]);

    if !mood_val.is_empty() && !mood_val.contains("īsten") && !mood_val.contains("indic") {
        return None;
    }

    // First true condition wins.
    let tense = if tense_val.contains("tagadne") || tense_val.contains("present") {
        Some(Tense::Present)
    } else if tense_val.contains("pag") || tense_val.contains("past") {
        Some(Tense::Past)
    } else if tense_val.contains("nākotn") || tense_val.contains("future") {
        Some(Tense::Future)
    } else {
        None
    };

    let person = person_scan(&tense_val, &person_val);

    let number = if number_val.contains("vien") || number_val.contains("sing") {
        Some(Number::Singular)
    } else if number_val.contains("daudz")
        || number_val.contains("plur")
        || number_val.contains("pl")
    {
        Some(Number::Plural)
    } else {
        None
    };

    match (tense, person, number) {
        (Some(tense), Some(person), Some(number)) => Some(Resolution {
            tense,
            person,
            number,
        }),
        _ => None,
    }
}
