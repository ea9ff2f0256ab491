//! Fills Latvian verb records with conjugation tables from the Tēzaurs
//! inflection API.
//!
//! One linear pipeline: load `verbs.json`, fetch inflections for every record
//! that still lacks a complete `conj` table, tolerantly parse whatever shape
//! the API answers with, and write `verbs_conjugated.json` with the gaps
//! filled in. Cells the parsers cannot confidently resolve stay empty for
//! manual review.

pub mod client;
pub mod config;
pub mod error;
pub mod extract;
pub mod fill;
pub mod morph;
pub mod records;
pub mod table;
