//! Fixed configuration for the conjugation filler.
//!
//! There is deliberately no CLI or environment surface here: filenames and the
//! API endpoint are constants, and the retry policy is a declarative value
//! handed to the lookup client. Only the log filter reads the environment.

use std::time::Duration;

/// Base URL of the Tēzaurs inflection endpoint; the percent-encoded lemma is
/// appended to this.
pub const API_BASE: &str = "https://api.tezaurs.lv/v1/inflections/";

pub const INPUT_FILE: &str = "verbs.json";
pub const OUTPUT_FILE: &str = "verbs_conjugated.json";

/// Declarative retry policy for the lookup client.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total attempts, including the first one.
    pub max_attempts: u32,
    /// First backoff delay; doubles on each retry.
    pub backoff_base: Duration,
    /// HTTP statuses worth retrying; everything else fails straight away.
    pub retry_statuses: &'static [u16],
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            backoff_base: Duration::from_millis(600),
            retry_statuses: &[429, 500, 502, 503, 504],
        }
    }
}

/// Runtime configuration snapshot for one filler run.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_base: String,
    pub input_path: String,
    pub output_path: String,
    pub request_timeout: Duration,
    /// Pause between lookups, to be kind to the API.
    pub pacing: Duration,
    pub retry: RetryPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: API_BASE.to_string(),
            input_path: INPUT_FILE.to_string(),
            output_path: OUTPUT_FILE.to_string(),
            request_timeout: Duration::from_secs(20),
            pacing: Duration::from_millis(200),
            retry: RetryPolicy::default(),
        }
    }
}
