//! HTTP client for the Tēzaurs inflection lookup.

use crate::config::{Config, RetryPolicy};
use crate::error::{ConjError, Result};
use serde_json::Value;
use tracing::{debug, warn};

/// Thin wrapper over one long-lived `reqwest::Client`. The client is plain
/// read-only configuration (pooling, timeout); all requests are idempotent
/// GETs, so retrying them is safe.
pub struct TezaursClient {
    http: reqwest::Client,
    base_url: String,
    retry: RetryPolicy,
}

impl TezaursClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ConjError::Lookup {
                message: format!("failed to build HTTP client: {}", e),
            })?;
        Ok(Self {
            http,
            base_url: config.api_base.clone(),
            retry: config.retry.clone(),
        })
    }

    /// Fetch the raw inflection payload for one lemma.
    ///
    /// Transport errors and retryable statuses (429 and the 5xx gateway
    /// family) back off exponentially up to `max_attempts`; any other
    /// non-success status and a malformed JSON body fail immediately.
    pub async fn inflections(&self, lemma: &str) -> Result<Value> {
        let url = lookup_url(&self.base_url, lemma);
        let mut last_err = None;

        for attempt in 0..self.retry.max_attempts {
            if attempt > 0 {
                let delay = self.retry.backoff_base * (1u32 << (attempt - 1));
                debug!(lemma, attempt, ?delay, "retrying inflection lookup");
                tokio::time::sleep(delay).await;
            }

            let response = match self.http.get(&url).send().await {
                Ok(resp) => resp,
                Err(e) => {
                    warn!(lemma, attempt, "inflection request failed: {}", e);
                    last_err = Some(ConjError::from(e));
                    continue;
                }
            };

            let status = response.status();
            if self.retry.retry_statuses.contains(&status.as_u16()) {
                warn!(lemma, attempt, %status, "retryable status from inflection API");
                last_err = Some(ConjError::Lookup {
                    message: format!("inflection API returned {}", status),
                });
                continue;
            }
            if !status.is_success() {
                return Err(ConjError::Lookup {
                    message: format!("inflection API returned {}", status),
                });
            }

            return response.json::<Value>().await.map_err(|e| ConjError::Lookup {
                message: format!("malformed JSON from inflection API: {}", e),
            });
        }

        Err(last_err.unwrap_or_else(|| ConjError::Lookup {
            message: "inflection lookup failed with no attempts made".to_string(),
        }))
    }
}

fn lookup_url(base: &str, lemma: &str) -> String {
    format!("{}{}", base, urlencoding::encode(lemma))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lemma_is_percent_encoded_into_the_path() {
        assert_eq!(
            lookup_url("https://api.tezaurs.lv/v1/inflections/", "runāt"),
            "https://api.tezaurs.lv/v1/inflections/run%C4%81t"
        );
        // Reserved characters must not survive into the path either.
        assert_eq!(lookup_url("http://x/", "a/b c"), "http://x/a%2Fb%20c");
    }
}
