//! Retry logic for Mixcloud API requests.
//!
//! A single-URL fetch is retried with exponential backoff until it
//! succeeds or the attempt budget is spent. Rate-limit responses that
//! carry an upstream-suggested wait use that wait instead of the
//! computed backoff.

use std::future::Future;
use std::time::Duration;

use mixcloud_api::Error;
use tokio::time::sleep;

/// Attempts per URL, including the first request.
const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Delay before the first retry; doubles on each subsequent retry.
const DEFAULT_BASE_BACKOFF: Duration = Duration::from_secs(1);

/// Backoff policy for a single-URL fetch.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Total attempts, including the first. Treated as at least 1.
    pub max_attempts: u32,
    /// Wait before retry `n` (0-based) is `base_backoff * 2^n`.
    pub base_backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            base_backoff: DEFAULT_BASE_BACKOFF,
        }
    }
}

impl RetryPolicy {
    fn backoff_for(&self, retry: u32) -> Duration {
        // Capped shift keeps the multiplier from overflowing on
        // pathological attempt counts.
        self.base_backoff * (1u32 << retry.min(16))
    }
}

/// Runs `operation` until it succeeds or `policy.max_attempts` is spent.
///
/// Every error class is retried: rate limits, other HTTP failures,
/// network errors, and malformed bodies. The wait between attempts is
/// the exponential backoff, except that a rate-limit error carrying an
/// upstream-suggested delay waits that long instead. Once the budget is
/// exhausted the last error is returned.
pub async fn with_retry<F, Fut, T>(policy: &RetryPolicy, operation: F) -> Result<T, Error>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, Error>>,
{
    let attempts = policy.max_attempts.max(1);
    let mut attempt = 0;
    loop {
        match operation().await {
            Ok(val) => return Ok(val),
            Err(err) => {
                attempt += 1;
                if attempt >= attempts {
                    tracing::warn!("Giving up after {} attempts: {}", attempt, err);
                    return Err(err);
                }
                let wait = match &err {
                    Error::RateLimited {
                        retry_after: Some(suggested),
                    } => *suggested,
                    _ => policy.backoff_for(attempt - 1),
                };
                tracing::warn!(
                    "Attempt {} failed ({}), retrying in {:?}",
                    attempt,
                    err,
                    wait
                );
                sleep(wait).await;
            }
        }
    }
}
