//! Bounded retry for rate-limited operations.
//!
//! [`RetryPolicy`] configures the attempt ceiling and backoff; [`with_retry`]
//! is the combinator that runs an action under it. Only errors the caller's
//! predicate marks as retryable are retried; everything else (and retry
//! exhaustion) propagates the underlying error unmodified.

use std::future::Future;
use std::time::Duration;

// ---------------------------------------------------------------------------
// RetryPolicy
// ---------------------------------------------------------------------------

/// Configuration for automatic retries of rate-limited errors.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Maximum number of attempts (including the first try).
    pub max_attempts: u32,
    /// Base delay; attempt `n` waits `n * base_delay` before retrying.
    pub base_delay: Duration,
    /// Cap on the delay between retries.
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: config::constants::MAX_ATTEMPTS,
            base_delay: Duration::from_millis(config::constants::RETRY_BASE_DELAY_MS),
            max_delay: Duration::from_millis(config::constants::RETRY_MAX_DELAY_MS),
        }
    }
}

impl RetryPolicy {
    /// A policy that never retries.
    pub const fn no_retry() -> Self {
        Self {
            max_attempts: 1,
            base_delay: Duration::ZERO,
            max_delay: Duration::ZERO,
        }
    }

    /// Compute the backoff duration after the given failed attempt
    /// (1-indexed). Scales linearly and never decreases.
    pub fn backoff_for(&self, attempt: u32) -> Duration {
        self.base_delay.saturating_mul(attempt).min(self.max_delay)
    }
}

// ---------------------------------------------------------------------------
// with_retry
// ---------------------------------------------------------------------------

/// Run `action` under `policy`, retrying while `retryable` approves.
///
/// The action receives the 1-indexed attempt number. Returns the first
/// success or the last failure.
pub async fn with_retry<T, E, F, Fut, R>(
    policy: &RetryPolicy,
    retryable: R,
    mut action: F,
) -> Result<T, E>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    R: Fn(&E) -> bool,
{
    let mut attempt = 0u32;
    loop {
        attempt += 1;
        match action(attempt).await {
            Ok(value) => return Ok(value),
            Err(e) if attempt < policy.max_attempts && retryable(&e) => {
                tokio::time::sleep(policy.backoff_for(attempt)).await;
            }
            Err(e) => return Err(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    fn fast_policy() -> RetryPolicy {
        RetryPolicy {
            max_attempts: 3,
            base_delay: Duration::ZERO,
            max_delay: Duration::ZERO,
        }
    }

    #[tokio::test]
    async fn first_success_needs_one_attempt() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();
        let result: Result<u32, &str> = with_retry(&fast_policy(), |_| true, |attempt| {
            counter.fetch_add(1, Ordering::SeqCst);
            async move { Ok(attempt) }
        })
        .await;
        assert_eq!(result.unwrap(), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn retries_stop_at_the_ceiling() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();
        let result: Result<(), &str> = with_retry(&fast_policy(), |_| true, |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            async { Err("rate limited") }
        })
        .await;
        assert_eq!(result.unwrap_err(), "rate limited");
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn non_retryable_error_propagates_immediately() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();
        let result: Result<(), &str> = with_retry(&fast_policy(), |_| false, |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            async { Err("fatal") }
        })
        .await;
        assert_eq!(result.unwrap_err(), "fatal");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn recovers_after_transient_failure() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();
        let result: Result<u32, &str> = with_retry(&fast_policy(), |_| true, |attempt| {
            counter.fetch_add(1, Ordering::SeqCst);
            async move {
                if attempt < 2 {
                    Err("rate limited")
                } else {
                    Ok(attempt)
                }
            }
        })
        .await;
        assert_eq!(result.unwrap(), 2);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn backoff_is_linear_and_non_decreasing() {
        let policy = RetryPolicy {
            max_attempts: 3,
            base_delay: Duration::from_millis(1_000),
            max_delay: Duration::from_millis(10_000),
        };
        assert_eq!(policy.backoff_for(1), Duration::from_millis(1_000));
        assert_eq!(policy.backoff_for(2), Duration::from_millis(2_000));
        assert!(policy.backoff_for(2) >= policy.backoff_for(1));
        assert!(policy.backoff_for(3) >= policy.backoff_for(2));
    }

    #[test]
    fn backoff_respects_the_cap() {
        let policy = RetryPolicy {
            max_attempts: 100,
            base_delay: Duration::from_millis(1_000),
            max_delay: Duration::from_millis(2_500),
        };
        assert_eq!(policy.backoff_for(50), Duration::from_millis(2_500));
    }

    #[test]
    fn no_retry_policy_allows_one_attempt() {
        assert_eq!(RetryPolicy::no_retry().max_attempts, 1);
    }

    #[test]
    fn default_policy_matches_constants() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts, 3);
        assert_eq!(policy.base_delay, Duration::from_millis(1_000));
    }
}
