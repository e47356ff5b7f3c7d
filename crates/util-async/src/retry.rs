//! Retry with exponential backoff and jitter.

use crate::time::sleep;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::future::Future;
use std::time::Duration;
use tracing::warn;

/// Backoff settings for [`retry`].
///
/// Deserializes from millisecond fields, with every field optional:
///
/// ```
/// use std::time::Duration;
/// use casoon_util_async::RetryOptions;
///
/// let options: RetryOptions = serde_json::from_str(r#"{"max_attempts": 5, "base_delay_ms": 200}"#).unwrap();
/// assert_eq!(options.max_attempts, 5);
/// assert_eq!(options.base_delay, Duration::from_millis(200));
/// assert_eq!(options.max_delay, Duration::from_secs(10));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryOptions {
    /// Total calls allowed, including the first. Zero behaves like one.
    #[serde(alias = "maxAttempts")]
    pub max_attempts: u32,
    /// Delay before the second attempt; doubles after each failure.
    #[serde(rename = "base_delay_ms", alias = "baseDelay", with = "millis")]
    pub base_delay: Duration,
    /// Upper bound on any single delay, jitter included.
    #[serde(rename = "max_delay_ms", alias = "maxDelay", with = "millis")]
    pub max_delay: Duration,
    /// Random jitter is drawn from `[0, max_jitter)`.
    #[serde(rename = "max_jitter_ms", with = "millis")]
    pub max_jitter: Duration,
}

impl Default for RetryOptions {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(1000),
            max_delay: Duration::from_millis(10_000),
            max_jitter: Duration::from_millis(1000),
        }
    }
}

impl RetryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn with_base_delay(mut self, base_delay: Duration) -> Self {
        self.base_delay = base_delay;
        self
    }

    pub fn with_max_delay(mut self, max_delay: Duration) -> Self {
        self.max_delay = max_delay;
        self
    }

    pub fn with_max_jitter(mut self, max_jitter: Duration) -> Self {
        self.max_jitter = max_jitter;
        self
    }
}

mod millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

/// Delay to wait after failed attempt number `attempt` (1-based).
///
/// `min(base_delay * 2^(attempt - 1) + jitter, max_delay)`.
pub fn backoff_delay(attempt: u32, options: &RetryOptions) -> Duration {
    backoff_delay_with(&mut rand::thread_rng(), attempt, options)
}

/// [`backoff_delay`] drawing jitter from the given generator.
pub fn backoff_delay_with<R: Rng + ?Sized>(
    rng: &mut R,
    attempt: u32,
    options: &RetryOptions,
) -> Duration {
    let exponent = attempt.saturating_sub(1).min(31);
    let exponential = options.base_delay.saturating_mul(1u32 << exponent);
    let jitter = if options.max_jitter.is_zero() {
        Duration::ZERO
    } else {
        rng.gen_range(Duration::ZERO..options.max_jitter)
    };
    exponential.saturating_add(jitter).min(options.max_delay)
}

/// Call `f` until it succeeds or `options.max_attempts` calls have failed.
///
/// # Errors
///
/// Returns the error of the last attempt.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use casoon_util_async::{retry, RetryOptions};
///
/// # tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap().block_on(async {
/// let mut calls = 0;
/// let options = RetryOptions::new().with_base_delay(Duration::from_millis(1)).with_max_jitter(Duration::ZERO);
/// let result = retry(
///     || {
///         calls += 1;
///         let n = calls;
///         async move { if n < 3 { Err("flaky") } else { Ok(n) } }
///     },
///     &options,
/// )
/// .await;
/// assert_eq!(result, Ok(3));
/// # });
/// ```
pub async fn retry<F, Fut, T, E>(f: F, options: &RetryOptions) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    retry_if(f, options, |_| true).await
}

/// [`retry`] that stops early once `should_retry` rejects an error.
///
/// # Errors
///
/// Returns the first rejected error, or the last error once attempts run out.
pub async fn retry_if<F, Fut, T, E, P>(
    mut f: F,
    options: &RetryOptions,
    mut should_retry: P,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
    P: FnMut(&E) -> bool,
{
    let max_attempts = options.max_attempts.max(1);
    let mut attempt = 1;

    loop {
        let err = match f().await {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };

        if attempt >= max_attempts || !should_retry(&err) {
            return Err(err);
        }

        let delay = backoff_delay(attempt, options);
        warn!(
            attempt,
            max_attempts,
            delay_ms = delay.as_millis() as u64,
            error = %err,
            "attempt failed, retrying"
        );
        sleep(delay).await;
        attempt += 1;
    }
}
