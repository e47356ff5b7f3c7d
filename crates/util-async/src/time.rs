//! Sleeping and deadlines.

use crate::error::TimeoutError;
use std::future::Future;
use std::panic;
use std::time::Duration;
use tracing::debug;

/// Message used by [`timeout_default`].
pub const DEFAULT_TIMEOUT_MESSAGE: &str = "Operation timed out";

/// Wait for `duration`.
///
/// A zero duration still yields once to the timer.
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// Race `future` against a deadline.
///
/// The future is spawned onto the runtime, so losing the race does not stop
/// it: the work keeps running in the background and its result is discarded.
/// A panic inside the future is propagated to the caller.
///
/// # Errors
///
/// Returns [`TimeoutError`] carrying `message` when `duration` elapses first.
///
/// # Panics
///
/// Panics when called outside a Tokio runtime.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use casoon_util_async::{sleep, timeout};
///
/// # tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap().block_on(async {
/// let fast = timeout(async { 42 }, Duration::from_secs(1), "too slow").await;
/// assert_eq!(fast.unwrap(), 42);
///
/// let slow = timeout(sleep(Duration::from_secs(5)), Duration::from_millis(10), "too slow").await;
/// assert_eq!(slow.unwrap_err().to_string(), "too slow");
/// # });
/// ```
pub async fn timeout<F>(
    future: F,
    duration: Duration,
    message: impl Into<String>,
) -> Result<F::Output, TimeoutError>
where
    F: Future + Send + 'static,
    F::Output: Send + 'static,
{
    let message = message.into();
    let mut handle = tokio::spawn(future);

    tokio::select! {
        biased;
        joined = &mut handle => match joined {
            Ok(output) => Ok(output),
            Err(err) if err.is_panic() => panic::resume_unwind(err.into_panic()),
            // Cancelled by runtime shutdown; the value can never arrive.
            Err(_) => Err(TimeoutError::new(message, duration)),
        },
        _ = tokio::time::sleep(duration) => {
            debug!(after_ms = duration.as_millis() as u64, %message, "deadline elapsed");
            Err(TimeoutError::new(message, duration))
        }
    }
}

/// [`timeout`] with the message "Operation timed out".
///
/// # Errors
///
/// Returns [`TimeoutError`] when `duration` elapses first.
pub async fn timeout_default<F>(future: F, duration: Duration) -> Result<F::Output, TimeoutError>
where
    F: Future + Send + 'static,
    F::Output: Send + 'static,
{
    timeout(future, duration, DEFAULT_TIMEOUT_MESSAGE).await
}
