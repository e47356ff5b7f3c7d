//! casoon-util-async - Async helpers for casoon-ui-lib
//!
//! Timing and control-flow utilities on top of Tokio: sleeping, deadlines,
//! retry with backoff, debouncing, bounded parallelism and cooperative
//! cancellation.
//!
//! Everything that waits uses `tokio::time`, so tests can run on a paused
//! clock with `#[tokio::test(start_paused = true)]`.

pub mod cancel;
pub mod cancellable;
pub mod debounce;
pub mod debounce_async;
pub mod error;
pub mod parallel;
pub mod retry;
pub mod time;

// Re-exports for convenience
pub use cancel::{CancelController, CancelSignal};
pub use cancellable::{cancellable, Cancellable};
pub use debounce::{debounce, debounce_default, Debounced, DEFAULT_DEBOUNCE};
pub use debounce_async::{debounce_async, DebouncedAsync};
pub use error::{Cancelled, DebounceError, TimeoutError};
pub use parallel::{parallel_limit, DEFAULT_CONCURRENCY};
pub use retry::{backoff_delay, backoff_delay_with, retry, retry_if, RetryOptions};
pub use time::{sleep, timeout, timeout_default, DEFAULT_TIMEOUT_MESSAGE};
