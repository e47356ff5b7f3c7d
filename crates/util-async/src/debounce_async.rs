//! Debouncing for async functions that return a result.

use crate::cancel::{CancelController, CancelSignal};
use crate::error::DebounceError;
use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::time::Instant;
use tracing::trace;

/// An async function wrapped by [`debounce_async`].
///
/// Cloning shares the pending-call state, so every clone supersedes the
/// others.
pub struct DebouncedAsync<F> {
    f: Arc<F>,
    delay: Duration,
    current: Arc<Mutex<Option<CancelController>>>,
}

impl<F> Clone for DebouncedAsync<F> {
    fn clone(&self) -> Self {
        Self {
            f: Arc::clone(&self.f),
            delay: self.delay,
            current: Arc::clone(&self.current),
        }
    }
}

impl<F> std::fmt::Debug for DebouncedAsync<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DebouncedAsync")
            .field("delay", &self.delay)
            .finish_non_exhaustive()
    }
}

/// Wrap `f` so that only the last call in a burst runs.
///
/// Each [`call`](DebouncedAsync::call) cancels the signal of the call before
/// it. A call that is still waiting out `delay` settles with
/// [`DebounceError::Cancelled`]; one already running sees its
/// [`CancelSignal`] flip and may stop early.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use casoon_util_async::{debounce_async, CancelSignal, DebounceError};
///
/// # tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap().block_on(async {
/// let search = debounce_async(
///     |query: &'static str, _signal: CancelSignal| async move { Ok::<_, String>(query.len()) },
///     Duration::from_millis(20),
/// );
///
/// let first = search.call("ru");
/// let second = search.call("rust");
/// let (first, second) = tokio::join!(first, second);
///
/// assert!(matches!(first, Err(DebounceError::Cancelled)));
/// assert_eq!(second.unwrap(), 4);
/// # });
/// ```
pub fn debounce_async<F>(f: F, delay: Duration) -> DebouncedAsync<F> {
    DebouncedAsync {
        f: Arc::new(f),
        delay,
        current: Arc::new(Mutex::new(None)),
    }
}

impl<F> DebouncedAsync<F> {
    /// Schedule a call with `args`, superseding any earlier one.
    ///
    /// The supersession and the start of the quiet window both happen here,
    /// not when the returned future is first polled.
    pub fn call<A, Fut, T, E>(&self, args: A) -> impl Future<Output = Result<T, DebounceError<E>>>
    where
        F: Fn(A, CancelSignal) -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let controller = CancelController::new();
        let signal = controller.signal();
        if let Some(previous) = self.replace_current(Some(controller)) {
            trace!("superseding pending debounced call");
            previous.cancel();
        }

        let f = Arc::clone(&self.f);
        let deadline = Instant::now() + self.delay;

        async move {
            tokio::select! {
                biased;
                _ = signal.cancelled() => return Err(DebounceError::Cancelled),
                _ = tokio::time::sleep_until(deadline) => {}
            }

            match f(args, signal.clone()).await {
                Ok(value) => Ok(value),
                Err(_) if signal.is_cancelled() => Err(DebounceError::Cancelled),
                Err(err) => Err(DebounceError::Failed(err)),
            }
        }
    }

    /// Cancel the most recent call, if any.
    pub fn cancel(&self) {
        if let Some(previous) = self.replace_current(None) {
            previous.cancel();
        }
    }

    fn replace_current(&self, next: Option<CancelController>) -> Option<CancelController> {
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *current, next)
    }
}
