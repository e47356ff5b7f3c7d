//! Trailing-edge debounce for fire-and-forget callbacks.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::trace;

/// Delay used by [`debounce_default`].
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// A callback wrapped by [`debounce`].
pub struct Debounced<A> {
    f: Arc<dyn Fn(A) + Send + Sync>,
    delay: Duration,
    pending: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl<A> Clone for Debounced<A> {
    fn clone(&self) -> Self {
        Self {
            f: Arc::clone(&self.f),
            delay: self.delay,
            pending: Arc::clone(&self.pending),
        }
    }
}

impl<A> std::fmt::Debug for Debounced<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Debounced")
            .field("delay", &self.delay)
            .finish_non_exhaustive()
    }
}

/// Delay `f` until `delay` has passed without another call, then run it
/// once with the most recent arguments.
///
/// # Examples
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use std::time::Duration;
/// use casoon_util_async::debounce;
///
/// # tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap().block_on(async {
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&seen);
/// let on_input = debounce(move |text: String| sink.lock().unwrap().push(text), Duration::from_millis(20));
///
/// on_input.call("r".into());
/// on_input.call("ru".into());
/// on_input.call("rust".into());
/// tokio::time::sleep(Duration::from_millis(50)).await;
///
/// assert_eq!(*seen.lock().unwrap(), vec!["rust".to_string()]);
/// # });
/// ```
pub fn debounce<A, F>(f: F, delay: Duration) -> Debounced<A>
where
    F: Fn(A) + Send + Sync + 'static,
{
    Debounced {
        f: Arc::new(f),
        delay,
        pending: Arc::new(Mutex::new(None)),
    }
}

/// [`debounce`] with a 300 ms delay.
pub fn debounce_default<A, F>(f: F) -> Debounced<A>
where
    F: Fn(A) + Send + Sync + 'static,
{
    debounce(f, DEFAULT_DEBOUNCE)
}

impl<A: Send + 'static> Debounced<A> {
    /// Restart the timer with `args`, dropping any call still waiting.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime.
    pub fn call(&self, args: A) {
        let f = Arc::clone(&self.f);
        let deadline = Instant::now() + self.delay;

        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = pending.take() {
            trace!("restarting debounce timer");
            previous.abort();
        }
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            f(args);
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn recorder() -> (Arc<Mutex<Vec<u32>>>, impl Fn(u32) + Send + Sync + 'static) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&calls);
        (calls, move |n| sink.lock().unwrap().push(n))
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_runs_once_with_last_args() {
        let (calls, f) = recorder();
        let debounced = debounce(f, Duration::from_millis(100));

        for n in 1..=5 {
            debounced.call(n);
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        assert!(calls.lock().unwrap().is_empty());

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(*calls.lock().unwrap(), vec![5]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_separated_calls_each_run() {
        let (calls, f) = recorder();
        let debounced = debounce(f, Duration::from_millis(50));

        debounced.call(1);
        tokio::time::sleep(Duration::from_millis(100)).await;
        debounced.call(2);
        tokio::time::sleep(Duration::from_millis(100)).await;

        assert_eq!(*calls.lock().unwrap(), vec![1, 2]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_default_delay() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        let debounced = debounce_default(move |()| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        debounced.call(());
        tokio::time::sleep(Duration::from_millis(299)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_clones_share_timer() {
        let (calls, f) = recorder();
        let debounced = debounce(f, Duration::from_millis(30));
        let other = debounced.clone();

        debounced.call(1);
        other.call(2);
        tokio::time::sleep(Duration::from_millis(60)).await;

        assert_eq!(*calls.lock().unwrap(), vec![2]);
    }
}
