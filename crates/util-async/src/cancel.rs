use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

#[derive(Debug, Default)]
struct Inner {
    cancelled: AtomicBool,
    notify: Notify,
}

/// The owning side of a cancellation token.
///
/// Hands out [`CancelSignal`]s and flips them all at once with
/// [`cancel`](Self::cancel). Cancellation is advisory: whoever holds a
/// signal decides how to react to it.
///
/// # Examples
///
/// ```
/// use casoon_util_async::CancelController;
///
/// let controller = CancelController::new();
/// let signal = controller.signal();
///
/// assert!(!signal.is_cancelled());
/// controller.cancel();
/// assert!(signal.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancelController {
    inner: Arc<Inner>,
}

impl CancelController {
    /// Create a controller in the "not cancelled" state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a signal observing this controller.
    pub fn signal(&self) -> CancelSignal {
        CancelSignal {
            inner: Arc::clone(&self.inner),
        }
    }

    /// Request cancellation. Calling this more than once has no further effect.
    pub fn cancel(&self) {
        if !self.inner.cancelled.swap(true, Ordering::SeqCst) {
            self.inner.notify.notify_waiters();
        }
    }

    /// Check if cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.load(Ordering::SeqCst)
    }
}

/// The observing side of a cancellation token.
///
/// Clone-able and thread-safe for sharing across async tasks.
#[derive(Debug, Clone)]
pub struct CancelSignal {
    inner: Arc<Inner>,
}

impl CancelSignal {
    /// Check if cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.load(Ordering::SeqCst)
    }

    /// Wait until cancellation is requested.
    ///
    /// Resolves immediately if the controller was already cancelled.
    pub async fn cancelled(&self) {
        loop {
            // Register before checking the flag so a concurrent cancel() cannot slip between.
            let notified = self.inner.notify.notified();
            if self.is_cancelled() {
                return;
            }
            notified.await;
        }
    }
}
