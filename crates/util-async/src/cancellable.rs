use crate::cancel::{CancelController, CancelSignal};
use std::future::Future;

/// A future paired with the controller that can cancel it.
///
/// Both fields are public so the future can be moved into a task while the
/// controller stays behind.
#[derive(Debug)]
pub struct Cancellable<Fut> {
    pub future: Fut,
    pub controller: CancelController,
}

impl<Fut> Cancellable<Fut> {
    /// Signal cancellation. Only the executor decides what that means.
    pub fn cancel(&self) {
        self.controller.cancel();
    }

    pub fn into_parts(self) -> (Fut, CancelController) {
        (self.future, self.controller)
    }
}

/// Build a future from `executor`, handing it a signal tied to a fresh
/// controller.
///
/// Cancelling does not abort the future. An executor that never looks at its
/// signal runs to completion regardless.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use casoon_util_async::{cancellable, Cancelled};
///
/// # tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap().block_on(async {
/// let task = cancellable(|signal| async move {
///     tokio::select! {
///         _ = signal.cancelled() => Err(Cancelled),
///         _ = tokio::time::sleep(Duration::from_secs(60)) => Ok("finished"),
///     }
/// });
///
/// task.cancel();
/// assert_eq!(task.future.await, Err(Cancelled));
/// # });
/// ```
pub fn cancellable<F, Fut>(executor: F) -> Cancellable<Fut>
where
    F: FnOnce(CancelSignal) -> Fut,
    Fut: Future,
{
    let controller = CancelController::new();
    let future = executor(controller.signal());
    Cancellable { future, controller }
}
