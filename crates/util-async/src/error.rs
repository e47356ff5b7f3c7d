use std::time::Duration;
use thiserror::Error;

/// The deadline passed before the raced future settled.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct TimeoutError {
    /// Caller-supplied description of the operation.
    pub message: String,
    /// The deadline that was exceeded.
    pub after: Duration,
}

impl TimeoutError {
    pub fn new(message: impl Into<String>, after: Duration) -> Self {
        Self {
            message: message.into(),
            after,
        }
    }
}

/// Marker error for operations that stopped because they were cancelled.
///
/// Executors passed to [`cancellable`](crate::cancellable) can use it to
/// report that they honoured a [`CancelSignal`](crate::CancelSignal).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("operation was cancelled")]
pub struct Cancelled;

/// Outcome of a debounced async call that did not produce a value.
#[derive(Debug, Error)]
pub enum DebounceError<E> {
    /// A newer call superseded this one. Not a failure of the wrapped function.
    #[error("debounced call was superseded by a newer call")]
    Cancelled,
    /// The wrapped function failed.
    #[error("debounced call failed: {0}")]
    Failed(E),
}

impl<E> DebounceError<E> {
    /// Check if the call was superseded rather than failed.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, DebounceError::Cancelled)
    }

    /// The wrapped function's error, if that is what this is.
    pub fn into_failed(self) -> Option<E> {
        match self {
            DebounceError::Failed(err) => Some(err),
            DebounceError::Cancelled => None,
        }
    }
}
