//! Core error types for pomo-core.
//!
//! One enum covers the whole interval lifecycle: state-machine refusals,
//! repository lookups, and storage failures from durable backends. All
//! variants are meant to be matched on by callers; storage errors pass
//! through unchanged and are never swallowed.

use thiserror::Error;

/// Core error type for pomo-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// The store holds no intervals yet. Recoverable: callers respond by
    /// creating the first interval.
    #[error("no intervals in store")]
    NoIntervals,

    /// A zero or out-of-range id was handed to the repository.
    #[error("invalid interval id: {0}")]
    InvalidId(i64),

    /// `start` was attempted on an interval that is already Done or
    /// Cancelled.
    #[error("interval is already completed")]
    IntervalCompleted,

    /// `pause` was attempted while the interval was not Running.
    #[error("interval is not running")]
    IntervalNotRunning,

    /// A persisted state tag did not decode to a known [`State`]. Only
    /// durable backends can produce this; it indicates a corrupted
    /// record.
    ///
    /// [`State`]: crate::timer::State
    #[error("invalid interval state: {0}")]
    InvalidState(u8),

    /// Failure inside a durable repository implementation, propagated
    /// unchanged.
    #[error("storage error: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl CoreError {
    /// Wrap a backend failure for propagation through the repository
    /// contract.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Box::new(err))
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
