//! Notification protocol between the progression task and its observer.
//!
//! A front end supplies three callback slots when starting an interval.
//! All three are invoked synchronously on the progression task, each
//! with an immutable snapshot of the interval at the moment of the
//! event:
//!
//! - `on_start` fires once, when the task begins driving the interval
//! - `on_tick` fires at most once per second while the interval runs
//! - `on_end` fires once, only when the interval expires naturally --
//!   never on pause or cancellation
//!
//! A slow callback delays subsequent ticks; missed ticks are dropped,
//! not queued.

use crate::timer::Interval;

/// One notification slot.
pub type Hook = Box<dyn FnMut(&Interval) + Send>;

/// The three notification slots handed to [`Interval::start`].
///
/// [`Interval::start`]: crate::timer::Interval::start
pub struct Callbacks {
    pub(crate) on_start: Hook,
    pub(crate) on_tick: Hook,
    pub(crate) on_end: Hook,
}

impl Callbacks {
    pub fn new(
        on_start: impl FnMut(&Interval) + Send + 'static,
        on_tick: impl FnMut(&Interval) + Send + 'static,
        on_end: impl FnMut(&Interval) + Send + 'static,
    ) -> Self {
        Self {
            on_start: Box::new(on_start),
            on_tick: Box::new(on_tick),
            on_end: Box::new(on_end),
        }
    }

    /// Callbacks that observe nothing. Useful for drivers that only care
    /// about the terminal result.
    pub fn noop() -> Self {
        Self::new(|_| {}, |_| {}, |_| {})
    }
}

impl std::fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Callbacks").finish_non_exhaustive()
    }
}
