//! The interval state machine, the break cadence, and the progression
//! task that advances a running interval.

mod cadence;
mod interval;
mod progress;

pub use cadence::next_category;
pub use interval::{Category, Interval, State};
