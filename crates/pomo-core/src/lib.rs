//! # Pomo Core Library
//!
//! This library provides the core business logic for the pomo Pomodoro
//! timer: the interval entity and its state machine, the break cadence
//! that decides what kind of interval comes next, and the storage
//! abstraction intervals are persisted through. Front ends (CLI, GUI)
//! are thin layers over this crate.
//!
//! ## Architecture
//!
//! - **Timer**: the [`Interval`] state machine plus a background
//!   progression task that advances a running interval once per second
//! - **Cadence**: pure lookback over stored history deciding whether the
//!   next interval is work, a short break, or a long break
//! - **Storage**: the [`Repository`] trait and its in-memory reference
//!   implementation; durable backends plug in behind the same trait
//!
//! ## Key Components
//!
//! - [`Interval`]: one timed work or break session
//! - [`IntervalConfig`]: repository handle plus per-category durations
//! - [`Callbacks`]: the three notification slots a front end observes
//! - [`Repository`]: ordered store of interval records
//! - [`InMemoryRepository`]: lock-guarded in-process store

pub mod config;
pub mod error;
pub mod events;
pub mod storage;
pub mod timer;

pub use config::IntervalConfig;
pub use error::{CoreError, Result};
pub use events::Callbacks;
pub use storage::{InMemoryRepository, Repository};
pub use timer::{next_category, Category, Interval, State};
