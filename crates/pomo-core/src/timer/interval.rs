//! The interval entity and its state machine.
//!
//! ## State Transitions
//!
//! ```text
//! NotStarted -> Running -> (Paused -> Running)* -> (Done | Cancelled)
//! ```
//!
//! An interval is created `NotStarted`, persisted immediately, and from
//! then on mutated only through [`Interval::start`], [`Interval::pause`]
//! and the progression task's periodic updates -- all of which go
//! through the repository. Once `Done` or `Cancelled` the record is
//! immutable.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::debug;

use crate::config::IntervalConfig;
use crate::error::{CoreError, Result};
use crate::events::Callbacks;

use super::cadence::next_category;
use super::progress;

/// The kind of interval: focused work or one of the two break lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Work,
    ShortBreak,
    LongBreak,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Work => "work",
            Self::ShortBreak => "short break",
            Self::LongBreak => "long break",
        })
    }
}

/// Lifecycle state of an interval.
///
/// Durable backends persist states as small integers; [`State::try_from`]
/// is the decode hook and rejects unknown tags with
/// [`CoreError::InvalidState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum State {
    NotStarted = 0,
    Running = 1,
    Paused = 2,
    Done = 3,
    Cancelled = 4,
}

impl State {
    /// Whether the interval has finished for good.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Cancelled)
    }
}

impl TryFrom<u8> for State {
    type Error = CoreError;

    fn try_from(tag: u8) -> Result<Self> {
        match tag {
            0 => Ok(Self::NotStarted),
            1 => Ok(Self::Running),
            2 => Ok(Self::Paused),
            3 => Ok(Self::Done),
            4 => Ok(Self::Cancelled),
            other => Err(CoreError::InvalidState(other)),
        }
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::NotStarted => "not started",
            Self::Running => "running",
            Self::Paused => "paused",
            Self::Done => "done",
            Self::Cancelled => "cancelled",
        })
    }
}

/// One timed session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interval {
    /// Repository identity, 1-based, assigned once at creation.
    pub id: i64,
    /// When the interval first transitioned to Running.
    pub start_time: Option<DateTime<Utc>>,
    /// How long the interval is meant to run.
    pub planned_duration: Duration,
    /// Accumulated elapsed time. Never exceeds `planned_duration`.
    pub actual_duration: Duration,
    pub category: Category,
    pub state: State,
}

impl Interval {
    /// A fresh record that has not been handed to a repository yet.
    pub fn unsaved(category: Category, planned_duration: Duration) -> Self {
        Self {
            id: 0,
            start_time: None,
            planned_duration,
            actual_duration: Duration::ZERO,
            category,
            state: State::NotStarted,
        }
    }

    /// Time left before natural expiry.
    pub fn remaining(&self) -> Duration {
        self.planned_duration.saturating_sub(self.actual_duration)
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// The active interval, creating one if necessary.
    ///
    /// Returns the most recent interval when it is still in play
    /// (Running or Paused, or NotStarted but not yet begun). When the
    /// store is empty or the last interval finished, a new `NotStarted`
    /// interval is created and persisted, with its category picked by
    /// the break cadence and its duration by the config.
    pub fn current(config: &IntervalConfig) -> Result<Self> {
        match config.repository().last() {
            Ok(last) if !last.state.is_terminal() => Ok(last),
            Ok(_) | Err(CoreError::NoIntervals) => Self::create(config),
            Err(err) => Err(err),
        }
    }

    fn create(config: &IntervalConfig) -> Result<Self> {
        let category = next_category(config.repository())?;
        let mut interval = Self::unsaved(category, config.duration_for(category));
        interval.id = config.repository().create(&interval)?;
        debug!(id = interval.id, %category, "new interval");
        Ok(interval)
    }

    /// Begin (or resume) this interval and drive it until it pauses,
    /// expires, or is cancelled.
    ///
    /// The returned future *is* the progression loop: it persists the
    /// `Running` state, then advances `actual_duration` once per second,
    /// invoking `callbacks` from its own task (see [`Callbacks`] for the
    /// delivery contract). Await it to receive the loop's terminal
    /// result, or hand it to `tokio::spawn` for fire-and-forget.
    ///
    /// Sending on the `cancel` channel (or dropping its last sender)
    /// marks the interval `Cancelled` and stops the loop without
    /// invoking `on_end`. An external [`Interval::pause`] is observed
    /// within one second.
    ///
    /// Starting an already-Running interval is a no-op; starting a
    /// terminal one fails with [`CoreError::IntervalCompleted`].
    ///
    /// Nothing here prevents two concurrent `start` calls on the same
    /// id from racing on updates; callers are expected to drive one
    /// active interval at a time.
    pub async fn start(
        &self,
        cancel: broadcast::Receiver<()>,
        config: &IntervalConfig,
        callbacks: Callbacks,
    ) -> Result<()> {
        match self.state {
            State::Running => Ok(()),
            State::NotStarted | State::Paused => {
                let mut interval = self.clone();
                if interval.state == State::NotStarted {
                    interval.start_time = Some(Utc::now());
                }
                interval.state = State::Running;
                config.repository().update(&interval)?;
                debug!(id = interval.id, %interval.category, "interval running");
                progress::run(interval.id, config, callbacks, cancel).await
            }
            State::Done | State::Cancelled => Err(CoreError::IntervalCompleted),
        }
    }

    /// Pause a running interval.
    ///
    /// Succeeds only from `Running`; any other state -- including an
    /// already-paused interval -- fails with
    /// [`CoreError::IntervalNotRunning`]. The progression loop notices
    /// the persisted pause on its next tick.
    pub fn pause(&self, config: &IntervalConfig) -> Result<()> {
        if self.state != State::Running {
            return Err(CoreError::IntervalNotRunning);
        }
        let mut interval = self.clone();
        interval.state = State::Paused;
        config.repository().update(&interval)?;
        debug!(id = interval.id, "interval paused");
        Ok(())
    }
}
