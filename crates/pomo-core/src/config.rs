//! Interval configuration: the repository handle plus the planned
//! duration for each interval category.
//!
//! Durations passed as zero fall back to the classic Pomodoro defaults
//! of 25 / 5 / 15 minutes.

use std::sync::Arc;
use std::time::Duration;

use crate::storage::Repository;
use crate::timer::Category;

/// Default work interval length.
pub const DEFAULT_WORK: Duration = Duration::from_secs(25 * 60);
/// Default short break length.
pub const DEFAULT_SHORT_BREAK: Duration = Duration::from_secs(5 * 60);
/// Default long break length.
pub const DEFAULT_LONG_BREAK: Duration = Duration::from_secs(15 * 60);

/// Everything the interval operations need: where records live and how
/// long each category runs.
///
/// Cloning is cheap; the repository is shared behind an [`Arc`].
#[derive(Clone)]
pub struct IntervalConfig {
    repo: Arc<dyn Repository>,
    work: Duration,
    short_break: Duration,
    long_break: Duration,
}

impl IntervalConfig {
    /// Build a config over `repo`. Any zero duration is replaced with
    /// its category default.
    pub fn new(
        repo: Arc<dyn Repository>,
        work: Duration,
        short_break: Duration,
        long_break: Duration,
    ) -> Self {
        Self {
            repo,
            work: or_default(work, DEFAULT_WORK),
            short_break: or_default(short_break, DEFAULT_SHORT_BREAK),
            long_break: or_default(long_break, DEFAULT_LONG_BREAK),
        }
    }

    /// The repository this config persists through.
    pub fn repository(&self) -> &dyn Repository {
        self.repo.as_ref()
    }

    /// Planned duration for an interval of `category`.
    pub fn duration_for(&self, category: Category) -> Duration {
        match category {
            Category::Work => self.work,
            Category::ShortBreak => self.short_break,
            Category::LongBreak => self.long_break,
        }
    }
}

impl std::fmt::Debug for IntervalConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntervalConfig")
            .field("work", &self.work)
            .field("short_break", &self.short_break)
            .field("long_break", &self.long_break)
            .finish_non_exhaustive()
    }
}

fn or_default(value: Duration, default: Duration) -> Duration {
    if value.is_zero() {
        default
    } else {
        value
    }
}
