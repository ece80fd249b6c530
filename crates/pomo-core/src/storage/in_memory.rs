//! In-memory reference implementation of the repository contract.

use std::sync::RwLock;

use tracing::debug;

use crate::error::{CoreError, Result};
use crate::timer::{Category, Interval};

use super::Repository;

/// Growable record sequence behind a single reader/writer lock.
///
/// Ids are sequential: a record's id equals its 1-based position in the
/// sequence. Each operation holds the lock for its full duration, which
/// is the whole concurrency story -- coarse by design.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    intervals: RwLock<Vec<Interval>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        debug!("creating in-memory repository");
        Self::default()
    }
}

impl Repository for InMemoryRepository {
    fn create(&self, interval: &Interval) -> Result<i64> {
        let mut intervals = self.intervals.write().unwrap();

        let mut record = interval.clone();
        record.id = intervals.len() as i64 + 1;
        let id = record.id;
        intervals.push(record);

        debug!(id, "interval created");
        Ok(id)
    }

    fn update(&self, interval: &Interval) -> Result<()> {
        let mut intervals = self.intervals.write().unwrap();

        let position = position_for(interval.id, intervals.len())?;
        intervals[position] = interval.clone();
        Ok(())
    }

    fn by_id(&self, id: i64) -> Result<Interval> {
        let intervals = self.intervals.read().unwrap();

        let position = position_for(id, intervals.len())?;
        Ok(intervals[position].clone())
    }

    fn last(&self) -> Result<Interval> {
        let intervals = self.intervals.read().unwrap();

        intervals.last().cloned().ok_or(CoreError::NoIntervals)
    }

    fn breaks(&self, n: usize) -> Result<Vec<Interval>> {
        let intervals = self.intervals.read().unwrap();

        Ok(intervals
            .iter()
            .rev()
            .filter(|i| i.category != Category::Work)
            .take(n)
            .cloned()
            .collect())
    }
}

/// Translate a 1-based id to a position in the sequence.
fn position_for(id: i64, len: usize) -> Result<usize> {
    if id <= 0 || id as usize > len {
        return Err(CoreError::InvalidId(id));
    }
    Ok(id as usize - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::State;
    use std::time::Duration;

    fn interval(category: Category) -> Interval {
        Interval::unsaved(category, Duration::from_secs(60))
    }

    #[test]
    fn create_assigns_sequential_ids() {
        let repo = InMemoryRepository::new();
        assert_eq!(repo.create(&interval(Category::Work)).unwrap(), 1);
        assert_eq!(repo.create(&interval(Category::ShortBreak)).unwrap(), 2);
        assert_eq!(repo.create(&interval(Category::Work)).unwrap(), 3);
    }

    #[test]
    fn by_id_returns_the_stored_record() {
        let repo = InMemoryRepository::new();
        let id = repo.create(&interval(Category::ShortBreak)).unwrap();
        let stored = repo.by_id(id).unwrap();
        assert_eq!(stored.id, id);
        assert_eq!(stored.category, Category::ShortBreak);
    }

    #[test]
    fn zero_and_out_of_range_ids_are_rejected() {
        let repo = InMemoryRepository::new();
        repo.create(&interval(Category::Work)).unwrap();

        assert!(matches!(repo.by_id(0), Err(CoreError::InvalidId(0))));
        assert!(matches!(repo.by_id(2), Err(CoreError::InvalidId(2))));

        let mut phantom = interval(Category::Work);
        phantom.id = 5;
        assert!(matches!(repo.update(&phantom), Err(CoreError::InvalidId(5))));
    }

    #[test]
    fn last_fails_on_empty_store() {
        let repo = InMemoryRepository::new();
        assert!(matches!(repo.last(), Err(CoreError::NoIntervals)));
    }

    #[test]
    fn update_replaces_the_full_record() {
        let repo = InMemoryRepository::new();
        let id = repo.create(&interval(Category::Work)).unwrap();

        let mut changed = repo.by_id(id).unwrap();
        changed.state = State::Running;
        changed.actual_duration = Duration::from_secs(3);
        repo.update(&changed).unwrap();

        let stored = repo.by_id(id).unwrap();
        assert_eq!(stored.state, State::Running);
        assert_eq!(stored.actual_duration, Duration::from_secs(3));
    }

    #[test]
    fn breaks_skips_work_and_orders_most_recent_first() {
        let repo = InMemoryRepository::new();
        // Work, Short, Work, Long, Work, Short
        for category in [
            Category::Work,
            Category::ShortBreak,
            Category::Work,
            Category::LongBreak,
            Category::Work,
            Category::ShortBreak,
        ] {
            repo.create(&interval(category)).unwrap();
        }

        let breaks = repo.breaks(2).unwrap();
        assert_eq!(breaks.len(), 2);
        assert_eq!(breaks[0].id, 6);
        assert_eq!(breaks[1].id, 4);

        // Asking for more than exist truncates instead of failing.
        let breaks = repo.breaks(10).unwrap();
        assert_eq!(breaks.len(), 3);
        assert_eq!(
            breaks.iter().map(|b| b.id).collect::<Vec<_>>(),
            vec![6, 4, 2]
        );
    }

    #[test]
    fn breaks_on_empty_store_is_empty() {
        let repo = InMemoryRepository::new();
        assert!(repo.breaks(3).unwrap().is_empty());
    }
}
