//! Interval storage.
//!
//! Core code depends only on the [`Repository`] trait; the in-memory
//! implementation here is the reference backend, and durable backends
//! (file, SQL) satisfy the same contract out of tree.

mod in_memory;

pub use in_memory::InMemoryRepository;

use crate::error::Result;
use crate::timer::Interval;

/// Ordered store of interval records, keyed by a sequentially assigned
/// 1-based id.
///
/// Implementations own the persisted sequence outright; callers only
/// ever hold transient copies of records. Every operation serializes
/// internally, so concurrent callers need no external locking.
pub trait Repository: Send + Sync {
    /// Append `interval` under a fresh, never-reused id and return that
    /// id. The id carried by `interval` itself is ignored.
    fn create(&self, interval: &Interval) -> Result<i64>;

    /// Replace the stored record at `interval.id` with `interval`.
    ///
    /// Fails with [`CoreError::InvalidId`] when the id is zero or does
    /// not correspond to a stored record.
    ///
    /// [`CoreError::InvalidId`]: crate::error::CoreError::InvalidId
    fn update(&self, interval: &Interval) -> Result<()>;

    /// Fetch the record with the given id, under the same id rules as
    /// [`Repository::update`].
    fn by_id(&self, id: i64) -> Result<Interval>;

    /// The most recently created record. Fails with
    /// [`CoreError::NoIntervals`] when the store is empty.
    ///
    /// [`CoreError::NoIntervals`]: crate::error::CoreError::NoIntervals
    fn last(&self) -> Result<Interval>;

    /// Up to `n` most recent non-work records, most recent first. An
    /// empty result is not an error.
    fn breaks(&self, n: usize) -> Result<Vec<Interval>>;
}
