//! Break cadence: which category the next interval gets.
//!
//! Work and breaks alternate one-for-one. Breaks are short by default;
//! once three consecutive short breaks have accumulated, the next break
//! is long, which resets the cycle. From empty history this yields the
//! repeating 8-interval pattern
//! `work, short, work, short, work, short, work, long`.

use tracing::debug;

use crate::error::{CoreError, Result};
use crate::storage::Repository;

use super::interval::Category;

/// How many recent breaks the long-break rule looks back over.
const LOOKBACK: usize = 3;

/// Decide the category of the next interval from stored history.
///
/// The first interval ever is work, and every break is followed by
/// work. After a work interval the next one is a break: short unless
/// the last [`LOOKBACK`] breaks were all short (and at least that many
/// exist), in which case it is long.
pub fn next_category(repo: &dyn Repository) -> Result<Category> {
    let last = match repo.last() {
        Ok(interval) => interval,
        Err(CoreError::NoIntervals) => return Ok(Category::Work),
        Err(err) => return Err(err),
    };

    if last.category != Category::Work {
        return Ok(Category::Work);
    }

    let breaks = repo.breaks(LOOKBACK)?;
    let category = if breaks.len() < LOOKBACK
        || breaks.iter().any(|b| b.category == Category::LongBreak)
    {
        Category::ShortBreak
    } else {
        Category::LongBreak
    };
    debug!(%category, recent_breaks = breaks.len(), "next category");
    Ok(category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryRepository;
    use crate::timer::Interval;
    use proptest::prelude::*;
    use std::time::Duration;

    fn seed(repo: &InMemoryRepository, categories: &[Category]) {
        for &category in categories {
            repo.create(&Interval::unsaved(category, Duration::from_secs(60)))
                .unwrap();
        }
    }

    #[test]
    fn empty_history_yields_work() {
        let repo = InMemoryRepository::new();
        assert_eq!(next_category(&repo).unwrap(), Category::Work);
    }

    #[test]
    fn any_break_is_followed_by_work() {
        for last in [Category::ShortBreak, Category::LongBreak] {
            let repo = InMemoryRepository::new();
            seed(&repo, &[Category::Work, last]);
            assert_eq!(next_category(&repo).unwrap(), Category::Work);
        }
    }

    #[test]
    fn breaks_are_short_until_three_shorts_accumulate() {
        let repo = InMemoryRepository::new();
        seed(&repo, &[Category::Work]);
        assert_eq!(next_category(&repo).unwrap(), Category::ShortBreak);

        seed(
            &repo,
            &[Category::ShortBreak, Category::Work, Category::ShortBreak, Category::Work],
        );
        // Only two breaks in history so far.
        assert_eq!(next_category(&repo).unwrap(), Category::ShortBreak);
    }

    #[test]
    fn fourth_break_after_three_shorts_is_long() {
        let repo = InMemoryRepository::new();
        seed(
            &repo,
            &[
                Category::Work,
                Category::ShortBreak,
                Category::Work,
                Category::ShortBreak,
                Category::Work,
                Category::ShortBreak,
                Category::Work,
            ],
        );
        assert_eq!(next_category(&repo).unwrap(), Category::LongBreak);
    }

    #[test]
    fn long_break_resets_the_short_cycle() {
        let repo = InMemoryRepository::new();
        seed(
            &repo,
            &[
                Category::Work,
                Category::ShortBreak,
                Category::Work,
                Category::ShortBreak,
                Category::Work,
                Category::LongBreak,
                Category::Work,
            ],
        );
        // A long break sits inside the lookback window, so short again.
        assert_eq!(next_category(&repo).unwrap(), Category::ShortBreak);
    }

    #[test]
    fn cadence_repeats_in_cycles_of_eight() {
        let expected = [
            Category::Work,
            Category::ShortBreak,
            Category::Work,
            Category::ShortBreak,
            Category::Work,
            Category::ShortBreak,
            Category::Work,
            Category::LongBreak,
        ];

        let repo = InMemoryRepository::new();
        for cycle in 0..2 {
            for (i, &expect) in expected.iter().enumerate() {
                let got = next_category(&repo).unwrap();
                assert_eq!(got, expect, "interval {} of cycle {}", i + 1, cycle + 1);
                seed(&repo, &[got]);
            }
        }
    }

    fn arb_category() -> impl Strategy<Value = Category> {
        prop_oneof![
            Just(Category::Work),
            Just(Category::ShortBreak),
            Just(Category::LongBreak),
        ]
    }

    proptest! {
        #[test]
        fn break_at_the_tail_always_yields_work(
            history in prop::collection::vec(arb_category(), 0..32),
            tail in prop_oneof![Just(Category::ShortBreak), Just(Category::LongBreak)],
        ) {
            let repo = InMemoryRepository::new();
            seed(&repo, &history);
            seed(&repo, &[tail]);
            prop_assert_eq!(next_category(&repo).unwrap(), Category::Work);
        }

        #[test]
        fn work_at_the_tail_always_yields_a_break(
            history in prop::collection::vec(arb_category(), 0..32),
        ) {
            let repo = InMemoryRepository::new();
            seed(&repo, &history);
            seed(&repo, &[Category::Work]);
            prop_assert!(next_category(&repo).unwrap() != Category::Work);
        }
    }
}
