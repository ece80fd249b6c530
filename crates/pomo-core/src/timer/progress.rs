//! The progression loop: advances a running interval once per second
//! until it pauses, expires, or is cancelled.
//!
//! The loop operates on the interval's id and re-reads the stored
//! record at every decision point instead of trusting a copy across
//! iterations. That is also how an external pause reaches it: `pause`
//! persists the new state, and the next tick's re-read sees it -- up to
//! one second later, which is the documented pause latency.
//! Cancellation arrives on a channel and is selected in the same
//! iteration it is signalled.

use std::time::Duration;

use tokio::sync::broadcast;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::debug;

use crate::config::IntervalConfig;
use crate::error::Result;
use crate::events::Callbacks;

use super::interval::State;

/// One progression step.
const TICK: Duration = Duration::from_secs(1);

/// Drive the interval with the given id until a terminal event.
///
/// Branch priority is deliberate: cancellation is observed before
/// anything else, and a due tick is processed before a simultaneously
/// due expiry so that a pause stored during the previous tick wins over
/// expiry rather than racing it.
pub(super) async fn run(
    id: i64,
    config: &IntervalConfig,
    mut callbacks: Callbacks,
    mut cancel: broadcast::Receiver<()>,
) -> Result<()> {
    let repo = config.repository();

    let interval = repo.by_id(id)?;
    let remaining = interval.remaining();
    (callbacks.on_start)(&interval);
    debug!(id, remaining_secs = remaining.as_secs(), "progression started");

    // First tick one second in; a tick that lands while the previous one
    // is still being processed is dropped, not queued.
    let mut ticker = time::interval_at(Instant::now() + TICK, TICK);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let expiry = time::sleep(remaining);
    tokio::pin!(expiry);

    loop {
        tokio::select! {
            biased;

            _ = cancel.recv() => {
                let mut interval = repo.by_id(id)?;
                interval.state = State::Cancelled;
                debug!(id, "interval cancelled");
                return repo.update(&interval);
            }

            _ = ticker.tick() => {
                let mut interval = repo.by_id(id)?;
                if interval.state == State::Paused {
                    debug!(id, "progression halted by pause");
                    return Ok(());
                }
                interval.actual_duration += TICK;
                repo.update(&interval)?;
                (callbacks.on_tick)(&interval);
            }

            () = &mut expiry => {
                let mut interval = repo.by_id(id)?;
                interval.state = State::Done;
                (callbacks.on_end)(&interval);
                debug!(id, "interval done");
                return repo.update(&interval);
            }
        }
    }
}
