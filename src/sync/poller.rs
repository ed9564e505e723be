//! Interval-driven polling scheduler.

use crate::state::Collection;
use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

/// Drives repeated collection refreshes on fixed intervals.
///
/// Timers are keyed by [`Collection`] identity: scheduling a key that
/// already has a timer aborts the old one first, so each collection has at
/// most one active timer no matter how often callers re-register. A zero
/// interval means polling is disabled for that key.
///
/// Ticks spawn the produced future without awaiting it, so a slow fetch
/// never delays the next tick; overlapping refreshes for one collection are
/// resolved by the store's sequence guard. Cancelling a timer only stops
/// future ticks; fetches already dispatched keep running to completion.
#[derive(Debug, Default)]
pub struct PollScheduler {
    timers: HashMap<Collection, JoinHandle<()>>,
}

impl PollScheduler {
    /// Create a scheduler with no active timers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the polling timer for a collection, replacing any existing
    /// one. The task runs once immediately, then on every interval tick.
    pub fn schedule<F, Fut>(&mut self, collection: Collection, interval: Duration, task: F)
    where
        F: Fn() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        if self.cancel(collection) {
            debug!(%collection, "replaced existing poll timer");
        }
        if interval.is_zero() {
            debug!(%collection, "polling disabled");
            return;
        }

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                ticker.tick().await;
                tokio::spawn(task());
            }
        });
        self.timers.insert(collection, handle);
    }

    /// Stop polling a collection. Returns true if a timer was active.
    pub fn cancel(&mut self, collection: Collection) -> bool {
        match self.timers.remove(&collection) {
            Some(handle) => {
                handle.abort();
                true
            }
            None => false,
        }
    }

    /// Stop all polling timers.
    pub fn cancel_all(&mut self) {
        for (_, handle) in self.timers.drain() {
            handle.abort();
        }
    }

    /// Check whether a collection currently has a timer.
    pub fn is_scheduled(&self, collection: Collection) -> bool {
        self.timers.contains_key(&collection)
    }

    /// Number of active timers.
    pub fn active_count(&self) -> usize {
        self.timers.len()
    }
}

impl Drop for PollScheduler {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
