//! Per-collection fetch lifecycle tracking.
//!
//! Each collection slice embeds a [`FetchLifecycle`] that records the
//! pending/fulfilled/rejected transitions of its remote fetches. Every
//! dispatched fetch is tagged with a monotonically increasing sequence
//! number; a resolution carrying a sequence number at or below the highest
//! one already applied is discarded, so a slow superseded request can never
//! overwrite the result of a later fetch that resolved first.

use crate::state::Collection;
use chrono::{DateTime, Utc};

/// Loading/error/freshness state for one collection.
#[derive(Debug, Clone, Default)]
pub struct FetchLifecycle {
    /// True strictly between a fetch dispatch and its resolution.
    pub loading: bool,
    /// Message from the most recent rejected fetch; cleared on dispatch.
    pub error: Option<String>,
    /// Timestamp of the last successful fulfillment.
    pub last_updated: Option<DateTime<Utc>>,
    /// Sequence number handed to the most recently dispatched fetch.
    next_seq: u64,
    /// Highest sequence number whose resolution has been applied.
    applied_seq: u64,
}

impl FetchLifecycle {
    /// Allocate the sequence number for a new fetch dispatch.
    pub fn allocate_seq(&mut self) -> u64 {
        self.next_seq += 1;
        self.next_seq
    }

    /// Apply the pending transition. Items are left untouched so the
    /// previous payload stays visible while revalidating.
    pub fn pending(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Apply a fulfilled transition for the given fetch.
    ///
    /// Returns false if the resolution is stale; the caller must then leave
    /// the slice's payload untouched.
    pub fn complete(&mut self, seq: u64) -> bool {
        if self.is_stale(seq) {
            return false;
        }
        self.applied_seq = seq;
        self.loading = false;
        self.last_updated = Some(Utc::now());
        true
    }

    /// Apply a rejected transition for the given fetch.
    ///
    /// Falls back to a per-collection default message when the failure
    /// carried none. Returns false if the resolution is stale.
    pub fn fail(&mut self, seq: u64, message: Option<String>, collection: Collection) -> bool {
        if self.is_stale(seq) {
            return false;
        }
        self.applied_seq = seq;
        self.loading = false;
        self.error = Some(message.unwrap_or_else(|| format!("Failed to load {collection}")));
        true
    }

    /// Whether a resolution for `seq` has been superseded by a newer one.
    pub fn is_stale(&self, seq: u64) -> bool {
        seq <= self.applied_seq
    }

    /// Whether at least one fetch has succeeded.
    pub fn has_loaded(&self) -> bool {
        self.last_updated.is_some()
    }
}
