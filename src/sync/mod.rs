//! Data synchronization for pulsefeed.
//!
//! This module drives the fetch lifecycle: the [`SyncEngine`] runs one
//! refresh per collection against the remote provider, and the
//! [`PollScheduler`] re-runs refreshes on fixed intervals.

mod engine;
mod poller;

pub use engine::SyncEngine;
pub use poller::PollScheduler;
