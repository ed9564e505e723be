//! # Pulsefeed - Market Dashboard Sync Core
//!
//! The client-side data-synchronization and query layer behind a
//! market-monitoring dashboard: polled remote collections (assets, news,
//! alerts, dashboard aggregate, portfolio) with per-collection lifecycle
//! tracking and a declarative sort/filter/search engine over the results.
//!
//! ## Architecture
//!
//! The crate follows a unidirectional data flow:
//!
//! - **Provider**: opaque remote collection source plus envelope
//!   normalization
//! - **State**: centralized store, one slice per collection, mutated
//!   through typed actions
//! - **Sync**: fetch lifecycle driver and interval polling scheduler
//! - **Query**: pure derived-state computation for the displayed rows
//! - **Config**: provider settings and per-collection poll intervals

pub mod config;
pub mod error;
pub mod provider;
pub mod query;
pub mod state;
pub mod sync;

pub use config::Config;
pub use error::{Error, Result};
pub use provider::{Endpoint, RemoteCollectionProvider};
pub use state::{Action, Collection, SharedStore, Store};
pub use sync::{PollScheduler, SyncEngine};
