//! State management for pulsefeed.
//!
//! This module provides centralized state management with a unidirectional
//! data flow pattern inspired by Redux/Elm architecture: one typed slice per
//! remote collection, mutated exclusively through [`Store::reduce`].

mod alert_state;
mod asset_state;
mod dashboard_state;
mod lifecycle;
mod news_state;
mod portfolio_state;

pub use alert_state::{Alert, AlertState, Severity, SeverityBadge};
pub use asset_state::{Asset, AssetSortKey, AssetState, AssetType};
pub use dashboard_state::{DashboardState, DashboardSummary};
pub use lifecycle::FetchLifecycle;
pub use news_state::{NewsEntry, NewsState};
pub use portfolio_state::{Holding, PortfolioState, PortfolioSummary};

use crate::query::{CategoryFilter, SortSpec};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// A named, independently pollable collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Assets,
    News,
    Alerts,
    Dashboard,
    Portfolio,
}

impl Collection {
    /// Every collection, in slice declaration order.
    pub const ALL: [Collection; 5] = [
        Collection::Assets,
        Collection::News,
        Collection::Alerts,
        Collection::Dashboard,
        Collection::Portfolio,
    ];
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Assets => write!(f, "assets"),
            Self::News => write!(f, "news"),
            Self::Alerts => write!(f, "alerts"),
            Self::Dashboard => write!(f, "dashboard"),
            Self::Portfolio => write!(f, "portfolio"),
        }
    }
}

/// Payload of a fulfilled fetch.
#[derive(Debug, Clone)]
pub enum FetchPayload {
    Assets(Vec<Asset>),
    News(Vec<NewsEntry>),
    Alerts(Vec<Alert>),
    Dashboard(Option<DashboardSummary>),
    Portfolio(Option<PortfolioSummary>),
}

impl FetchPayload {
    /// The collection this payload belongs to.
    pub fn collection(&self) -> Collection {
        match self {
            Self::Assets(_) => Collection::Assets,
            Self::News(_) => Collection::News,
            Self::Alerts(_) => Collection::Alerts,
            Self::Dashboard(_) => Collection::Dashboard,
            Self::Portfolio(_) => Collection::Portfolio,
        }
    }
}

/// Actions that can be dispatched to modify state.
#[derive(Debug, Clone)]
pub enum Action {
    // Fetch lifecycle
    FetchStarted {
        collection: Collection,
        seq: u64,
    },
    FetchCompleted {
        seq: u64,
        payload: FetchPayload,
    },
    FetchFailed {
        collection: Collection,
        seq: u64,
        message: Option<String>,
    },

    // Assets view parameters
    SetAssetFilter(CategoryFilter<AssetType>),
    SetAssetSearch(String),
    SetAssetSorting(Vec<SortSpec<AssetSortKey>>),
}

/// The global state store, one slice per collection.
#[derive(Debug, Default)]
pub struct Store {
    /// Unified assets table state.
    pub assets: AssetState,
    /// News state.
    pub news: NewsState,
    /// Alerts state.
    pub alerts: AlertState,
    /// Dashboard aggregate state.
    pub dashboard: DashboardState,
    /// Portfolio state.
    pub portfolio: PortfolioState,
}

/// Store shared between the sync engine and its consumers.
///
/// All mutation happens synchronously under the write guard, so each
/// lifecycle transition is applied atomically.
pub type SharedStore = Arc<RwLock<Store>>;

impl Store {
    /// Create a new store with empty collection slices.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap the store for sharing with the sync engine.
    pub fn into_shared(self) -> SharedStore {
        Arc::new(RwLock::new(self))
    }

    /// Dispatch a new fetch for a collection: allocates its sequence number
    /// and applies the pending transition.
    pub fn begin_fetch(&mut self, collection: Collection) -> u64 {
        let seq = self.lifecycle_mut(collection).allocate_seq();
        self.reduce(Action::FetchStarted { collection, seq });
        seq
    }

    /// Apply an action to update state.
    pub fn reduce(&mut self, action: Action) {
        match action {
            // Fetch lifecycle
            Action::FetchStarted { collection, seq } => {
                debug!(%collection, seq, "fetch pending");
                self.lifecycle_mut(collection).pending();
            }
            Action::FetchCompleted { seq, payload } => self.apply_payload(seq, payload),
            Action::FetchFailed {
                collection,
                seq,
                message,
            } => {
                self.lifecycle_mut(collection).fail(seq, message, collection);
            }

            // Assets view parameters
            Action::SetAssetFilter(filter) => self.assets.filter_type = filter,
            Action::SetAssetSearch(query) => self.assets.search_query = query,
            Action::SetAssetSorting(sorting) => self.assets.sorting = sorting,
        }
    }

    /// The portfolio summary to render: the dedicated portfolio fetch wins,
    /// with the dashboard aggregate's embedded copy as fallback.
    pub fn portfolio_overview(&self) -> Option<&PortfolioSummary> {
        self.portfolio.summary.as_ref().or_else(|| {
            self.dashboard
                .summary
                .as_ref()
                .and_then(|summary| summary.portfolio.as_ref())
        })
    }

    fn apply_payload(&mut self, seq: u64, payload: FetchPayload) {
        debug!(collection = %payload.collection(), seq, "fetch fulfilled");
        match payload {
            FetchPayload::Assets(items) => {
                if self.assets.lifecycle.complete(seq) {
                    self.assets.items = items;
                }
            }
            FetchPayload::News(items) => {
                if self.news.lifecycle.complete(seq) {
                    self.news.items = items;
                }
            }
            FetchPayload::Alerts(items) => {
                if self.alerts.lifecycle.complete(seq) {
                    self.alerts.items = items;
                }
            }
            FetchPayload::Dashboard(summary) => {
                if self.dashboard.lifecycle.complete(seq) {
                    self.dashboard.summary = summary;
                }
            }
            FetchPayload::Portfolio(summary) => {
                if self.portfolio.lifecycle.complete(seq) {
                    self.portfolio.summary = summary;
                }
            }
        }
    }

    fn lifecycle_mut(&mut self, collection: Collection) -> &mut FetchLifecycle {
        match collection {
            Collection::Assets => &mut self.assets.lifecycle,
            Collection::News => &mut self.news.lifecycle,
            Collection::Alerts => &mut self.alerts.lifecycle,
            Collection::Dashboard => &mut self.dashboard.lifecycle,
            Collection::Portfolio => &mut self.portfolio.lifecycle,
        }
    }

    /// Read access to a collection's lifecycle.
    pub fn lifecycle(&self, collection: Collection) -> &FetchLifecycle {
        match collection {
            Collection::Assets => &self.assets.lifecycle,
            Collection::News => &self.news.lifecycle,
            Collection::Alerts => &self.alerts.lifecycle,
            Collection::Dashboard => &self.dashboard.lifecycle,
            Collection::Portfolio => &self.portfolio.lifecycle,
        }
    }
}
