//! Dashboard aggregate collection state.

use crate::state::{Alert, Asset, FetchLifecycle, NewsEntry, PortfolioSummary};
use serde::{Deserialize, Serialize};

/// Aggregate snapshot served by the dashboard endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Portfolio summary embedded in the aggregate.
    #[serde(default)]
    pub portfolio: Option<PortfolioSummary>,
    /// Best-performing assets.
    #[serde(default)]
    pub top_gainers: Vec<Asset>,
    /// Worst-performing assets.
    #[serde(default)]
    pub top_losers: Vec<Asset>,
    /// Latest headlines.
    #[serde(default)]
    pub recent_news: Vec<NewsEntry>,
    /// Currently firing alerts.
    #[serde(default)]
    pub active_alerts: Vec<Alert>,
}

/// State for the dashboard aggregate.
#[derive(Debug, Default)]
pub struct DashboardState {
    /// Latest aggregate snapshot.
    pub summary: Option<DashboardSummary>,
    /// Fetch lifecycle tracking.
    pub lifecycle: FetchLifecycle,
}

impl DashboardState {
    /// Get up to `limit` top gainers.
    pub fn top_gainers(&self, limit: usize) -> &[Asset] {
        self.summary
            .as_ref()
            .map(|s| truncated(&s.top_gainers, limit))
            .unwrap_or_default()
    }

    /// Get up to `limit` top losers.
    pub fn top_losers(&self, limit: usize) -> &[Asset] {
        self.summary
            .as_ref()
            .map(|s| truncated(&s.top_losers, limit))
            .unwrap_or_default()
    }

    /// Get up to `limit` recent headlines.
    pub fn recent_news(&self, limit: usize) -> &[NewsEntry] {
        self.summary
            .as_ref()
            .map(|s| truncated(&s.recent_news, limit))
            .unwrap_or_default()
    }

    /// Get up to `limit` active alerts.
    pub fn active_alerts(&self, limit: usize) -> &[Alert] {
        self.summary
            .as_ref()
            .map(|s| truncated(&s.active_alerts, limit))
            .unwrap_or_default()
    }
}

fn truncated<T>(items: &[T], limit: usize) -> &[T] {
    &items[..items.len().min(limit)]
}
