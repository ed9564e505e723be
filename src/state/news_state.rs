//! News collection state.

use crate::state::FetchLifecycle;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A market news headline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsEntry {
    /// Provider-assigned identifier.
    pub id: String,
    /// Headline text.
    pub title: String,
    /// Publishing outlet.
    #[serde(default)]
    pub source: String,
    /// Short summary.
    #[serde(default)]
    pub summary: String,
    /// Editorial category.
    #[serde(default)]
    pub category: String,
    /// Publication time.
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

/// State for the news collection.
#[derive(Debug, Default)]
pub struct NewsState {
    /// All loaded headlines, in provider order.
    pub items: Vec<NewsEntry>,
    /// Fetch lifecycle tracking.
    pub lifecycle: FetchLifecycle,
}

impl NewsState {
    /// Get headlines in a given editorial category.
    pub fn by_category(&self, category: &str) -> Vec<&NewsEntry> {
        self.items
            .iter()
            .filter(|entry| entry.category == category)
            .collect()
    }
}
