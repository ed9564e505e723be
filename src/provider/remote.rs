//! Remote collection provider abstraction.

use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// A remote endpoint serving one raw collection payload.
///
/// The unified asset collection draws from two endpoints (stocks and
/// crypto); the remaining collections map one-to-one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Stocks,
    Crypto,
    News,
    Alerts,
    Dashboard,
    Portfolio,
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stocks => write!(f, "stocks"),
            Self::Crypto => write!(f, "crypto"),
            Self::News => write!(f, "news"),
            Self::Alerts => write!(f, "alerts"),
            Self::Dashboard => write!(f, "dashboard"),
            Self::Portfolio => write!(f, "portfolio"),
        }
    }
}

/// Source of raw collection payloads.
///
/// Implementations may be slow or fail; the sync engine converts failures
/// into per-collection rejected transitions and retries on the next poll
/// tick. The returned payload is the raw response body; the envelope module
/// normalizes its shape.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RemoteCollectionProvider: Send + Sync {
    /// Fetch one endpoint's raw payload.
    async fn fetch_collection(&self, endpoint: Endpoint) -> Result<Value>;
}
