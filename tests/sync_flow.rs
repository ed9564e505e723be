use async_trait::async_trait;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tracing::info;

use pulsefeed::query::CategoryFilter;
use pulsefeed::state::{Action, AssetType};
use pulsefeed::{
    Collection, Endpoint, Error, PollScheduler, RemoteCollectionProvider, Result, Store, SyncEngine,
};

/// Canned provider covering every endpoint, with a toggle to take the
/// crypto sub-collection offline.
struct ScriptedProvider {
    fail_crypto: AtomicBool,
    calls: Mutex<Vec<Endpoint>>,
}

impl ScriptedProvider {
    fn new() -> Self {
        Self {
            fail_crypto: AtomicBool::new(false),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn call_count(&self, endpoint: Endpoint) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|e| **e == endpoint)
            .count()
    }
}

#[async_trait]
impl RemoteCollectionProvider for ScriptedProvider {
    async fn fetch_collection(&self, endpoint: Endpoint) -> Result<Value> {
        self.calls.lock().unwrap().push(endpoint);
        match endpoint {
            Endpoint::Stocks => Ok(json!({"data": [
                {"symbol": "AAPL", "name": "Apple Inc.", "currentPrice": 180, "changePercent": 2.5, "volume": 1000},
                {"symbol": "MSFT", "name": "Microsoft", "currentPrice": 410, "changePercent": -0.4, "volume": 1500},
            ]})),
            Endpoint::Crypto => {
                if self.fail_crypto.load(Ordering::SeqCst) {
                    Err(Error::provider("crypto feed offline"))
                } else {
                    Ok(json!([
                        {"symbol": "BTC", "name": "Bitcoin", "currentPrice": 43000, "changePercent": -1.1, "volume": 2000},
                    ]))
                }
            }
            Endpoint::News => Ok(json!({"data": [
                {"id": "n1", "title": "Fed holds rates", "source": "Newswire", "category": "economy"},
            ]})),
            Endpoint::Alerts => Ok(json!([
                {"id": "a1", "message": "AAPL crossed $180", "severity": "high"},
            ])),
            Endpoint::Dashboard => Ok(json!({"data": {
                "portfolio": {"totalValue": 25000, "totalChange": 340, "totalChangePercent": 1.38},
                "topGainers": [{"symbol": "AAPL", "assetType": "stock"}],
                "topLosers": [{"symbol": "BTC", "assetType": "crypto"}],
                "recentNews": [],
                "activeAlerts": [],
            }})),
            Endpoint::Portfolio => Ok(json!({"data": {
                "totalValue": 25000,
                "totalChange": 340,
                "totalChangePercent": 1.38,
                "assets": [
                    {"assetId": "AAPL", "quantity": 50, "value": 9000, "changePercent": 2.5},
                ],
            }})),
        }
    }
}

fn scripted_engine() -> (std::sync::Arc<ScriptedProvider>, SyncEngine) {
    let provider = std::sync::Arc::new(ScriptedProvider::new());
    let engine = SyncEngine::new(provider.clone(), Store::new().into_shared());
    (provider, engine)
}

#[test_log::test(tokio::test)]
async fn test_full_refresh_populates_every_collection() {
    let (_, engine) = scripted_engine();
    engine.refresh_all().await;

    let store = engine.store();
    let store = store.read().await;
    for collection in Collection::ALL {
        let lifecycle = store.lifecycle(collection);
        info!(%collection, ?lifecycle, "post-refresh lifecycle");
        assert!(!lifecycle.loading);
        assert!(lifecycle.error.is_none());
        assert!(lifecycle.has_loaded());
    }

    assert_eq!(store.assets.items.len(), 3);
    assert_eq!(store.news.items.len(), 1);
    assert_eq!(store.alerts.items.len(), 1);
    assert!(store.dashboard.summary.is_some());
    assert_eq!(store.portfolio_overview().unwrap().holdings.len(), 1);

    // Default view: price descending across both sub-collections.
    let displayed: Vec<&str> = store
        .assets
        .displayed()
        .iter()
        .map(|a| a.symbol.as_str())
        .collect();
    assert_eq!(displayed, vec!["BTC", "MSFT", "AAPL"]);
}

#[test_log::test(tokio::test)]
async fn test_filter_and_search_narrow_displayed_rows() {
    let (_, engine) = scripted_engine();
    engine.refresh_assets().await;
    let store = engine.store();
    let mut store = store.write().await;

    store.reduce(Action::SetAssetFilter(CategoryFilter::Only(
        AssetType::Stock,
    )));
    let stocks: Vec<&str> = store
        .assets
        .displayed()
        .iter()
        .map(|a| a.symbol.as_str())
        .collect();
    assert_eq!(stocks, vec!["MSFT", "AAPL"]);

    store.reduce(Action::SetAssetFilter(CategoryFilter::All));
    store.reduce(Action::SetAssetSearch("AAPL".to_string()));
    let found: Vec<&str> = store
        .assets
        .displayed()
        .iter()
        .map(|a| a.symbol.as_str())
        .collect();
    assert_eq!(found, vec!["AAPL"]);

    store.reduce(Action::SetAssetSearch("ETH".to_string()));
    assert!(store.assets.displayed().is_empty());
    assert_eq!(store.assets.items.len(), 3);
}

#[test_log::test(tokio::test)]
async fn test_crypto_outage_rejects_composite_and_preserves_items() {
    let (provider, engine) = scripted_engine();
    engine.refresh_assets().await;
    {
        let store = engine.store();
        let store = store.read().await;
        assert_eq!(store.assets.items.len(), 3);
    }

    provider.fail_crypto.store(true, Ordering::SeqCst);
    engine.refresh_assets().await;

    let store = engine.store();
    let store = store.read().await;
    assert_eq!(store.assets.items.len(), 3);
    let error = store.assets.lifecycle.error.as_deref().unwrap();
    assert!(error.contains("crypto feed offline"), "got: {error}");

    // Other collections stay interactive.
    assert!(store.news.lifecycle.error.is_none());
}

#[test_log::test(tokio::test(start_paused = true))]
async fn test_polling_refreshes_on_interval_without_timer_leakage() {
    let (provider, engine) = scripted_engine();
    let mut scheduler = PollScheduler::new();

    let config = pulsefeed::config::SyncConfig {
        assets_interval_secs: 30,
        news_interval_secs: 0,
        alerts_interval_secs: 0,
        dashboard_interval_secs: 0,
        portfolio_interval_secs: 0,
    };
    engine.start_polling(&mut scheduler, &config);
    assert_eq!(scheduler.active_count(), 1);

    // Re-register while the first interval is still outstanding; the old
    // timer must be replaced, not doubled.
    engine.start_polling(&mut scheduler, &config);
    assert_eq!(scheduler.active_count(), 1);

    tokio::time::sleep(Duration::from_secs(61)).await;
    // Immediate tick plus ticks at 30s and 60s.
    assert_eq!(provider.call_count(Endpoint::Stocks), 3);
    assert_eq!(provider.call_count(Endpoint::Crypto), 3);
    assert_eq!(provider.call_count(Endpoint::News), 0);

    let store = engine.store();
    let store = store.read().await;
    assert_eq!(store.assets.items.len(), 3);
    assert!(store.assets.lifecycle.has_loaded());

    drop(store);
    scheduler.cancel_all();
    tokio::time::sleep(Duration::from_secs(60)).await;
    assert_eq!(provider.call_count(Endpoint::Stocks), 3);
}
