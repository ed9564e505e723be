//! Sync engine driving collection refreshes.
//!
//! Each refresh runs one fetch through its full lifecycle: dispatch the
//! pending transition, await the provider, then apply the fulfilled or
//! rejected transition. The only suspension point is the provider call;
//! both transitions are applied synchronously under the store's write
//! guard.

use crate::config::SyncConfig;
use crate::error::{Error, Result};
use crate::provider::{Endpoint, RemoteCollectionProvider, envelope};
use crate::state::{
    Action, Alert, Asset, AssetType, Collection, DashboardSummary, FetchPayload, NewsEntry,
    PortfolioSummary, SharedStore,
};
use crate::sync::PollScheduler;
use futures::future;
use std::sync::Arc;
use tracing::{debug, warn};

/// Refreshes collections from the remote provider into the shared store.
#[derive(Clone)]
pub struct SyncEngine {
    /// Remote payload source.
    provider: Arc<dyn RemoteCollectionProvider>,
    /// Shared state store.
    store: SharedStore,
}

impl SyncEngine {
    /// Create a new sync engine.
    pub fn new(provider: Arc<dyn RemoteCollectionProvider>, store: SharedStore) -> Self {
        Self { provider, store }
    }

    /// Get a handle to the shared store.
    pub fn store(&self) -> SharedStore {
        self.store.clone()
    }

    /// Refresh one collection.
    pub async fn refresh(&self, collection: Collection) {
        match collection {
            Collection::Assets => self.refresh_assets().await,
            Collection::News => self.refresh_news().await,
            Collection::Alerts => self.refresh_alerts().await,
            Collection::Dashboard => self.refresh_dashboard().await,
            Collection::Portfolio => self.refresh_portfolio().await,
        }
    }

    /// Refresh every collection concurrently.
    pub async fn refresh_all(&self) {
        tokio::join!(
            self.refresh_assets(),
            self.refresh_news(),
            self.refresh_alerts(),
            self.refresh_dashboard(),
            self.refresh_portfolio(),
        );
    }

    /// Install polling timers for every collection with a non-zero
    /// interval.
    pub fn start_polling(&self, scheduler: &mut PollScheduler, config: &SyncConfig) {
        for collection in Collection::ALL {
            let interval = config.poll_interval(collection);
            if interval.is_zero() {
                continue;
            }
            let engine = self.clone();
            scheduler.schedule(collection, interval, move || {
                let engine = engine.clone();
                async move { engine.refresh(collection).await }
            });
        }
    }

    /// Refresh the unified asset collection.
    ///
    /// Stocks and crypto are fetched concurrently and merged under
    /// provenance tags, stocks first. Either sub-fetch failing rejects the
    /// whole composite; no partial data reaches the store.
    pub async fn refresh_assets(&self) {
        let seq = self.begin(Collection::Assets).await;
        match self.fetch_assets().await {
            Ok(items) => self.complete(seq, FetchPayload::Assets(items)).await,
            Err(error) => self.fail(Collection::Assets, seq, error).await,
        }
    }

    /// Refresh the news collection.
    pub async fn refresh_news(&self) {
        let seq = self.begin(Collection::News).await;
        match self.provider.fetch_collection(Endpoint::News).await {
            Ok(payload) => {
                let items: Vec<NewsEntry> = envelope::items(Collection::News, payload);
                self.complete(seq, FetchPayload::News(items)).await;
            }
            Err(error) => self.fail(Collection::News, seq, error).await,
        }
    }

    /// Refresh the alerts collection.
    pub async fn refresh_alerts(&self) {
        let seq = self.begin(Collection::Alerts).await;
        match self.provider.fetch_collection(Endpoint::Alerts).await {
            Ok(payload) => {
                let items: Vec<Alert> = envelope::items(Collection::Alerts, payload);
                self.complete(seq, FetchPayload::Alerts(items)).await;
            }
            Err(error) => self.fail(Collection::Alerts, seq, error).await,
        }
    }

    /// Refresh the dashboard aggregate.
    pub async fn refresh_dashboard(&self) {
        let seq = self.begin(Collection::Dashboard).await;
        match self.provider.fetch_collection(Endpoint::Dashboard).await {
            Ok(payload) => {
                let summary: Option<DashboardSummary> =
                    envelope::record(Collection::Dashboard, payload);
                self.complete(seq, FetchPayload::Dashboard(summary)).await;
            }
            Err(error) => self.fail(Collection::Dashboard, seq, error).await,
        }
    }

    /// Refresh the portfolio collection.
    pub async fn refresh_portfolio(&self) {
        let seq = self.begin(Collection::Portfolio).await;
        match self.provider.fetch_collection(Endpoint::Portfolio).await {
            Ok(payload) => {
                let summary: Option<PortfolioSummary> =
                    envelope::record(Collection::Portfolio, payload);
                self.complete(seq, FetchPayload::Portfolio(summary)).await;
            }
            Err(error) => self.fail(Collection::Portfolio, seq, error).await,
        }
    }

    async fn fetch_assets(&self) -> Result<Vec<Asset>> {
        let (stocks, crypto) = future::try_join(
            self.provider.fetch_collection(Endpoint::Stocks),
            self.provider.fetch_collection(Endpoint::Crypto),
        )
        .await?;

        let mut items: Vec<Asset> = envelope::items(Collection::Assets, stocks);
        for asset in &mut items {
            asset.asset_type = AssetType::Stock;
        }
        let mut crypto_items: Vec<Asset> = envelope::items(Collection::Assets, crypto);
        for asset in &mut crypto_items {
            asset.asset_type = AssetType::Crypto;
        }
        items.extend(crypto_items);
        Ok(items)
    }

    async fn begin(&self, collection: Collection) -> u64 {
        let mut store = self.store.write().await;
        let seq = store.begin_fetch(collection);
        debug!(%collection, seq, "fetch dispatched");
        seq
    }

    async fn complete(&self, seq: u64, payload: FetchPayload) {
        let mut store = self.store.write().await;
        store.reduce(Action::FetchCompleted { seq, payload });
    }

    async fn fail(&self, collection: Collection, seq: u64, error: Error) {
        warn!(%collection, %error, "fetch rejected");
        let mut store = self.store.write().await;
        store.reduce(Action::FetchFailed {
            collection,
            seq,
            message: Some(error.to_string()),
        });
    }
}
