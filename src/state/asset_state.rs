//! Unified asset collection state.

use crate::query::{self, CategoryFilter, SortSpec, SortValue, TableRow};
use crate::state::FetchLifecycle;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Provenance tag for records in the unified asset collection.
///
/// The collection is assembled from two independent sub-fetches; every
/// record is tagged with the sub-collection it came from before merging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    #[default]
    Stock,
    Crypto,
}

impl std::fmt::Display for AssetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stock => write!(f, "stock"),
            Self::Crypto => write!(f, "crypto"),
        }
    }
}

/// A tradeable asset row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    /// Ticker symbol.
    pub symbol: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Latest traded price.
    #[serde(default)]
    pub current_price: Option<Decimal>,
    /// 24h change percentage.
    #[serde(default)]
    pub change_percent: Option<Decimal>,
    /// 24h traded volume.
    #[serde(default)]
    pub volume: Option<Decimal>,
    /// Which sub-collection the record came from.
    #[serde(default)]
    pub asset_type: AssetType,
}

impl Asset {
    /// Check if the asset moved up (or held flat) over the last 24h.
    pub fn is_gaining(&self) -> bool {
        self.change_percent
            .map(|change| change >= Decimal::ZERO)
            .unwrap_or(false)
    }
}

/// Sortable columns of the assets table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetSortKey {
    Symbol,
    Name,
    CurrentPrice,
    ChangePercent,
    Volume,
    AssetType,
}

impl TableRow for Asset {
    type SortKey = AssetSortKey;
    type Category = AssetType;

    fn category(&self) -> AssetType {
        self.asset_type
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.symbol, &self.name]
    }

    fn sort_value(&self, key: &AssetSortKey) -> SortValue {
        match key {
            AssetSortKey::Symbol => SortValue::Text(self.symbol.clone()),
            AssetSortKey::Name => SortValue::Text(self.name.clone()),
            AssetSortKey::CurrentPrice => self
                .current_price
                .map(SortValue::Number)
                .unwrap_or(SortValue::Missing),
            AssetSortKey::ChangePercent => self
                .change_percent
                .map(SortValue::Number)
                .unwrap_or(SortValue::Missing),
            AssetSortKey::Volume => self
                .volume
                .map(SortValue::Number)
                .unwrap_or(SortValue::Missing),
            AssetSortKey::AssetType => SortValue::Text(self.asset_type.to_string()),
        }
    }
}

/// State for the unified assets table.
#[derive(Debug)]
pub struct AssetState {
    /// All loaded assets, stocks first, then crypto, in provider order.
    pub items: Vec<Asset>,
    /// Fetch lifecycle tracking.
    pub lifecycle: FetchLifecycle,
    /// Categorical asset-type filter.
    pub filter_type: CategoryFilter<AssetType>,
    /// Global search query over symbol and name.
    pub search_query: String,
    /// Active sort instructions, primary key first.
    pub sorting: Vec<SortSpec<AssetSortKey>>,
}

impl Default for AssetState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            lifecycle: FetchLifecycle::default(),
            filter_type: CategoryFilter::All,
            search_query: String::new(),
            sorting: vec![SortSpec::desc(AssetSortKey::CurrentPrice)],
        }
    }
}

impl AssetState {
    /// Compute the rows to display under the current view parameters.
    pub fn displayed(&self) -> Vec<&Asset> {
        query::displayed_rows(
            &self.items,
            &self.filter_type,
            &self.search_query,
            &self.sorting,
        )
    }

    /// Get the count of displayed rows.
    pub fn displayed_count(&self) -> usize {
        self.displayed().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn create_test_assets() -> Vec<Asset> {
        vec![
            Asset {
                symbol: "AAPL".to_string(),
                name: "Apple Inc.".to_string(),
                current_price: Some(dec!(180)),
                change_percent: Some(dec!(2.5)),
                volume: Some(dec!(1000)),
                asset_type: AssetType::Stock,
            },
            Asset {
                symbol: "BTC".to_string(),
                name: "Bitcoin".to_string(),
                current_price: Some(dec!(43000)),
                change_percent: Some(dec!(-1.1)),
                volume: Some(dec!(2000)),
                asset_type: AssetType::Crypto,
            },
        ]
    }

    fn symbols<'a>(rows: &'a [&'a Asset]) -> Vec<&'a str> {
        rows.iter().map(|a| a.symbol.as_str()).collect()
    }

    #[test]
    fn test_default_sorting_is_price_descending() {
        let state = AssetState {
            items: create_test_assets(),
            ..AssetState::default()
        };
        assert_eq!(symbols(&state.displayed()), vec!["BTC", "AAPL"]);
    }

    #[test]
    fn test_filter_by_asset_type() {
        let state = AssetState {
            items: create_test_assets(),
            filter_type: CategoryFilter::Only(AssetType::Stock),
            ..AssetState::default()
        };
        assert_eq!(symbols(&state.displayed()), vec!["AAPL"]);
    }

    #[test]
    fn test_search_matches_symbol_with_all_filter() {
        let state = AssetState {
            items: create_test_assets(),
            search_query: "AAPL".to_string(),
            ..AssetState::default()
        };
        assert_eq!(symbols(&state.displayed()), vec!["AAPL"]);
    }

    #[test]
    fn test_search_without_match_displays_nothing() {
        let state = AssetState {
            items: create_test_assets(),
            search_query: "ETH".to_string(),
            ..AssetState::default()
        };
        assert!(state.displayed().is_empty());
        assert_eq!(state.displayed_count(), 0);
    }

    #[test]
    fn test_search_matches_name_case_insensitively() {
        let state = AssetState {
            items: create_test_assets(),
            search_query: "bitcoin".to_string(),
            ..AssetState::default()
        };
        assert_eq!(symbols(&state.displayed()), vec!["BTC"]);
    }

    #[test]
    fn test_is_gaining() {
        let assets = create_test_assets();
        assert!(assets[0].is_gaining());
        assert!(!assets[1].is_gaining());
    }
}
