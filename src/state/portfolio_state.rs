//! Portfolio collection state.

use crate::state::FetchLifecycle;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One held position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    /// Asset identifier.
    pub asset_id: String,
    /// Units held.
    #[serde(default)]
    pub quantity: Decimal,
    /// Current market value of the position.
    #[serde(default)]
    pub value: Decimal,
    /// 24h change percentage.
    #[serde(default)]
    pub change_percent: Decimal,
}

/// Portfolio summary with per-holding breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    /// Total portfolio value.
    #[serde(default)]
    pub total_value: Decimal,
    /// Absolute 24h change.
    #[serde(default)]
    pub total_change: Decimal,
    /// Relative 24h change percentage.
    #[serde(default)]
    pub total_change_percent: Decimal,
    /// Individual holdings.
    #[serde(default, rename = "assets")]
    pub holdings: Vec<Holding>,
}

impl PortfolioSummary {
    /// Check if the portfolio moved up (or held flat) over the last 24h.
    pub fn is_gaining(&self) -> bool {
        self.total_change >= Decimal::ZERO
    }

    /// Sum of the individual holding values.
    pub fn holdings_value(&self) -> Decimal {
        self.holdings.iter().map(|h| h.value).sum()
    }

    /// Derive an evenly spaced value series ending at the current total,
    /// back-projected from the 24h change percentage. Used for the
    /// portfolio trend sparkline.
    pub fn value_trend(&self, points: usize) -> Vec<Decimal> {
        if points == 0 || self.total_value == Decimal::ZERO {
            return Vec::new();
        }
        if points == 1 {
            return vec![self.total_value];
        }

        let mut growth = Decimal::ONE + self.total_change_percent / Decimal::ONE_HUNDRED;
        if growth == Decimal::ZERO {
            growth = Decimal::ONE;
        }
        let start_value = self.total_value / growth;
        let step = (self.total_value - start_value) / Decimal::from(points as u64 - 1);
        (0..points)
            .map(|i| (start_value + step * Decimal::from(i as u64)).round_dp(2))
            .collect()
    }
}

/// State for the portfolio collection.
#[derive(Debug, Default)]
pub struct PortfolioState {
    /// Latest portfolio summary.
    pub summary: Option<PortfolioSummary>,
    /// Fetch lifecycle tracking.
    pub lifecycle: FetchLifecycle,
}
