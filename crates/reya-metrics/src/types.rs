use reya_core::MarketSummary;
use serde::{Deserialize, Serialize};

/// Formula variant for the per-market risk index.
///
/// The reference dashboards disagree between revisions: some smooth the
/// denominator with epsilon, some divide raw. Neither is authoritative,
/// so the choice stays explicit configuration instead of being unified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskIndexStrategy {
    /// `velocity_multiplier / (depth + epsilon)` — never divides by zero.
    #[default]
    Smoothed,
    /// `velocity_multiplier / depth` — IEEE semantics when depth is zero.
    Raw,
}

/// Configuration for snapshot derivation.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeriveConfig {
    pub risk_index: RiskIndexStrategy,
}

/// One liquidity row with its derived columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiquidityMetrics {
    pub symbol: String,
    pub depth: f64,
    pub velocity_multiplier: f64,
    pub liquidity_score: f64,
    pub stability_score: f64,
    pub efficiency_score: f64,
    pub risk_index: f64,
    pub undervalued_metric: f64,
    pub attractiveness_index: f64,
}

/// One market summary row with its derived columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryMetrics {
    #[serde(flatten)]
    pub base: MarketSummary,
    #[serde(rename = "oiImbalance")]
    pub oi_imbalance: f64,
    #[serde(rename = "priceSpread")]
    pub price_spread: f64,
    #[serde(rename = "absPriceSpread")]
    pub abs_price_spread: f64,
    #[serde(rename = "fundingPressure")]
    pub funding_pressure: f64,
    #[serde(rename = "normalizedFunding")]
    pub normalized_funding: f64,
}

/// An extreme value for one column together with every market tied at it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnLeader {
    pub value: f64,
    pub markets: Vec<String>,
}

/// Snapshot-level KPIs for the liquidity table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiquidityKpis {
    pub market_count: usize,
    pub highest_score: Option<ColumnLeader>,
    /// Lowest score ignoring zero-score markets.
    pub lowest_nonzero_score: Option<ColumnLeader>,
    pub average_score: Option<f64>,
    pub highest_velocity: Option<ColumnLeader>,
    pub lowest_nonzero_velocity: Option<ColumnLeader>,
    pub average_velocity: Option<f64>,
}

/// Snapshot-level KPIs for the summary table.
///
/// Totals are `None` (not zero) when every underlying value is missing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryKpis {
    pub total_markets: usize,
    pub total_volume24h: Option<f64>,
    pub total_oi: Option<f64>,
    pub total_long_oi: Option<f64>,
    pub total_short_oi: Option<f64>,
    pub average_funding_rate: Option<f64>,
    pub top_volume: Option<ColumnLeader>,
    pub top_oi: Option<ColumnLeader>,
}

/// A summary row whose reported total open interest disagrees with the
/// sum of its long and short sides.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OiMismatch {
    pub symbol: String,
    pub long_oi_qty: f64,
    pub short_oi_qty: f64,
    pub reported_oi_qty: f64,
    pub side_sum: f64,
    pub difference: f64,
}

/// describe()-style statistics for one numeric column.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnStats {
    pub column: String,
    /// Number of present (non-NaN) values.
    pub count: usize,
    pub mean: Option<f64>,
    /// Sample standard deviation (ddof = 1); `None` below two values.
    pub std_dev: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}
