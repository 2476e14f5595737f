use serde::{Deserialize, Serialize};

/// One tradable market as configured on the exchange.
///
/// Numeric fields use an IEEE-754 NaN sentinel when the API omits the key
/// or the value does not parse; `market_id` stays `None` in that case.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketDefinition {
    pub symbol: String,
    pub market_id: Option<i64>,
    pub min_order_qty: f64,
    pub qty_step_size: f64,
    pub tick_size: f64,
    pub initial_margin_parameter: f64,
    pub liquidation_margin_parameter: f64,
    pub max_leverage: f64,
    pub oi_cap: f64,
}

/// Per-market liquidity configuration.
///
/// `depth` and `velocity_multiplier` fall back to 0.0 (not NaN) on parse
/// failure; downstream derivation relies on that.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiquidityParameter {
    pub symbol: String,
    pub depth: f64,
    pub velocity_multiplier: f64,
}

/// Live per-market summary, the fastest-moving of the three record kinds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketSummary {
    pub symbol: String,
    pub long_oi_qty: f64,
    pub short_oi_qty: f64,
    pub oi_qty: f64,
    pub funding_rate: f64,
    pub funding_rate_velocity: f64,
    pub long_funding_value: f64,
    pub short_funding_value: f64,
    pub volume24h: f64,
    pub px_change24h: f64,
    pub throttled_oracle_price: f64,
    pub throttled_pool_price: f64,
    pub updated_at: Option<i64>,
    pub prices_updated_at: Option<i64>,
    /// Local calendar time for `updated_at`, empty when unavailable.
    pub updated_at_str: String,
    /// Local calendar time for `prices_updated_at`, empty when unavailable.
    pub prices_updated_at_str: String,
}

impl MarketSummary {
    /// Sum of the long and short sides, independently of the reported `oi_qty`.
    pub fn oi_side_sum(&self) -> f64 {
        self.long_oi_qty + self.short_oi_qty
    }
}
