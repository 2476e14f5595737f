//! Raw wire models for the Reya API.
//!
//! The endpoints return arrays of flat objects with an open key set: keys
//! may be absent, extra keys may appear, and numeric fields arrive as
//! either JSON numbers or strings depending on the field and record.
//! Every field is therefore optional, and numeric-ish fields are kept as
//! `serde_json::Value` until normalization.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawMarketDefinition {
    pub symbol: Option<String>,
    pub market_id: Option<Value>,
    pub min_order_qty: Option<Value>,
    pub qty_step_size: Option<Value>,
    pub tick_size: Option<Value>,
    pub initial_margin_parameter: Option<Value>,
    pub liquidation_margin_parameter: Option<Value>,
    pub max_leverage: Option<Value>,
    pub oi_cap: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawLiquidityParameter {
    pub symbol: Option<String>,
    pub depth: Option<Value>,
    pub velocity_multiplier: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawMarketSummary {
    pub symbol: Option<String>,
    pub long_oi_qty: Option<Value>,
    pub short_oi_qty: Option<Value>,
    pub oi_qty: Option<Value>,
    pub funding_rate: Option<Value>,
    pub funding_rate_velocity: Option<Value>,
    pub long_funding_value: Option<Value>,
    pub short_funding_value: Option<Value>,
    pub volume24h: Option<Value>,
    pub px_change24h: Option<Value>,
    pub throttled_oracle_price: Option<Value>,
    pub throttled_pool_price: Option<Value>,
    pub updated_at: Option<Value>,
    pub prices_updated_at: Option<Value>,
}
