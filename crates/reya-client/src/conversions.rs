//! Raw wire records → normalized core records.
//!
//! Conversion is total: a field that is missing or unparsable becomes its
//! sentinel (NaN for most numeric fields, 0.0 for depth and velocity,
//! `None` for identifiers and timestamps, "" for formatted timestamps).

use crate::models::*;
use reya_core::{
    coerce_f64, coerce_f64_or_zero, coerce_i64, format_epoch_ms, LiquidityParameter,
    MarketDefinition, MarketSummary,
};

pub fn market_definition(raw: RawMarketDefinition) -> MarketDefinition {
    MarketDefinition {
        symbol: raw.symbol.unwrap_or_default(),
        market_id: coerce_i64(raw.market_id.as_ref()),
        min_order_qty: coerce_f64(raw.min_order_qty.as_ref()),
        qty_step_size: coerce_f64(raw.qty_step_size.as_ref()),
        tick_size: coerce_f64(raw.tick_size.as_ref()),
        initial_margin_parameter: coerce_f64(raw.initial_margin_parameter.as_ref()),
        liquidation_margin_parameter: coerce_f64(raw.liquidation_margin_parameter.as_ref()),
        max_leverage: coerce_f64(raw.max_leverage.as_ref()),
        oi_cap: coerce_f64(raw.oi_cap.as_ref()),
    }
}

pub fn liquidity_parameter(raw: RawLiquidityParameter) -> LiquidityParameter {
    LiquidityParameter {
        symbol: raw.symbol.unwrap_or_default(),
        depth: coerce_f64_or_zero(raw.depth.as_ref()),
        velocity_multiplier: coerce_f64_or_zero(raw.velocity_multiplier.as_ref()),
    }
}

pub fn market_summary(raw: RawMarketSummary) -> MarketSummary {
    let updated_at = coerce_i64(raw.updated_at.as_ref());
    let prices_updated_at = coerce_i64(raw.prices_updated_at.as_ref());

    MarketSummary {
        symbol: raw.symbol.unwrap_or_default(),
        long_oi_qty: coerce_f64(raw.long_oi_qty.as_ref()),
        short_oi_qty: coerce_f64(raw.short_oi_qty.as_ref()),
        oi_qty: coerce_f64(raw.oi_qty.as_ref()),
        funding_rate: coerce_f64(raw.funding_rate.as_ref()),
        funding_rate_velocity: coerce_f64(raw.funding_rate_velocity.as_ref()),
        long_funding_value: coerce_f64(raw.long_funding_value.as_ref()),
        short_funding_value: coerce_f64(raw.short_funding_value.as_ref()),
        volume24h: coerce_f64(raw.volume24h.as_ref()),
        px_change24h: coerce_f64(raw.px_change24h.as_ref()),
        throttled_oracle_price: coerce_f64(raw.throttled_oracle_price.as_ref()),
        throttled_pool_price: coerce_f64(raw.throttled_pool_price.as_ref()),
        updated_at_str: updated_at.map(format_epoch_ms).unwrap_or_default(),
        prices_updated_at_str: prices_updated_at.map(format_epoch_ms).unwrap_or_default(),
        updated_at,
        prices_updated_at,
    }
}
