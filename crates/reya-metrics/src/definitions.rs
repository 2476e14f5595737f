//! describe()-style column statistics for market definitions.

use crate::stats::{nan_max, nan_mean, nan_min, sample_std};
use crate::types::ColumnStats;
use reya_core::MarketDefinition;

/// The numeric columns of a definition snapshot, in display order.
const COLUMNS: [(&str, fn(&MarketDefinition) -> f64); 7] = [
    ("minOrderQty", |d| d.min_order_qty),
    ("qtyStepSize", |d| d.qty_step_size),
    ("tickSize", |d| d.tick_size),
    ("initialMarginParameter", |d| d.initial_margin_parameter),
    ("liquidationMarginParameter", |d| {
        d.liquidation_margin_parameter
    }),
    ("maxLeverage", |d| d.max_leverage),
    ("oiCap", |d| d.oi_cap),
];

/// Summary statistics over every numeric definition column.
///
/// Missing values are skipped per column, so `count` can differ between
/// columns of the same snapshot.
pub fn definition_stats(rows: &[MarketDefinition]) -> Vec<ColumnStats> {
    COLUMNS
        .iter()
        .map(|(name, key)| {
            let values: Vec<f64> = rows.iter().map(key).collect();
            let count = values.iter().filter(|v| !v.is_nan()).count();
            ColumnStats {
                column: (*name).to_string(),
                count,
                mean: nan_mean(values.iter().copied()),
                std_dev: sample_std(values.iter().copied()),
                min: nan_min(values.iter().copied()),
                max: nan_max(values.iter().copied()),
            }
        })
        .collect()
}
