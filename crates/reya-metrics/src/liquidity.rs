//! Derived liquidity metrics.
//!
//! All functions are pure over one immutable snapshot: derivation never
//! mutates its input and recomputing over the same snapshot is
//! deterministic.

use crate::stats::{cmp_desc, leader_max, leader_min_positive, nan_mean, population_variance};
use crate::types::{DeriveConfig, LiquidityKpis, LiquidityMetrics, RiskIndexStrategy};
use reya_core::LiquidityParameter;

/// Fixed smoothing constant for denominators that may be zero.
/// Not statistically meaningful, only there to avoid division by zero.
pub const EPSILON: f64 = 1e-12;

/// Compute the derived columns for a full liquidity snapshot.
///
/// `attractiveness_index` depends on the population variance of
/// `liquidity_score` across the whole snapshot, so derivation is a
/// snapshot-level operation even though every other column is
/// elementwise.
pub fn derive_liquidity(rows: &[LiquidityParameter], config: &DeriveConfig) -> Vec<LiquidityMetrics> {
    let scores: Vec<f64> = rows
        .iter()
        .map(|r| r.depth * r.velocity_multiplier)
        .collect();

    let variance = population_variance(&scores);
    let variance_denom = if variance == 0.0 { 1.0 } else { variance };

    rows.iter()
        .zip(scores)
        .map(|(row, liquidity_score)| {
            let depth = row.depth;
            let velocity = row.velocity_multiplier;

            let stability_score = depth / (velocity + EPSILON);
            // Explicit branch: zero depth means zero efficiency, not NaN.
            let efficiency_score = if depth > 0.0 {
                liquidity_score / depth
            } else {
                0.0
            };
            let risk_index = match config.risk_index {
                RiskIndexStrategy::Smoothed => velocity / (depth + EPSILON),
                RiskIndexStrategy::Raw => velocity / depth,
            };
            // Explicit branch: zero score markets are maximally undervalued.
            let undervalued_metric = if liquidity_score > 0.0 {
                depth / (liquidity_score + EPSILON)
            } else {
                f64::INFINITY
            };
            let attractiveness_index = liquidity_score.max(EPSILON).ln() / variance_denom;

            LiquidityMetrics {
                symbol: row.symbol.clone(),
                depth,
                velocity_multiplier: velocity,
                liquidity_score,
                stability_score,
                efficiency_score,
                risk_index,
                undervalued_metric,
                attractiveness_index,
            }
        })
        .collect()
}

/// Snapshot KPIs over the derived liquidity table.
pub fn liquidity_kpis(rows: &[LiquidityMetrics]) -> LiquidityKpis {
    LiquidityKpis {
        market_count: rows.len(),
        highest_score: leader_max(rows, |r| &r.symbol, |r| r.liquidity_score),
        lowest_nonzero_score: leader_min_positive(rows, |r| &r.symbol, |r| r.liquidity_score),
        average_score: nan_mean(rows.iter().map(|r| r.liquidity_score)),
        highest_velocity: leader_max(rows, |r| &r.symbol, |r| r.velocity_multiplier),
        lowest_nonzero_velocity: leader_min_positive(
            rows,
            |r| &r.symbol,
            |r| r.velocity_multiplier,
        ),
        average_velocity: nan_mean(rows.iter().map(|r| r.velocity_multiplier)),
    }
}

fn top_by(
    rows: &[LiquidityMetrics],
    n: usize,
    key: impl Fn(&LiquidityMetrics) -> f64,
) -> Vec<LiquidityMetrics> {
    let mut out = rows.to_vec();
    out.sort_by(|a, b| cmp_desc(key(a), key(b)));
    out.truncate(n);
    out
}

/// Markets ranked by liquidity score, descending.
pub fn top_most_liquid(rows: &[LiquidityMetrics], n: usize) -> Vec<LiquidityMetrics> {
    top_by(rows, n, |r| r.liquidity_score)
}

/// Markets ranked by velocity multiplier, descending.
pub fn top_most_volatile(rows: &[LiquidityMetrics], n: usize) -> Vec<LiquidityMetrics> {
    top_by(rows, n, |r| r.velocity_multiplier)
}

/// Markets ranked by undervalued metric (high depth, low score), descending.
pub fn top_undervalued(rows: &[LiquidityMetrics], n: usize) -> Vec<LiquidityMetrics> {
    top_by(rows, n, |r| r.undervalued_metric)
}

/// Markets ranked by risk index (low depth, high velocity), descending.
pub fn top_high_risk(rows: &[LiquidityMetrics], n: usize) -> Vec<LiquidityMetrics> {
    top_by(rows, n, |r| r.risk_index)
}
