//! End-to-end checks over the liquidity derivation pipeline.

use reya_core::LiquidityParameter;
use reya_metrics::{
    derive_liquidity, liquidity_kpis, top_high_risk, top_undervalued, DeriveConfig,
};

fn param(symbol: &str, depth: f64, velocity: f64) -> LiquidityParameter {
    LiquidityParameter {
        symbol: symbol.to_string(),
        depth,
        velocity_multiplier: velocity,
    }
}

fn snapshot() -> Vec<LiquidityParameter> {
    vec![
        param("BTCRUSDPERP", 1000.0, 2.0),
        param("ETHRUSDPERP", 500.0, 3.0),
        param("SOLRUSDPERP", 120.0, 8.0),
        param("ARBRUSDPERP", 40.0, 1.5),
        param("NEWRUSDPERP", 0.0, 0.0),
    ]
}

#[test]
fn attractiveness_ranking_is_invariant_under_depth_scaling() {
    let base = snapshot();
    let config = DeriveConfig::default();

    let scaled: Vec<LiquidityParameter> = base
        .iter()
        .map(|p| param(&p.symbol, p.depth * 3.0, p.velocity_multiplier))
        .collect();

    let rank = |rows: &[LiquidityParameter]| -> Vec<String> {
        let mut derived = derive_liquidity(rows, &config);
        derived.sort_by(|a, b| {
            b.attractiveness_index
                .partial_cmp(&a.attractiveness_index)
                .unwrap()
        });
        derived.into_iter().map(|r| r.symbol).collect()
    };

    // Scaling every depth by the same positive factor changes the values
    // but must not reorder the markets.
    assert_eq!(rank(&base), rank(&scaled));

    let before = derive_liquidity(&base, &config);
    let after = derive_liquidity(&scaled, &config);
    assert_ne!(
        before[0].attractiveness_index,
        after[0].attractiveness_index
    );
}

#[test]
fn derivation_is_deterministic_and_leaves_input_untouched() {
    let rows = snapshot();
    let config = DeriveConfig::default();

    let first = derive_liquidity(&rows, &config);
    let second = derive_liquidity(&rows, &config);

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.symbol, b.symbol);
        assert_eq!(a.liquidity_score, b.liquidity_score);
        assert_eq!(a.attractiveness_index, b.attractiveness_index);
    }
    // Inputs keep their original values.
    assert_eq!(rows[0].depth, 1000.0);
    assert_eq!(rows[4].depth, 0.0);
}

#[test]
fn zero_score_market_dominates_undervalued_ranking() {
    let derived = derive_liquidity(&snapshot(), &DeriveConfig::default());
    let top = top_undervalued(&derived, 1);
    assert_eq!(top[0].symbol, "NEWRUSDPERP");
    assert_eq!(top[0].undervalued_metric, f64::INFINITY);
}

#[test]
fn high_risk_ranking_prefers_thin_fast_markets() {
    let derived = derive_liquidity(&snapshot(), &DeriveConfig::default());
    let risky = top_high_risk(&derived, 5);
    // Zero depth puts the smoothed ratio far above everything else.
    assert_eq!(risky[0].symbol, "NEWRUSDPERP");
    // SOL (120 depth, 8 velocity) is riskier than BTC (1000 depth, 2 velocity).
    let sol = risky.iter().position(|r| r.symbol == "SOLRUSDPERP").unwrap();
    let btc = risky.iter().position(|r| r.symbol == "BTCRUSDPERP").unwrap();
    assert!(sol < btc);
}

#[test]
fn kpis_match_hand_computed_snapshot() {
    let derived = derive_liquidity(&snapshot(), &DeriveConfig::default());
    let kpis = liquidity_kpis(&derived);

    assert_eq!(kpis.market_count, 5);
    let highest = kpis.highest_score.unwrap();
    assert_eq!(highest.value, 2000.0);
    assert_eq!(highest.markets, vec!["BTCRUSDPERP"]);
    // The zero-score listing is excluded from the lowest-score KPI.
    let lowest = kpis.lowest_nonzero_score.unwrap();
    assert_eq!(lowest.value, 60.0);
    assert_eq!(lowest.markets, vec!["ARBRUSDPERP"]);
}
