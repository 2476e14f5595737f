//! Derived market-summary metrics, KPIs and leaderboards.

use crate::stats::{cmp_asc, cmp_desc, leader_max, nan_mean, nan_sum};
use crate::types::{OiMismatch, SummaryKpis, SummaryMetrics};
use reya_core::MarketSummary;
use std::collections::HashSet;

/// Tolerance for the open-interest consistency check. The API reports
/// `oiQty` independently of the long/short sides, so tiny rounding drift
/// is expected and only real disagreement is flagged.
pub const DEFAULT_OI_TOLERANCE: f64 = 1e-9;

/// Compute the derived columns for a full summary snapshot.
pub fn derive_summary(rows: &[MarketSummary]) -> Vec<SummaryMetrics> {
    rows.iter()
        .map(|row| {
            let oi_imbalance = row.long_oi_qty - row.short_oi_qty;
            let price_spread = row.throttled_pool_price - row.throttled_oracle_price;
            let funding_pressure = row.funding_rate * oi_imbalance;
            // A zero oracle price makes the ratio undefined, not infinite.
            let normalized_funding = if row.throttled_oracle_price == 0.0 {
                f64::NAN
            } else {
                row.funding_rate / row.throttled_oracle_price
            };

            SummaryMetrics {
                base: row.clone(),
                oi_imbalance,
                price_spread,
                abs_price_spread: price_spread.abs(),
                funding_pressure,
                normalized_funding,
            }
        })
        .collect()
}

/// Snapshot KPIs over the derived summary table.
pub fn summary_kpis(rows: &[SummaryMetrics]) -> SummaryKpis {
    let total_markets = rows
        .iter()
        .map(|r| r.base.symbol.as_str())
        .collect::<HashSet<_>>()
        .len();

    SummaryKpis {
        total_markets,
        total_volume24h: nan_sum(rows.iter().map(|r| r.base.volume24h)),
        total_oi: nan_sum(rows.iter().map(|r| r.base.oi_qty)),
        total_long_oi: nan_sum(rows.iter().map(|r| r.base.long_oi_qty)),
        total_short_oi: nan_sum(rows.iter().map(|r| r.base.short_oi_qty)),
        average_funding_rate: nan_mean(rows.iter().map(|r| r.base.funding_rate)),
        top_volume: leader_max(rows, |r| &r.base.symbol, |r| r.base.volume24h),
        top_oi: leader_max(rows, |r| &r.base.symbol, |r| r.base.oi_qty),
    }
}

fn sorted_by(
    rows: &[SummaryMetrics],
    n: usize,
    cmp: impl Fn(&SummaryMetrics, &SummaryMetrics) -> std::cmp::Ordering,
) -> Vec<SummaryMetrics> {
    let mut out = rows.to_vec();
    out.sort_by(|a, b| cmp(a, b));
    out.truncate(n);
    out
}

/// Markets with the highest funding rates.
pub fn top_positive_funding(rows: &[SummaryMetrics], n: usize) -> Vec<SummaryMetrics> {
    sorted_by(rows, n, |a, b| cmp_desc(a.base.funding_rate, b.base.funding_rate))
}

/// Markets with the lowest (most negative) funding rates.
pub fn top_negative_funding(rows: &[SummaryMetrics], n: usize) -> Vec<SummaryMetrics> {
    sorted_by(rows, n, |a, b| cmp_asc(a.base.funding_rate, b.base.funding_rate))
}

/// All markets ordered by pool/oracle divergence, widest first.
pub fn price_divergence(rows: &[SummaryMetrics]) -> Vec<SummaryMetrics> {
    sorted_by(rows, rows.len(), |a, b| {
        cmp_desc(a.abs_price_spread, b.abs_price_spread)
    })
}

/// Markets ordered by 24h volume, descending.
pub fn top_volume(rows: &[SummaryMetrics], n: usize) -> Vec<SummaryMetrics> {
    sorted_by(rows, n, |a, b| cmp_desc(a.base.volume24h, b.base.volume24h))
}

/// Rows whose reported `oiQty` disagrees with `longOiQty + shortOiQty`
/// beyond `tolerance`. Rows where either side of the comparison is
/// missing are skipped; absence is not a disagreement.
pub fn oi_consistency(rows: &[SummaryMetrics], tolerance: f64) -> Vec<OiMismatch> {
    rows.iter()
        .filter_map(|r| {
            let side_sum = r.base.oi_side_sum();
            let reported = r.base.oi_qty;
            if side_sum.is_nan() || reported.is_nan() {
                return None;
            }
            let difference = side_sum - reported;
            if difference.abs() > tolerance {
                Some(OiMismatch {
                    symbol: r.base.symbol.clone(),
                    long_oi_qty: r.base.long_oi_qty,
                    short_oi_qty: r.base.short_oi_qty,
                    reported_oi_qty: reported,
                    side_sum,
                    difference,
                })
            } else {
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(symbol: &str) -> MarketSummary {
        MarketSummary {
            symbol: symbol.to_string(),
            long_oi_qty: f64::NAN,
            short_oi_qty: f64::NAN,
            oi_qty: f64::NAN,
            funding_rate: f64::NAN,
            funding_rate_velocity: f64::NAN,
            long_funding_value: f64::NAN,
            short_funding_value: f64::NAN,
            volume24h: f64::NAN,
            px_change24h: f64::NAN,
            throttled_oracle_price: f64::NAN,
            throttled_pool_price: f64::NAN,
            updated_at: None,
            prices_updated_at: None,
            updated_at_str: String::new(),
            prices_updated_at_str: String::new(),
        }
    }

    #[test]
    fn test_derived_columns() {
        let mut row = summary("BTCRUSDPERP");
        row.long_oi_qty = 10.5;
        row.short_oi_qty = 8.25;
        row.funding_rate = 0.0001;
        row.throttled_oracle_price = 65000.0;
        row.throttled_pool_price = 64990.0;

        let derived = derive_summary(&[row]);
        let m = &derived[0];

        assert_eq!(m.oi_imbalance, 2.25);
        assert_eq!(m.price_spread, -10.0);
        assert_eq!(m.abs_price_spread, 10.0);
        assert_eq!(m.funding_pressure, 0.0001 * 2.25);
        assert_eq!(m.normalized_funding, 0.0001 / 65000.0);
    }

    #[test]
    fn test_oi_imbalance_is_consistent_with_side_sum() {
        let mut row = summary("X");
        row.long_oi_qty = 10.5;
        row.short_oi_qty = 8.25;
        let derived = derive_summary(&[row]);
        let m = &derived[0];
        // imbalance + 2·short == long + short for exactly representable values
        assert_eq!(
            m.oi_imbalance + 2.0 * m.base.short_oi_qty,
            m.base.long_oi_qty + m.base.short_oi_qty
        );
    }

    #[test]
    fn test_zero_oracle_price_gives_nan_not_inf() {
        let mut row = summary("X");
        row.funding_rate = 0.0001;
        row.throttled_oracle_price = 0.0;
        let derived = derive_summary(&[row]);
        assert!(derived[0].normalized_funding.is_nan());
    }

    #[test]
    fn test_kpis_skip_missing_values() {
        let mut a = summary("A");
        a.volume24h = 100.0;
        a.oi_qty = 5.0;
        a.funding_rate = 0.001;
        let b = summary("B"); // everything missing

        let derived = derive_summary(&[a, b]);
        let kpis = summary_kpis(&derived);

        assert_eq!(kpis.total_markets, 2);
        assert_eq!(kpis.total_volume24h, Some(100.0));
        assert_eq!(kpis.total_oi, Some(5.0));
        assert_eq!(kpis.average_funding_rate, Some(0.001));
        assert_eq!(kpis.top_volume.unwrap().markets, vec!["A"]);
    }

    #[test]
    fn test_kpis_all_missing_totals_are_none() {
        let derived = derive_summary(&[summary("A"), summary("B")]);
        let kpis = summary_kpis(&derived);
        assert_eq!(kpis.total_volume24h, None);
        assert_eq!(kpis.total_oi, None);
        assert_eq!(kpis.average_funding_rate, None);
        assert!(kpis.top_volume.is_none());
    }

    #[test]
    fn test_funding_leaderboards() {
        let mut a = summary("A");
        a.funding_rate = 0.002;
        let mut b = summary("B");
        b.funding_rate = -0.001;
        let mut c = summary("C");
        c.funding_rate = 0.0005;

        let derived = derive_summary(&[a, b, c]);
        let pos = top_positive_funding(&derived, 2);
        assert_eq!(pos[0].base.symbol, "A");
        assert_eq!(pos[1].base.symbol, "C");

        let neg = top_negative_funding(&derived, 1);
        assert_eq!(neg[0].base.symbol, "B");
    }

    #[test]
    fn test_price_divergence_ordering() {
        let mut a = summary("A");
        a.throttled_oracle_price = 100.0;
        a.throttled_pool_price = 100.5;
        let mut b = summary("B");
        b.throttled_oracle_price = 100.0;
        b.throttled_pool_price = 98.0;

        let derived = derive_summary(&[a, b]);
        let ordered = price_divergence(&derived);
        assert_eq!(ordered[0].base.symbol, "B");
        assert_eq!(ordered[1].base.symbol, "A");
    }

    #[test]
    fn test_oi_consistency_flags_disagreement() {
        let mut good = summary("GOOD");
        good.long_oi_qty = 10.0;
        good.short_oi_qty = 5.0;
        good.oi_qty = 15.0;

        let mut bad = summary("BAD");
        bad.long_oi_qty = 10.0;
        bad.short_oi_qty = 5.0;
        bad.oi_qty = 14.0;

        let missing = summary("MISSING"); // NaN everywhere, skipped

        let derived = derive_summary(&[good, bad, missing]);
        let mismatches = oi_consistency(&derived, DEFAULT_OI_TOLERANCE);

        assert_eq!(mismatches.len(), 1);
        assert_eq!(mismatches[0].symbol, "BAD");
        assert_eq!(mismatches[0].side_sum, 15.0);
        assert_eq!(mismatches[0].reported_oi_qty, 14.0);
        assert_eq!(mismatches[0].difference, 1.0);
    }
}
