use crate::cli::OutputFormat;
use crate::commands::definitions::{fmt_num, fmt_opt};
use anyhow::Result;
use reya_client::{IMarketData, MarketDataService, ReyaClient};
use reya_metrics::{
    derive_summary, oi_consistency, price_divergence, summary_kpis, top_negative_funding,
    top_positive_funding, top_volume, ColumnLeader, SummaryKpis, SummaryMetrics,
};

pub struct SummaryArgs {
    pub base_url: String,
    pub format: OutputFormat,
    pub symbol: Option<String>,
    pub top: usize,
    pub oi_tolerance: f64,
}

pub async fn execute(args: SummaryArgs) -> Result<()> {
    tracing::info!("Retrieving market summaries from {}", args.base_url);

    let service = MarketDataService::with_client(ReyaClient::with_base_url(&args.base_url));
    let summaries = service.market_summaries().await?;

    let metrics = derive_summary(&summaries);

    if let Some(symbol) = &args.symbol {
        let row = metrics
            .iter()
            .find(|m| m.base.symbol.eq_ignore_ascii_case(symbol))
            .ok_or_else(|| anyhow::anyhow!("Unknown market: {}", symbol))?;
        println!("{}", serde_json::to_string_pretty(row)?);
        return Ok(());
    }

    let kpis = summary_kpis(&metrics);
    let mismatches = oi_consistency(&metrics, args.oi_tolerance);
    for mismatch in &mismatches {
        tracing::warn!(
            "OI mismatch for {}: long+short={} but reported={}",
            mismatch.symbol,
            mismatch.side_sum,
            mismatch.reported_oi_qty
        );
    }

    match args.format {
        OutputFormat::Json => {
            let data = serde_json::json!({
                "kpis": kpis,
                "markets": metrics,
                "positiveFunding": top_positive_funding(&metrics, args.top),
                "negativeFunding": top_negative_funding(&metrics, args.top),
                "priceDivergence": price_divergence(&metrics),
                "topVolume": top_volume(&metrics, args.top),
                "oiMismatches": mismatches,
            });
            println!("{}", serde_json::to_string_pretty(&data)?);
        }
        OutputFormat::Table => {
            display_table(&metrics, &kpis, args.top, mismatches.len());
        }
    }

    Ok(())
}

fn display_table(metrics: &[SummaryMetrics], kpis: &SummaryKpis, top: usize, mismatches: usize) {
    println!("\n╔══════════════════════════════════════════════════════════════════════════════╗");
    println!("║  Market Summary ({} markets)", kpis.total_markets);
    println!("╠══════════════════════════════════════════════════════════════════════════════╣");
    println!("║  KPIs");
    println!("║  ─────────────────────────────────────────────────────────────────────────");
    println!("║  Total 24h Volume:  {}", fmt_opt(kpis.total_volume24h));
    println!("║  Total OI:          {}", fmt_opt(kpis.total_oi));
    println!("║  Total Long OI:     {}", fmt_opt(kpis.total_long_oi));
    println!("║  Total Short OI:    {}", fmt_opt(kpis.total_short_oi));
    println!("║  Avg Funding Rate:  {}", fmt_rate(kpis.average_funding_rate));
    println!("║  Top Volume:        {}", fmt_leader(&kpis.top_volume));
    println!("║  Top OI:            {}", fmt_leader(&kpis.top_oi));
    if mismatches > 0 {
        println!("║  OI Mismatches:     {}", mismatches);
    }

    print_funding("POSITIVE FUNDING", &top_positive_funding(metrics, top));
    print_funding("NEGATIVE FUNDING", &top_negative_funding(metrics, top));

    let divergence = price_divergence(metrics);
    println!("║");
    println!("║  PRICE DIVERGENCE (pool vs oracle)");
    println!("║  ─────────────────────────────────────────────────────────────────────────");
    println!(
        "║  {:<16} {:>16} {:>16} {:>12}",
        "Symbol", "Oracle", "Pool", "Spread"
    );
    for m in divergence.iter().take(top) {
        println!(
            "║  {:<16} {:>16} {:>16} {:>12}",
            m.base.symbol,
            fmt_num(m.base.throttled_oracle_price),
            fmt_num(m.base.throttled_pool_price),
            fmt_num(m.price_spread),
        );
    }

    println!("║");
    println!("║  TOP VOLUME");
    println!("║  ─────────────────────────────────────────────────────────────────────────");
    println!(
        "║  {:<16} {:>16} {:>12} {:>22}",
        "Symbol", "Volume 24h", "Px Chg 24h", "Updated"
    );
    for m in top_volume(metrics, top) {
        println!(
            "║  {:<16} {:>16} {:>12} {:>22}",
            m.base.symbol,
            fmt_num(m.base.volume24h),
            fmt_num(m.base.px_change24h),
            m.base.updated_at_str,
        );
    }

    println!("╚══════════════════════════════════════════════════════════════════════════════╝\n");
}

fn print_funding(title: &str, rows: &[SummaryMetrics]) {
    println!("║");
    println!("║  {} (Top {})", title, rows.len());
    println!("║  ─────────────────────────────────────────────────────────────────────────");
    println!(
        "║  {:<16} {:>14} {:>14} {:>14}",
        "Symbol", "Funding Rate", "OI Imbalance", "Pressure"
    );
    for m in rows {
        println!(
            "║  {:<16} {:>14} {:>14} {:>14}",
            m.base.symbol,
            fmt_rate_value(m.base.funding_rate),
            fmt_num(m.oi_imbalance),
            fmt_num(m.funding_pressure),
        );
    }
}

fn fmt_rate(v: Option<f64>) -> String {
    match v {
        Some(v) => fmt_rate_value(v),
        None => "-".to_string(),
    }
}

fn fmt_rate_value(v: f64) -> String {
    if v.is_nan() {
        "-".to_string()
    } else {
        format!("{:.6} ({:.4}%)", v, v * 100.0)
    }
}

fn fmt_leader(leader: &Option<ColumnLeader>) -> String {
    match leader {
        Some(l) => format!("{:.4} ({})", l.value, l.markets.join(", ")),
        None => "-".to_string(),
    }
}
