use crate::cli::{OutputFormat, RiskIndexArg};
use crate::commands::definitions::fmt_opt;
use anyhow::Result;
use reya_client::{IMarketData, MarketDataService, ReyaClient};
use reya_metrics::{
    derive_liquidity, liquidity_kpis, top_high_risk, top_most_liquid, top_most_volatile,
    top_undervalued, ColumnLeader, DeriveConfig, LiquidityKpis, LiquidityMetrics,
};

pub struct LiquidityArgs {
    pub base_url: String,
    pub format: OutputFormat,
    pub symbol: Option<String>,
    pub risk_index: RiskIndexArg,
    pub top: usize,
}

pub async fn execute(args: LiquidityArgs) -> Result<()> {
    tracing::info!("Retrieving liquidity parameters from {}", args.base_url);

    let service = MarketDataService::with_client(ReyaClient::with_base_url(&args.base_url));
    let parameters = service.liquidity_parameters().await?;

    let config = DeriveConfig {
        risk_index: args.risk_index.into(),
    };
    let metrics = derive_liquidity(&parameters, &config);

    if let Some(symbol) = &args.symbol {
        let row = metrics
            .iter()
            .find(|m| m.symbol.eq_ignore_ascii_case(symbol))
            .ok_or_else(|| anyhow::anyhow!("Unknown market: {}", symbol))?;
        println!("{}", serde_json::to_string_pretty(row)?);
        return Ok(());
    }

    let kpis = liquidity_kpis(&metrics);

    match args.format {
        OutputFormat::Json => {
            let data = serde_json::json!({
                "kpis": kpis,
                "markets": metrics,
                "mostLiquid": top_most_liquid(&metrics, args.top),
                "mostVolatile": top_most_volatile(&metrics, args.top),
                "undervalued": top_undervalued(&metrics, args.top),
                "highRisk": top_high_risk(&metrics, args.top),
            });
            println!("{}", serde_json::to_string_pretty(&data)?);
        }
        OutputFormat::Table => {
            display_table(&metrics, &kpis, args.top);
        }
    }

    Ok(())
}

fn display_table(metrics: &[LiquidityMetrics], kpis: &LiquidityKpis, top: usize) {
    println!("\n╔══════════════════════════════════════════════════════════════════════════════╗");
    println!("║  Liquidity Analysis ({} markets)", kpis.market_count);
    println!("╠══════════════════════════════════════════════════════════════════════════════╣");
    println!("║  KPIs");
    println!("║  ─────────────────────────────────────────────────────────────────────────");
    println!("║  Highest Score:     {}", fmt_leader(&kpis.highest_score));
    println!("║  Lowest Score:      {}", fmt_leader(&kpis.lowest_nonzero_score));
    println!("║  Average Score:     {}", fmt_opt(kpis.average_score));
    println!("║  Highest Velocity:  {}", fmt_leader(&kpis.highest_velocity));
    println!("║  Lowest Velocity:   {}", fmt_leader(&kpis.lowest_nonzero_velocity));
    println!("║  Average Velocity:  {}", fmt_opt(kpis.average_velocity));

    print_ranking("MOST LIQUID", &top_most_liquid(metrics, top), |m| {
        m.liquidity_score
    });
    print_ranking("MOST VOLATILE", &top_most_volatile(metrics, top), |m| {
        m.velocity_multiplier
    });
    print_ranking("UNDERVALUED", &top_undervalued(metrics, top), |m| {
        m.undervalued_metric
    });
    print_ranking("HIGH RISK", &top_high_risk(metrics, top), |m| m.risk_index);

    println!("╚══════════════════════════════════════════════════════════════════════════════╝\n");
}

fn print_ranking(title: &str, rows: &[LiquidityMetrics], key: impl Fn(&LiquidityMetrics) -> f64) {
    println!("║");
    println!("║  {} (Top {})", title, rows.len());
    println!("║  ─────────────────────────────────────────────────────────────────────────");
    println!(
        "║  {:<16} {:>14} {:>14} {:>14}",
        "Symbol", "Depth", "Velocity", "Value"
    );
    for m in rows {
        println!(
            "║  {:<16} {:>14.4} {:>14.4} {:>14.6}",
            m.symbol,
            m.depth,
            m.velocity_multiplier,
            key(m)
        );
    }
}

fn fmt_leader(leader: &Option<ColumnLeader>) -> String {
    match leader {
        Some(l) => format!("{:.6} ({})", l.value, l.markets.join(", ")),
        None => "-".to_string(),
    }
}
