use crate::cli::OutputFormat;
use anyhow::Result;
use reya_client::{IMarketData, MarketDataService, ReyaClient};
use reya_core::MarketDefinition;
use reya_metrics::{definition_stats, ColumnStats};

pub struct DefinitionsArgs {
    pub base_url: String,
    pub format: OutputFormat,
    pub symbol: Option<String>,
}

pub async fn execute(args: DefinitionsArgs) -> Result<()> {
    tracing::info!("Retrieving market definitions from {}", args.base_url);

    let service = MarketDataService::with_client(ReyaClient::with_base_url(&args.base_url));
    let definitions = service.market_definitions().await?;

    if let Some(symbol) = &args.symbol {
        let row = definitions
            .iter()
            .find(|d| d.symbol.eq_ignore_ascii_case(symbol))
            .ok_or_else(|| anyhow::anyhow!("Unknown market: {}", symbol))?;
        println!("{}", serde_json::to_string_pretty(row)?);
        return Ok(());
    }

    let stats = definition_stats(&definitions);

    match args.format {
        OutputFormat::Json => {
            let data = serde_json::json!({
                "definitions": &*definitions,
                "columnStats": stats,
            });
            println!("{}", serde_json::to_string_pretty(&data)?);
        }
        OutputFormat::Table => {
            display_table(&definitions, &stats);
        }
    }

    Ok(())
}

fn display_table(definitions: &[MarketDefinition], stats: &[ColumnStats]) {
    println!("\n╔══════════════════════════════════════════════════════════════════════════════╗");
    println!("║  Market Definitions ({} markets)", definitions.len());
    println!("╠══════════════════════════════════════════════════════════════════════════════╣");
    println!(
        "║  {:<16} {:>12} {:>12} {:>12} {:>12} {:>12}",
        "Symbol", "MinQty", "TickSize", "MaxLev", "OiCap", "InitMargin"
    );
    println!("║  ─────────────────────────────────────────────────────────────────────────");
    for d in definitions {
        println!(
            "║  {:<16} {:>12} {:>12} {:>12} {:>12} {:>12}",
            d.symbol,
            fmt_num(d.min_order_qty),
            fmt_num(d.tick_size),
            fmt_num(d.max_leverage),
            fmt_num(d.oi_cap),
            fmt_num(d.initial_margin_parameter),
        );
    }
    println!("║");
    println!("║  COLUMN STATISTICS");
    println!("║  ─────────────────────────────────────────────────────────────────────────");
    println!(
        "║  {:<28} {:>6} {:>12} {:>12} {:>12} {:>12}",
        "Column", "Count", "Mean", "Std", "Min", "Max"
    );
    for s in stats {
        println!(
            "║  {:<28} {:>6} {:>12} {:>12} {:>12} {:>12}",
            s.column,
            s.count,
            fmt_opt(s.mean),
            fmt_opt(s.std_dev),
            fmt_opt(s.min),
            fmt_opt(s.max),
        );
    }
    println!("╚══════════════════════════════════════════════════════════════════════════════╝\n");
}

pub(crate) fn fmt_num(v: f64) -> String {
    if v.is_nan() {
        "-".to_string()
    } else {
        format!("{:.4}", v)
    }
}

pub(crate) fn fmt_opt(v: Option<f64>) -> String {
    match v {
        Some(v) => fmt_num(v),
        None => "-".to_string(),
    }
}
