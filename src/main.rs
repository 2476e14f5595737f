mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists)
    if let Err(e) = dotenvy::dotenv() {
        if !e.to_string().contains("not found") {
            eprintln!("Warning: Failed to load .env file: {}", e);
        }
    }

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reya_stats=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Definitions {
            base_url,
            format,
            symbol,
        } => {
            commands::definitions::execute(commands::definitions::DefinitionsArgs {
                base_url,
                format,
                symbol,
            })
            .await?;
        }
        Commands::Liquidity {
            base_url,
            format,
            symbol,
            risk_index,
            top,
        } => {
            commands::liquidity::execute(commands::liquidity::LiquidityArgs {
                base_url,
                format,
                symbol,
                risk_index,
                top,
            })
            .await?;
        }
        Commands::Summary {
            base_url,
            format,
            symbol,
            top,
            oi_tolerance,
        } => {
            commands::summary::execute(commands::summary::SummaryArgs {
                base_url,
                format,
                symbol,
                top,
                oi_tolerance,
            })
            .await?;
        }
    }

    Ok(())
}
