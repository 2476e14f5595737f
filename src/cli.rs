use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "reya-stats")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show market definitions and per-column statistics
    Definitions {
        /// Base URL of the Reya API
        #[arg(long, default_value = "https://api.reya.xyz")]
        base_url: String,

        /// Output format (table, json)
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Show a single market instead of the whole snapshot
        #[arg(short, long)]
        symbol: Option<String>,
    },

    /// Derive liquidity metrics, KPIs and rankings
    Liquidity {
        /// Base URL of the Reya API
        #[arg(long, default_value = "https://api.reya.xyz")]
        base_url: String,

        /// Output format (table, json)
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Show a single market instead of the whole snapshot
        #[arg(short, long)]
        symbol: Option<String>,

        /// Risk index formula variant
        #[arg(long, value_enum, default_value_t = RiskIndexArg::Smoothed)]
        risk_index: RiskIndexArg,

        /// Number of rows per ranking table
        #[arg(short, long, default_value_t = 10)]
        top: usize,
    },

    /// Derive market summary metrics, KPIs and leaderboards
    Summary {
        /// Base URL of the Reya API
        #[arg(long, default_value = "https://api.reya.xyz")]
        base_url: String,

        /// Output format (table, json)
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Show a single market instead of the whole snapshot
        #[arg(short, long)]
        symbol: Option<String>,

        /// Number of rows per leaderboard
        #[arg(short, long, default_value_t = 10)]
        top: usize,

        /// Tolerance for the open-interest consistency check
        #[arg(long, default_value_t = reya_metrics::DEFAULT_OI_TOLERANCE)]
        oi_tolerance: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RiskIndexArg {
    Smoothed,
    Raw,
}

impl From<RiskIndexArg> for reya_metrics::RiskIndexStrategy {
    fn from(arg: RiskIndexArg) -> Self {
        match arg {
            RiskIndexArg::Smoothed => Self::Smoothed,
            RiskIndexArg::Raw => Self::Raw,
        }
    }
}
