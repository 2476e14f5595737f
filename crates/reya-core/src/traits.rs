use crate::types::*;
use async_trait::async_trait;
use std::sync::Arc;

/// IMarketData is the interface presenters consume to obtain normalized
/// snapshots of Reya Network market data.
///
/// Each getter returns the full current snapshot for its domain; records
/// are never updated individually, a fresh fetch replaces the snapshot
/// wholesale. Implementations decide how snapshots are cached.
#[async_trait]
pub trait IMarketData: Send + Sync {
    /// All market definitions (static market configuration).
    async fn market_definitions(&self) -> anyhow::Result<Arc<Vec<MarketDefinition>>>;

    /// All per-market liquidity parameters.
    async fn liquidity_parameters(&self) -> anyhow::Result<Arc<Vec<LiquidityParameter>>>;

    /// All per-market live summaries.
    async fn market_summaries(&self) -> anyhow::Result<Arc<Vec<MarketSummary>>>;
}
