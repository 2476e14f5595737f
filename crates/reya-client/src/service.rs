use crate::cache::SnapshotCache;
use crate::client::ReyaClient;
use crate::conversions;
use crate::error::FetchError;
use async_trait::async_trait;
use reya_core::{IMarketData, LiquidityParameter, MarketDefinition, MarketSummary};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Market definitions change rarely; refresh every five minutes.
pub const DEFINITIONS_TTL: Duration = Duration::from_secs(300);
/// Liquidity parameters change rarely; refresh every five minutes.
pub const LIQUIDITY_TTL: Duration = Duration::from_secs(300);
/// Summaries move with the market; refresh every second.
pub const SUMMARY_TTL: Duration = Duration::from_secs(1);

/// The fetch pipeline: REST client plus one TTL cache per endpoint,
/// producing normalized snapshots behind the [`IMarketData`] trait.
///
/// Access is request/response: a call either serves the cached snapshot
/// or blocks on one synchronous fetch. There is no background polling.
#[derive(Clone)]
pub struct MarketDataService {
    client: ReyaClient,
    definitions: SnapshotCache<MarketDefinition>,
    liquidity: SnapshotCache<LiquidityParameter>,
    summaries: SnapshotCache<MarketSummary>,
}

impl MarketDataService {
    /// Service against the production API with the reference TTLs.
    pub fn new() -> Self {
        Self::with_client(ReyaClient::new())
    }

    /// Service with a custom client (alternate base URL).
    pub fn with_client(client: ReyaClient) -> Self {
        Self {
            client,
            definitions: SnapshotCache::new(DEFINITIONS_TTL),
            liquidity: SnapshotCache::new(LIQUIDITY_TTL),
            summaries: SnapshotCache::new(SUMMARY_TTL),
        }
    }
}

impl Default for MarketDataService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IMarketData for MarketDataService {
    async fn market_definitions(&self) -> anyhow::Result<Arc<Vec<MarketDefinition>>> {
        let snapshot = self
            .definitions
            .get_or_refresh(Instant::now(), || async {
                let raw = self.client.get_market_definitions().await?;
                Ok::<_, FetchError>(raw.into_iter().map(conversions::market_definition).collect())
            })
            .await?;
        Ok(snapshot)
    }

    async fn liquidity_parameters(&self) -> anyhow::Result<Arc<Vec<LiquidityParameter>>> {
        let snapshot = self
            .liquidity
            .get_or_refresh(Instant::now(), || async {
                let raw = self.client.get_liquidity_parameters().await?;
                Ok::<_, FetchError>(raw.into_iter().map(conversions::liquidity_parameter).collect())
            })
            .await?;
        Ok(snapshot)
    }

    async fn market_summaries(&self) -> anyhow::Result<Arc<Vec<MarketSummary>>> {
        let snapshot = self
            .summaries
            .get_or_refresh(Instant::now(), || async {
                let raw = self.client.get_market_summaries().await?;
                Ok::<_, FetchError>(raw.into_iter().map(conversions::market_summary).collect())
            })
            .await?;
        Ok(snapshot)
    }
}
