// REST client for the Reya Network market data API: raw wire models,
// normalization into reya-core records, and TTL snapshot caching.

pub mod cache;
pub mod client;
pub mod conversions;
pub mod error;
pub mod models;
pub mod service;

// Re-export the core trait
pub use reya_core::IMarketData;

pub use cache::SnapshotCache;
pub use client::ReyaClient;
pub use error::FetchError;
pub use service::{MarketDataService, DEFINITIONS_TTL, LIQUIDITY_TTL, SUMMARY_TTL};
