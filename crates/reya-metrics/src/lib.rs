pub mod definitions;
pub mod liquidity;
pub mod stats;
pub mod summary;
pub mod types;

pub use definitions::definition_stats;
pub use liquidity::{
    derive_liquidity, liquidity_kpis, top_high_risk, top_most_liquid, top_most_volatile,
    top_undervalued, EPSILON,
};
pub use stats::{nan_max, nan_mean, nan_min, nan_sum, population_variance, sample_std};
pub use summary::{
    derive_summary, oi_consistency, price_divergence, summary_kpis, top_negative_funding,
    top_positive_funding, top_volume, DEFAULT_OI_TOLERANCE,
};
pub use types::*;
