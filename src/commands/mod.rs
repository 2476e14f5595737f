pub mod definitions;
pub mod liquidity;
pub mod summary;
