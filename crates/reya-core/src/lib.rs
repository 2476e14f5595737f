pub mod numeric;
pub mod traits;
pub mod types;

pub use numeric::*;
pub use traits::IMarketData;
pub use types::*;
