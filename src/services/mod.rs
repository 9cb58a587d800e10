//! Upstream market-data collaborators.

pub mod market_data;
pub mod time_series;

pub use market_data::{MarketDataError, MarketDataProvider};
pub use time_series::TimeSeriesClient;
