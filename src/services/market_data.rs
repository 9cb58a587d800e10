//! Market data provider interface

use crate::models::indicators::Candle;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MarketDataError {
    #[error("market data request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Upstream answered with a 5xx or asked us to back off
    #[error("market data provider unavailable: {0}")]
    Unavailable(String),

    #[error("market data provider error: {0}")]
    Provider(String),

    #[error("unknown symbol: {0}")]
    NotFound(String),

    #[error("malformed market data: {0}")]
    Parse(String),
}

impl MarketDataError {
    /// Whether retrying the same request may succeed
    pub fn is_transient(&self) -> bool {
        match self {
            MarketDataError::Request(e) => e.is_timeout() || e.is_connect(),
            MarketDataError::Unavailable(_) => true,
            _ => false,
        }
    }
}

#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Get up to `limit` historical candles, ordered oldest to newest
    async fn get_candles(
        &self,
        symbol: &str,
        interval: &str,
        limit: usize,
    ) -> Result<Vec<Candle>, MarketDataError>;
}
