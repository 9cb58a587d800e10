//! Environment-driven configuration.
//!
//! Binaries call `dotenvy::dotenv()` before reading anything here, so a local
//! `.env` file behaves the same as exported variables.

pub mod analysis;

use std::env;

pub use analysis::{AnalysisConfig, SignalThresholds};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_MARKET_DATA_URL: &str = "https://api.twelvedata.com";
pub const DEFAULT_HISTORY_LIMIT: usize = 300;
pub const DEFAULT_INTERVAL: &str = "1day";

/// Deployment environment name (`production`, `sandbox`, ...)
pub fn get_environment() -> String {
    env::var("APP_ENV")
        .or_else(|_| env::var("ENVIRONMENT"))
        .unwrap_or_else(|_| "sandbox".to_string())
}

pub fn is_production() -> bool {
    matches!(get_environment().as_str(), "production" | "prod")
}

pub fn get_port() -> u16 {
    parse_env("PORT").unwrap_or(DEFAULT_PORT)
}

fn parse_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

/// Connection settings for the upstream market-data API
#[derive(Debug, Clone)]
pub struct MarketDataConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub history_limit: usize,
    pub default_interval: String,
}

impl Default for MarketDataConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_MARKET_DATA_URL.to_string(),
            api_key: None,
            history_limit: DEFAULT_HISTORY_LIMIT,
            default_interval: DEFAULT_INTERVAL.to_string(),
        }
    }
}

impl MarketDataConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: env::var("MARKET_DATA_URL").unwrap_or(defaults.base_url),
            api_key: env::var("MARKET_DATA_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            history_limit: parse_env("MARKET_DATA_HISTORY").unwrap_or(defaults.history_limit),
            default_interval: env::var("MARKET_DATA_INTERVAL")
                .unwrap_or(defaults.default_interval),
        }
    }
}

/// Everything the API server needs at startup
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub market_data: MarketDataConfig,
    pub analysis: AnalysisConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            market_data: MarketDataConfig::default(),
            analysis: AnalysisConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let mut analysis = AnalysisConfig::default();
        if let Some(overbought) = parse_env("RSI_OVERBOUGHT") {
            analysis.thresholds.rsi_overbought = overbought;
        }
        if let Some(oversold) = parse_env("RSI_OVERSOLD") {
            analysis.thresholds.rsi_oversold = oversold;
        }

        Self {
            port: get_port(),
            market_data: MarketDataConfig::from_env(),
            analysis,
        }
    }
}
