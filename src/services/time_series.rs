//! REST client for a `time_series` style market-data API.
//!
//! Request: `GET {base}/time_series?symbol=..&interval=..&outputsize=..&apikey=..`
//! Response: `{"status":"ok","values":[{"datetime":"2024-01-02","open":"1.0",...}]}`
//! with string-encoded numbers, newest bar first. Errors come back as
//! `{"status":"error","code":404,"message":".."}`, often with HTTP 200.

use std::time::Duration;

use async_trait::async_trait;
use backon::{ExponentialBuilder, Retryable};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::MarketDataConfig;
use crate::models::indicators::Candle;
use crate::services::market_data::{MarketDataError, MarketDataProvider};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
/// Retries after the first request, so three attempts in total
const DEFAULT_MAX_RETRIES: usize = 2;

#[derive(Debug, Deserialize)]
struct TimeSeriesResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    code: Option<u16>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    values: Vec<RawBar>,
}

#[derive(Debug, Deserialize)]
struct RawBar {
    datetime: String,
    open: String,
    high: String,
    low: String,
    close: String,
    #[serde(default)]
    volume: Option<String>,
}

pub struct TimeSeriesClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    max_retries: usize,
    min_backoff: Duration,
}

impl TimeSeriesClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self, MarketDataError> {
        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self::with_client(base_url, api_key, client))
    }

    pub fn with_client(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        client: reqwest::Client,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            max_retries: DEFAULT_MAX_RETRIES,
            min_backoff: Duration::from_millis(200),
        }
    }

    /// `None` when no API key is configured
    pub fn from_config(config: &MarketDataConfig) -> Result<Option<Self>, MarketDataError> {
        match &config.api_key {
            Some(key) => Self::new(config.base_url.clone(), key.clone()).map(Some),
            None => Ok(None),
        }
    }

    pub fn with_retry(mut self, max_retries: usize, min_backoff: Duration) -> Self {
        self.max_retries = max_retries;
        self.min_backoff = min_backoff;
        self
    }

    async fn fetch_once(
        &self,
        symbol: &str,
        interval: &str,
        limit: usize,
    ) -> Result<Vec<Candle>, MarketDataError> {
        let outputsize = limit.to_string();
        let response = self
            .client
            .get(format!("{}/time_series", self.base_url))
            .query(&[
                ("symbol", symbol),
                ("interval", interval),
                ("outputsize", outputsize.as_str()),
                ("apikey", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(MarketDataError::NotFound(symbol.to_string()));
        }
        if status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS {
            return Err(MarketDataError::Unavailable(format!("HTTP {}", status)));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MarketDataError::Provider(format!("HTTP {}: {}", status, body)));
        }

        let body: TimeSeriesResponse = response
            .json()
            .await
            .map_err(|e| MarketDataError::Parse(e.to_string()))?;

        parse_response(symbol, body)
    }
}

fn parse_response(symbol: &str, body: TimeSeriesResponse) -> Result<Vec<Candle>, MarketDataError> {
    if body.status.as_deref() == Some("error") {
        let message = body.message.unwrap_or_else(|| "unknown error".to_string());
        return Err(match body.code {
            Some(404) => MarketDataError::NotFound(symbol.to_string()),
            Some(429) => MarketDataError::Unavailable(message),
            Some(code) if code >= 500 => MarketDataError::Unavailable(message),
            _ => MarketDataError::Provider(message),
        });
    }

    let mut candles = body
        .values
        .iter()
        .map(parse_bar)
        .collect::<Result<Vec<_>, _>>()?;

    candles.sort_by_key(|c| c.timestamp);
    Ok(candles)
}

fn parse_bar(bar: &RawBar) -> Result<Candle, MarketDataError> {
    let volume = match &bar.volume {
        Some(v) => parse_number("volume", v)?,
        None => 0.0,
    };

    Ok(Candle::new(
        parse_number("open", &bar.open)?,
        parse_number("high", &bar.high)?,
        parse_number("low", &bar.low)?,
        parse_number("close", &bar.close)?,
        volume,
        parse_datetime(&bar.datetime)?,
    ))
}

fn parse_number(field: &str, value: &str) -> Result<f64, MarketDataError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| MarketDataError::Parse(format!("invalid {}: {:?}", field, value)))
}

/// Accepts `YYYY-MM-DD HH:MM:SS` (intraday) and `YYYY-MM-DD` (daily), as UTC
pub fn parse_datetime(value: &str) -> Result<DateTime<Utc>, MarketDataError> {
    let naive = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S")
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| MarketDataError::Parse(format!("invalid datetime: {:?}", value)))?;

    Ok(Utc.from_utc_datetime(&naive))
}

#[async_trait]
impl MarketDataProvider for TimeSeriesClient {
    async fn get_candles(
        &self,
        symbol: &str,
        interval: &str,
        limit: usize,
    ) -> Result<Vec<Candle>, MarketDataError> {
        let backoff = ExponentialBuilder::default()
            .with_min_delay(self.min_backoff)
            .with_max_times(self.max_retries);

        let candles = (|| self.fetch_once(symbol, interval, limit))
            .retry(backoff)
            .sleep(tokio::time::sleep)
            .when(MarketDataError::is_transient)
            .notify(|e: &MarketDataError, delay: Duration| {
                warn!(
                    symbol = %symbol,
                    error = %e,
                    delay_ms = delay.as_millis() as u64,
                    "Market data request failed, retrying"
                );
            })
            .await?;

        debug!(
            symbol = %symbol,
            interval = %interval,
            count = candles.len(),
            "Fetched {} candles for {}",
            candles.len(),
            symbol
        );
        Ok(candles)
    }
}
