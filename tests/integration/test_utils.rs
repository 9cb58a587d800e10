//! Shared fixtures for integration tests

use std::sync::Arc;
use std::time::Duration;

use axum_test::TestServer;
use chartsignal::config::MarketDataConfig;
use chartsignal::core::http::{create_router, AppState};
use chartsignal::metrics::Metrics;
use chartsignal::models::indicators::Candle;
use chartsignal::services::{MarketDataProvider, TimeSeriesClient};
use chartsignal::signals::SignalEngine;
use chrono::{Duration as ChronoDuration, TimeZone, Utc};
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const API_KEY: &str = "test-key";

/// Test helper bundling the HTTP server with its metrics
#[allow(dead_code)]
pub struct TestApiServer {
    pub server: TestServer,
    pub metrics: Arc<Metrics>,
}

impl TestApiServer {
    pub fn new() -> Self {
        Self::build(None)
    }

    pub fn with_provider(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self::build(Some(provider))
    }

    fn build(provider: Option<Arc<dyn MarketDataProvider>>) -> Self {
        let metrics = Arc::new(Metrics::new().expect("metrics initialization"));
        let state = AppState::new(
            metrics.clone(),
            SignalEngine::default(),
            provider,
            MarketDataConfig::default(),
        );

        let app = create_router(state);
        let server = TestServer::new(app).expect("start test server");

        Self { server, metrics }
    }
}

/// Client pointed at the mock with short backoff so retry tests stay fast
pub fn mock_client(server: &MockServer) -> TimeSeriesClient {
    TimeSeriesClient::with_client(server.uri(), API_KEY, reqwest::Client::new())
        .with_retry(2, Duration::from_millis(10))
}

pub fn uptrend_candles(count: usize) -> Vec<Candle> {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    (0..count)
        .map(|i| {
            let price = 100.0 + i as f64 * 0.5;
            Candle::new(
                price,
                price + 0.3,
                price - 0.2,
                price,
                1000.0,
                start + ChronoDuration::days(i as i64),
            )
        })
        .collect()
}

/// Upstream payload for `count` daily bars, newest first like the real API
pub fn time_series_body(symbol: &str, count: usize) -> Value {
    let values: Vec<Value> = uptrend_candles(count)
        .iter()
        .rev()
        .map(|c| {
            json!({
                "datetime": c.timestamp.format("%Y-%m-%d").to_string(),
                "open": c.open.to_string(),
                "high": c.high.to_string(),
                "low": c.low.to_string(),
                "close": c.close.to_string(),
                "volume": c.volume.to_string(),
            })
        })
        .collect();

    json!({
        "meta": { "symbol": symbol, "interval": "1day" },
        "values": values,
        "status": "ok"
    })
}

pub async fn mock_time_series(server: &MockServer, symbol: &str, count: usize) {
    Mock::given(method("GET"))
        .and(path("/time_series"))
        .and(query_param("symbol", symbol))
        .and(query_param("apikey", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(time_series_body(symbol, count)))
        .mount(server)
        .await;
}

pub async fn mock_time_series_error(server: &MockServer, symbol: &str, code: u16, message: &str) {
    let body = json!({ "code": code, "message": message, "status": "error" });
    Mock::given(method("GET"))
        .and(path("/time_series"))
        .and(query_param("symbol", symbol))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}
