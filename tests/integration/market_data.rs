//! Integration tests for the time-series market-data client

use chartsignal::services::{MarketDataError, MarketDataProvider, TimeSeriesClient};
use chartsignal::services::time_series::parse_datetime;
use chrono::{TimeZone, Utc};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::test_utils::{
    mock_client, mock_time_series, mock_time_series_error, time_series_body, API_KEY,
};

#[tokio::test]
async fn candles_are_returned_oldest_first() {
    let upstream = MockServer::start().await;
    mock_time_series(&upstream, "AAPL", 30).await;

    let candles = mock_client(&upstream)
        .get_candles("AAPL", "1day", 30)
        .await
        .expect("fetch candles");

    assert_eq!(candles.len(), 30);
    assert!(candles.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
    assert_eq!(candles[0].close, 100.0);
    assert_eq!(candles[29].close, 114.5);
    assert_eq!(
        candles[0].timestamp,
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    );
}

#[tokio::test]
async fn request_carries_interval_and_outputsize() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/time_series"))
        .and(query_param("interval", "1h"))
        .and(query_param("outputsize", "250"))
        .respond_with(ResponseTemplate::new(200).set_body_json(time_series_body("BTC/USD", 5)))
        .expect(1)
        .mount(&upstream)
        .await;

    let candles = mock_client(&upstream)
        .get_candles("BTC/USD", "1h", 250)
        .await
        .expect("fetch candles");
    assert_eq!(candles.len(), 5);
}

#[tokio::test]
async fn unknown_symbol_is_not_found() {
    let upstream = MockServer::start().await;
    mock_time_series_error(&upstream, "NOPE", 404, "symbol not found").await;

    let err = mock_client(&upstream)
        .get_candles("NOPE", "1day", 300)
        .await
        .unwrap_err();
    assert!(matches!(err, MarketDataError::NotFound(ref s) if s == "NOPE"));
}

#[tokio::test]
async fn provider_errors_are_not_retried() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/time_series"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 400,
            "message": "invalid interval",
            "status": "error"
        })))
        .expect(1)
        .mount(&upstream)
        .await;

    let err = mock_client(&upstream)
        .get_candles("AAPL", "7min", 300)
        .await
        .unwrap_err();
    assert!(matches!(err, MarketDataError::Provider(ref m) if m == "invalid interval"));
}

#[tokio::test]
async fn server_errors_are_retried() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/time_series"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .with_priority(1)
        .mount(&upstream)
        .await;
    mock_time_series(&upstream, "AAPL", 10).await;

    let candles = mock_client(&upstream)
        .get_candles("AAPL", "1day", 10)
        .await
        .expect("retry succeeds");
    assert_eq!(candles.len(), 10);
}

#[tokio::test]
async fn persistent_server_errors_give_up() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/time_series"))
        .respond_with(ResponseTemplate::new(500))
        .expect(3)
        .mount(&upstream)
        .await;

    let err = mock_client(&upstream)
        .get_candles("AAPL", "1day", 10)
        .await
        .unwrap_err();
    assert!(matches!(err, MarketDataError::Unavailable(_)));
}

#[tokio::test]
async fn default_client_makes_three_attempts() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/time_series"))
        .respond_with(ResponseTemplate::new(503))
        .expect(3)
        .mount(&upstream)
        .await;

    let err = TimeSeriesClient::with_client(upstream.uri(), API_KEY, reqwest::Client::new())
        .get_candles("AAPL", "1day", 10)
        .await
        .unwrap_err();
    assert!(err.is_transient());
}

#[tokio::test]
async fn malformed_numbers_are_parse_errors() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/time_series"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ok",
            "values": [{
                "datetime": "2024-01-02",
                "open": "1", "high": "1", "low": "1", "close": "abc"
            }]
        })))
        .mount(&upstream)
        .await;

    let err = mock_client(&upstream)
        .get_candles("AAPL", "1day", 1)
        .await
        .unwrap_err();
    assert!(matches!(err, MarketDataError::Parse(_)));
}

#[test]
fn datetime_formats() {
    assert_eq!(
        parse_datetime("2024-03-05 14:30:00").unwrap(),
        Utc.with_ymd_and_hms(2024, 3, 5, 14, 30, 0).unwrap()
    );
    assert_eq!(
        parse_datetime("2024-03-05").unwrap(),
        Utc.with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap()
    );
    assert!(parse_datetime("05/03/2024").is_err());
}
