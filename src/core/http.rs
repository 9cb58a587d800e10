//! HTTP endpoint server using Axum

use axum::{
    extract::{rejection::JsonRejection, Path, Query, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, warn, Level};

use crate::config::{AppConfig, MarketDataConfig};
use crate::core::error::ApiError;
use crate::indicators::IndicatorError;
use crate::metrics::Metrics;
use crate::models::indicators::{Candle, IndicatorSnapshot};
use crate::models::signal::IndicatorReport;
use crate::services::{MarketDataProvider, TimeSeriesClient};
use crate::signals::SignalEngine;

pub const SERVICE_NAME: &str = "chartsignal";

#[derive(Clone)]
pub struct AppState {
    pub health: Arc<RwLock<HealthStatus>>,
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
    pub engine: Arc<SignalEngine>,
    pub provider: Option<Arc<dyn MarketDataProvider>>,
    pub market_data: Arc<MarketDataConfig>,
}

impl AppState {
    pub fn new(
        metrics: Arc<Metrics>,
        engine: SignalEngine,
        provider: Option<Arc<dyn MarketDataProvider>>,
        market_data: MarketDataConfig,
    ) -> Self {
        Self {
            health: Arc::new(RwLock::new(HealthStatus::default())),
            metrics,
            start_time: Arc::new(Instant::now()),
            engine: Arc::new(engine),
            provider,
            market_data: Arc::new(market_data),
        }
    }

    /// Run the engine and record the outcome
    fn analyze(&self, candles: &[Candle]) -> Result<(IndicatorReport, IndicatorSnapshot), ApiError> {
        match self.engine.analyze_detailed(candles) {
            Ok(result) => {
                self.metrics.indicator_reports_total.inc();
                Ok(result)
            }
            Err(e) => {
                self.metrics.indicator_failures_total.inc();
                warn!(error = %e, candles = candles.len(), "Indicator analysis rejected");
                Err(e.into())
            }
        }
    }
}

#[derive(Clone, Debug)]
pub struct HealthStatus {
    pub status: String,
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let health = state.health.read().await;
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Ok(Json(json!({
        "status": health.status,
        "uptime_seconds": uptime_seconds,
        "service": SERVICE_NAME
    })))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Middleware to track HTTP request metrics
async fn metrics_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    state.metrics.http_requests_in_flight.inc();
    let response = next.run(request).await;
    let status = response.status();
    let duration = start.elapsed();
    state.metrics.http_requests_in_flight.dec();

    state.metrics.http_requests_total.inc();
    state
        .metrics
        .http_request_duration_seconds
        .observe(duration.as_secs_f64());

    if status.is_server_error() {
        error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis(),
            "HTTP request error"
        );
    }

    response
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub candles: Vec<Candle>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DetailedReport {
    pub report: IndicatorReport,
    pub snapshot: IndicatorSnapshot,
}

#[derive(Debug, Deserialize)]
struct SymbolQuery {
    interval: Option<String>,
}

/// Analyze caller-supplied candles
async fn analyze_candles(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<IndicatorReport>, ApiError> {
    let Json(request) = payload?;
    let (report, _) = state.analyze(&request.candles)?;
    Ok(Json(report))
}

/// Analyze caller-supplied candles and include the values behind each vote
async fn analyze_candles_detailed(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<DetailedReport>, ApiError> {
    let Json(request) = payload?;
    let (report, snapshot) = state.analyze(&request.candles)?;
    Ok(Json(DetailedReport { report, snapshot }))
}

/// Fetch history for a symbol from the market-data provider, then analyze it
async fn analyze_symbol(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
    Query(params): Query<SymbolQuery>,
) -> Result<Json<IndicatorReport>, ApiError> {
    let provider = state
        .provider
        .as_ref()
        .ok_or(ApiError::ProviderNotConfigured)?;

    let interval = params
        .interval
        .unwrap_or_else(|| state.market_data.default_interval.clone());
    let limit = state
        .market_data
        .history_limit
        .max(state.engine.min_candles());

    let candles = provider
        .get_candles(&symbol, &interval, limit)
        .await
        .map_err(|e| {
            error!(error = %e, symbol = %symbol, interval = %interval, "Failed to fetch candles");
            ApiError::from(e)
        })?;

    if candles.is_empty() {
        return Err(IndicatorError::insufficient(
            "price history",
            state.engine.min_candles(),
            0,
        )
        .into());
    }

    let (report, _) = state.analyze(&candles)?;
    info!(
        symbol = %symbol,
        interval = %interval,
        summary = %report.summary.signal(),
        "Analyzed {} candles for {}",
        candles.len(),
        symbol
    );
    Ok(Json(report))
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/api/indicators", post(analyze_candles))
        .route("/api/indicators/detailed", post(analyze_candles_detailed))
        .route("/api/indicators/{symbol}", get(analyze_symbol))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    metrics_middleware,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn start_server(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let metrics = Arc::new(Metrics::new()?);
    let engine = SignalEngine::new(config.analysis.clone())?;

    // Without an API key only the candle-upload endpoints are served
    let provider: Option<Arc<dyn MarketDataProvider>> =
        match TimeSeriesClient::from_config(&config.market_data)? {
            Some(client) => {
                info!(base_url = %config.market_data.base_url, "Market data provider configured");
                Some(Arc::new(client))
            }
            None => {
                warn!("MARKET_DATA_API_KEY not set - symbol endpoint will be unavailable");
                None
            }
        };

    let state = AppState::new(metrics, engine, provider, config.market_data.clone());
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;

    info!(port = config.port, "HTTP server listening on port {}", config.port);
    info!(
        "Metrics endpoint available at http://0.0.0.0:{}/metrics",
        config.port
    );
    axum::serve(listener, app).await?;

    Ok(())
}
