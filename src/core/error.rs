//! HTTP error mapping

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::indicators::IndicatorError;
use crate::services::MarketDataError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Indicator(#[from] IndicatorError),

    #[error(transparent)]
    MarketData(#[from] MarketDataError),

    /// Request body that is not JSON or does not match the expected shape
    #[error("{0}")]
    InvalidBody(#[from] JsonRejection),

    #[error("market data provider is not configured")]
    ProviderNotConfigured,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Indicator(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::MarketData(MarketDataError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::MarketData(_) => StatusCode::BAD_GATEWAY,
            ApiError::InvalidBody(rejection) => rejection.status(),
            ApiError::ProviderNotConfigured => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Stable machine-readable error name
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Indicator(IndicatorError::InsufficientData { .. }) => "insufficient_data",
            ApiError::Indicator(_) | ApiError::InvalidBody(_) => "invalid_input",
            ApiError::MarketData(MarketDataError::NotFound(_)) => "symbol_not_found",
            ApiError::MarketData(_) => "market_data_error",
            ApiError::ProviderNotConfigured => "provider_not_configured",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({
            "error": self.kind(),
            "message": self.to_string(),
        }));
        (status, body).into_response()
    }
}
