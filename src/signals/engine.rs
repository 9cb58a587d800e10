//! Analysis pipeline: candles in, `IndicatorReport` out.
//!
//! Pure and synchronous. Every transport (HTTP handler, CLI, job) calls the
//! same `SignalEngine` so the indicator math lives in exactly one place.

use tracing::debug;

use crate::config::AnalysisConfig;
use crate::indicators::error::IndicatorError;
use crate::indicators::momentum::{calculate_macd, calculate_rsi};
use crate::indicators::trend::calculate_moving_averages;
use crate::indicators::validation::{last_value, validate_candles};
use crate::models::indicators::{closes, Candle, IndicatorSnapshot};
use crate::models::signal::IndicatorReport;
use crate::signals::aggregation::combine;
use crate::signals::categories::{classify_moving_averages, classify_oscillators};

#[derive(Debug, Clone, Default)]
pub struct SignalEngine {
    config: AnalysisConfig,
}

impl SignalEngine {
    pub fn new(config: AnalysisConfig) -> Result<Self, IndicatorError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Bars required for a complete report (200 with default periods)
    pub fn min_candles(&self) -> usize {
        self.config.min_candles()
    }

    /// Compute all indicators and reduce them to category and summary votes.
    ///
    /// Fails with `InsufficientData` before computing anything when the history
    /// is shorter than the longest warm-up. There is no partial report.
    pub fn analyze(&self, candles: &[Candle]) -> Result<IndicatorReport, IndicatorError> {
        self.analyze_detailed(candles).map(|(report, _)| report)
    }

    /// Same as [`analyze`](Self::analyze), plus the last value of every series
    pub fn analyze_detailed(
        &self,
        candles: &[Candle],
    ) -> Result<(IndicatorReport, IndicatorSnapshot), IndicatorError> {
        self.check_history(candles.len())?;
        validate_candles(candles)?;

        let cfg = &self.config;
        let closes = closes(candles);

        let rsi = calculate_rsi(&closes, cfg.rsi_period)?;
        let macd = calculate_macd(&closes, cfg.macd_fast, cfg.macd_slow, cfg.macd_signal)?;
        let averages = calculate_moving_averages(&closes, cfg.sma_periods)?;

        let oscillators = classify_oscillators(&rsi, &macd, &cfg.thresholds)?;
        let moving_averages = classify_moving_averages(&averages)?;
        let summary = combine(&oscillators, &moving_averages);

        let snapshot = IndicatorSnapshot {
            rsi: Some(last_value("RSI", &rsi, cfg.rsi_period + 1)?).filter(|v| !v.is_nan()),
            macd: last_value("MACD", &macd.macd, cfg.macd_slow)?,
            signal: last_value("MACD signal", &macd.signal, cfg.macd_slow)?,
            histogram: last_value("MACD histogram", &macd.histogram, cfg.macd_slow)?,
            sma20: last_value("SMA20", &averages.sma20, cfg.sma_periods[0])?,
            sma50: last_value("SMA50", &averages.sma50, cfg.sma_periods[1])?,
            sma200: last_value("SMA200", &averages.sma200, cfg.sma_periods[2])?,
        };

        debug!(
            candles = candles.len(),
            rsi = ?snapshot.rsi,
            histogram = snapshot.histogram,
            oscillators = %oscillators.signal(),
            moving_averages = %moving_averages.signal(),
            summary = %summary.signal(),
            "SignalEngine: analysis complete"
        );

        Ok((
            IndicatorReport {
                oscillators,
                moving_averages,
                summary,
            },
            snapshot,
        ))
    }

    fn check_history(&self, provided: usize) -> Result<(), IndicatorError> {
        let cfg = &self.config;
        let required = cfg.min_candles();
        if provided >= required {
            return Ok(());
        }

        let indicator = if required == cfg.sma_periods[2] {
            format!("SMA{}", cfg.sma_periods[2])
        } else if required == cfg.macd_slow {
            "MACD".to_string()
        } else {
            format!("RSI{}", cfg.rsi_period)
        };
        Err(IndicatorError::insufficient(indicator, required, provided))
    }
}

/// Analyze with the default periods and thresholds
pub fn analyze(candles: &[Candle]) -> Result<IndicatorReport, IndicatorError> {
    SignalEngine::default().analyze(candles)
}
