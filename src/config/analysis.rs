//! Indicator periods and classification thresholds.

use serde::{Deserialize, Serialize};

use crate::indicators::IndicatorError;

/// RSI levels that turn the RSI vote into sell (above) or buy (below)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignalThresholds {
    pub rsi_overbought: f64,
    pub rsi_oversold: f64,
}

impl Default for SignalThresholds {
    fn default() -> Self {
        Self {
            rsi_overbought: 70.0,
            rsi_oversold: 30.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub rsi_period: usize,
    pub macd_fast: usize,
    pub macd_slow: usize,
    pub macd_signal: usize,
    /// Short, medium and long SMA periods, strictly increasing
    pub sma_periods: [usize; 3],
    pub thresholds: SignalThresholds,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            rsi_period: 14,
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
            sma_periods: [20, 50, 200],
            thresholds: SignalThresholds::default(),
        }
    }
}

impl AnalysisConfig {
    pub fn validate(&self) -> Result<(), IndicatorError> {
        let periods = [
            ("rsi_period", self.rsi_period),
            ("macd_fast", self.macd_fast),
            ("macd_slow", self.macd_slow),
            ("macd_signal", self.macd_signal),
        ];
        for (name, period) in periods {
            if period == 0 {
                return Err(IndicatorError::InvalidPeriod(format!("{} must be positive", name)));
            }
        }

        if self.macd_fast >= self.macd_slow {
            return Err(IndicatorError::InvalidPeriod(format!(
                "macd_fast ({}) must be shorter than macd_slow ({})",
                self.macd_fast, self.macd_slow
            )));
        }

        let [short, medium, long] = self.sma_periods;
        if short == 0 || short >= medium || medium >= long {
            return Err(IndicatorError::InvalidPeriod(format!(
                "sma_periods must be positive and strictly increasing, got {:?}",
                self.sma_periods
            )));
        }

        let SignalThresholds {
            rsi_overbought,
            rsi_oversold,
        } = self.thresholds;
        if !(0.0..=100.0).contains(&rsi_oversold)
            || !(0.0..=100.0).contains(&rsi_overbought)
            || rsi_oversold >= rsi_overbought
        {
            return Err(IndicatorError::InvalidThreshold(format!(
                "RSI thresholds must satisfy 0 <= oversold < overbought <= 100, got {} / {}",
                rsi_oversold, rsi_overbought
            )));
        }

        Ok(())
    }

    /// Bars needed before every indicator has a last value
    pub fn min_candles(&self) -> usize {
        let rsi = self.rsi_period + 1;
        self.sma_periods[2].max(self.macd_slow).max(rsi)
    }
}
