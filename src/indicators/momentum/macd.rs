//! MACD (Moving Average Convergence Divergence) indicator

use crate::common::math;
use crate::indicators::error::IndicatorError;
use crate::indicators::validation::validate_period;
use crate::models::indicators::MacdSeries;

/// Calculate MACD series
///
/// MACD = EMA(fast) - EMA(slow)
/// Signal = EMA(signal) of MACD
/// Histogram = MACD - Signal
///
/// All three series keep the length of `closes`.
pub fn calculate_macd(
    closes: &[f64],
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> Result<MacdSeries, IndicatorError> {
    validate_period("MACD fast", fast_period)?;
    validate_period("MACD slow", slow_period)?;
    validate_period("MACD signal", signal_period)?;
    if fast_period >= slow_period {
        return Err(IndicatorError::InvalidPeriod(format!(
            "MACD fast period ({}) must be shorter than slow period ({})",
            fast_period, slow_period
        )));
    }

    if closes.len() < slow_period {
        return Err(IndicatorError::insufficient(
            "MACD",
            slow_period,
            closes.len(),
        ));
    }

    let fast_ema = math::ema(closes, fast_period);
    let slow_ema = math::ema(closes, slow_period);
    let macd = math::subtract(&fast_ema, &slow_ema);
    let signal = math::ema(&macd, signal_period);
    let histogram = math::subtract(&macd, &signal);

    Ok(MacdSeries {
        macd,
        signal,
        histogram,
    })
}

/// Calculate MACD with default periods (12, 26, 9)
pub fn calculate_macd_default(closes: &[f64]) -> Result<MacdSeries, IndicatorError> {
    calculate_macd(closes, 12, 26, 9)
}
