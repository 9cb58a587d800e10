//! Input checks run before any indicator is computed

use crate::indicators::error::IndicatorError;
use crate::models::indicators::Candle;

pub fn validate_candles(candles: &[Candle]) -> Result<(), IndicatorError> {
    for (index, candle) in candles.iter().enumerate() {
        if !candle.close.is_finite() {
            return Err(IndicatorError::InvalidPrice { index });
        }
        if index > 0 && candle.timestamp <= candles[index - 1].timestamp {
            return Err(IndicatorError::UnorderedCandles { index });
        }
    }
    Ok(())
}

pub fn validate_period(name: &str, period: usize) -> Result<(), IndicatorError> {
    if period == 0 {
        return Err(IndicatorError::InvalidPeriod(format!(
            "{} period must be positive",
            name
        )));
    }
    Ok(())
}

/// Last element of a computed series, or `InsufficientData` when it is empty
pub fn last_value(indicator: &str, series: &[f64], required: usize) -> Result<f64, IndicatorError> {
    series
        .last()
        .copied()
        .ok_or_else(|| IndicatorError::insufficient(indicator, required, 0))
}
