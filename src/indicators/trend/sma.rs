//! SMA (Simple Moving Average) indicator and the 20/50/200 bundle

use crate::common::math;
use crate::indicators::error::IndicatorError;
use crate::indicators::validation::validate_period;
use crate::models::indicators::MovingAverages;

pub const DEFAULT_SMA_PERIODS: [usize; 3] = [20, 50, 200];

/// Calculate SMA for a specific period
pub fn calculate_sma(closes: &[f64], period: usize) -> Result<Vec<f64>, IndicatorError> {
    validate_period("SMA", period)?;
    if closes.len() < period {
        return Err(IndicatorError::insufficient(
            format!("SMA{}", period),
            period,
            closes.len(),
        ));
    }
    Ok(math::sma(closes, period))
}

/// Calculate the short/medium/long SMA bundle.
///
/// Each series is computed on its own; the longest period fails first when
/// history is short, so the error names it.
pub fn calculate_moving_averages(
    closes: &[f64],
    periods: [usize; 3],
) -> Result<MovingAverages, IndicatorError> {
    let [short, medium, long] = periods;
    let sma200 = calculate_sma(closes, long)?;
    let sma50 = calculate_sma(closes, medium)?;
    let sma20 = calculate_sma(closes, short)?;

    Ok(MovingAverages {
        sma20,
        sma50,
        sma200,
    })
}

/// Calculate SMA 20/50/200
pub fn calculate_moving_averages_default(
    closes: &[f64],
) -> Result<MovingAverages, IndicatorError> {
    calculate_moving_averages(closes, DEFAULT_SMA_PERIODS)
}
