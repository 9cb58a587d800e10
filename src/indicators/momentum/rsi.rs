//! RSI (Relative Strength Index) indicator

use crate::indicators::error::IndicatorError;
use crate::indicators::validation::validate_period;

pub const DEFAULT_RSI_PERIOD: usize = 14;

/// Calculate the RSI series with Wilder smoothing.
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = Average Gain / Average Loss
///
/// The averages are seeded with the simple mean of the first `period`
/// changes and smoothed as `(avg * (period - 1) + current) / period`
/// afterwards. The first value lines up with `closes[period]`, so the output
/// has `closes.len() - period` elements.
///
/// A zero average loss is left to IEEE-754: RS becomes infinite and the RSI
/// lands on exactly 100.
pub fn calculate_rsi(closes: &[f64], period: usize) -> Result<Vec<f64>, IndicatorError> {
    validate_period("RSI", period)?;
    if closes.len() < period + 1 {
        return Err(IndicatorError::insufficient(
            format!("RSI{}", period),
            period + 1,
            closes.len(),
        ));
    }

    let (gains, losses): (Vec<f64>, Vec<f64>) = closes
        .windows(2)
        .map(|pair| {
            let change = pair[1] - pair[0];
            (change.max(0.0), (-change).max(0.0))
        })
        .unzip();

    let p = period as f64;
    let mut avg_gain = gains[..period].iter().sum::<f64>() / p;
    let mut avg_loss = losses[..period].iter().sum::<f64>() / p;

    let mut values = Vec::with_capacity(closes.len() - period);
    values.push(rsi_value(avg_gain, avg_loss));

    for (gain, loss) in gains[period..].iter().zip(&losses[period..]) {
        avg_gain = (avg_gain * (p - 1.0) + gain) / p;
        avg_loss = (avg_loss * (p - 1.0) + loss) / p;
        values.push(rsi_value(avg_gain, avg_loss));
    }

    Ok(values)
}

/// Calculate RSI with default period (14)
pub fn calculate_rsi_default(closes: &[f64]) -> Result<Vec<f64>, IndicatorError> {
    calculate_rsi(closes, DEFAULT_RSI_PERIOD)
}

fn rsi_value(avg_gain: f64, avg_loss: f64) -> f64 {
    let rs = avg_gain / avg_loss;
    100.0 - 100.0 / (1.0 + rs)
}

