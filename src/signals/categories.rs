//! Per-category classifiers: oscillators (RSI + MACD) and moving averages

use crate::config::SignalThresholds;
use crate::indicators::error::IndicatorError;
use crate::indicators::validation::last_value;
use crate::models::indicators::{MacdSeries, MovingAverages};
use crate::models::signal::{SignalKind, SignalVote};

/// Sub-votes contributed by the oscillator category
pub const OSCILLATOR_VOTES: u32 = 2;
/// Sub-votes contributed by the moving-average category
pub const MOVING_AVERAGE_VOTES: u32 = 3;

/// Overbought RSI is a sell, oversold RSI is a buy.
///
/// A NaN reading (flat window, 0/0) fails both comparisons and stays neutral.
pub fn classify_rsi(rsi: f64, thresholds: &SignalThresholds) -> SignalKind {
    if rsi > thresholds.rsi_overbought {
        SignalKind::Sell
    } else if rsi < thresholds.rsi_oversold {
        SignalKind::Buy
    } else {
        SignalKind::Neutral
    }
}

pub fn classify_macd(macd: f64, signal: f64, histogram: f64) -> SignalKind {
    if macd > signal && histogram > 0.0 {
        SignalKind::Buy
    } else if macd < signal && histogram < 0.0 {
        SignalKind::Sell
    } else {
        SignalKind::Neutral
    }
}

/// Buy when the faster average sits above the slower one
pub fn compare_averages(faster: f64, slower: f64) -> SignalKind {
    if faster > slower {
        SignalKind::Buy
    } else if faster < slower {
        SignalKind::Sell
    } else {
        SignalKind::Neutral
    }
}

/// Classify the last RSI and MACD readings into one vote
pub fn classify_oscillators(
    rsi: &[f64],
    macd: &MacdSeries,
    thresholds: &SignalThresholds,
) -> Result<SignalVote, IndicatorError> {
    let rsi_last = last_value("RSI", rsi, 1)?;
    let macd_last = last_value("MACD", &macd.macd, 1)?;
    let signal_last = last_value("MACD signal", &macd.signal, 1)?;
    let histogram_last = last_value("MACD histogram", &macd.histogram, 1)?;

    Ok(SignalVote::tally(&[
        classify_rsi(rsi_last, thresholds),
        classify_macd(macd_last, signal_last, histogram_last),
    ]))
}

/// Compare the last SMA values pairwise: 20/50, 50/200, 20/200
pub fn classify_moving_averages(averages: &MovingAverages) -> Result<SignalVote, IndicatorError> {
    let sma20 = last_value("SMA20", &averages.sma20, 20)?;
    let sma50 = last_value("SMA50", &averages.sma50, 50)?;
    let sma200 = last_value("SMA200", &averages.sma200, 200)?;

    Ok(SignalVote::tally(&[
        compare_averages(sma20, sma50),
        compare_averages(sma50, sma200),
        compare_averages(sma20, sma200),
    ]))
}
