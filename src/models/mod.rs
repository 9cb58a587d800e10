//! Shared data models spanning the engine layers.

pub mod indicators;
pub mod signal;

pub use indicators::{Candle, IndicatorSnapshot, MacdSeries, MovingAverages};
pub use signal::{IndicatorReport, SignalKind, SignalVote};
