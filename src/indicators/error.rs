use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum IndicatorError {
    /// Fewer bars than the warm-up of `indicator`
    #[error("insufficient data for {indicator}: need {required} values, got {provided}")]
    InsufficientData {
        indicator: String,
        required: usize,
        provided: usize,
    },

    #[error("invalid period: {0}")]
    InvalidPeriod(String),

    #[error("invalid threshold: {0}")]
    InvalidThreshold(String),

    #[error("candle {index} has a non-finite close price")]
    InvalidPrice { index: usize },

    #[error("candle {index} is not newer than the candle before it")]
    UnorderedCandles { index: usize },
}

impl IndicatorError {
    pub fn insufficient(indicator: impl Into<String>, required: usize, provided: usize) -> Self {
        IndicatorError::InsufficientData {
            indicator: indicator.into(),
            required,
            provided,
        }
    }
}
