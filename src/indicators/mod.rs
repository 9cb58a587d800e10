pub mod error;
pub mod validation;

pub mod momentum;
pub mod trend;

pub use error::IndicatorError;
pub use validation::*;
