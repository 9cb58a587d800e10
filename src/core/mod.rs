//! Transport layer around the analysis engine

pub mod error;
pub mod http;

pub use error::ApiError;
pub use http::*;
