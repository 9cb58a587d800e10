//! Vote classification and the analysis pipeline.

pub mod aggregation;
pub mod categories;
pub mod engine;
pub mod scoring;

pub use aggregation::*;
pub use categories::*;
pub use engine::SignalEngine;
pub use scoring::*;
