//! Technical-indicator signal engine.
//!
//! Price bars in, `IndicatorReport` out. The HTTP layer in [`core::http`] and
//! the market-data client in [`services`] are thin transports around
//! [`signals::engine::SignalEngine`].

pub mod common;
pub mod config;
pub mod core;
pub mod indicators;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;
pub mod signals;
