//! # Meridian Technical Indicator Engine
//!
//! Batch computation of SMA, EMA, RSI, MACD, and Bollinger Bands over an
//! ascending daily close-price series.
//!
//! Every indicator computes its full recurrence or window walk over the
//! whole series, then reports only the most recent `period` values zipped
//! against the most recent `period` dates. That truncation is the
//! documented external contract of the engine, so it is preserved exactly
//! even though it discards earlier values.
//!
//! Indicators are independent of each other: they share only a read-only
//! view of the close array and may run in any order.

pub mod engine;
pub mod error;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use engine::TechnicalIndicatorEngine;
pub use error::IndicatorError;
pub use report::{
    BollingerPoint, EmaPoint, IndicatorReport, IndicatorSet, MacdPoint, RsiPoint, SmaPoint,
};
