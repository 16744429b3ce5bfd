//! # Meridian Market Data
//!
//! The injectable data-sourcing capability the analytics core depends on.
//!
//! The analyzers themselves never fetch anything: they consume series that
//! a `MarketDataSource` produced. This crate defines that seam and ships
//! one implementation, [`SyntheticMarketData`], a deterministic seeded
//! generator. A real feed adapter would implement the same trait; the
//! analyzer contracts hold either way.

use chrono::NaiveDate;
use core_types::{Position, PriceBar, TimeSeriesPoint};

pub mod error;
pub mod synthetic;

pub use error::MarketDataError;
pub use synthetic::SyntheticMarketData;

/// A provider of historical price and value series.
///
/// Every returned series is ordered ascending by date with no duplicates,
/// and every generated close/value is strictly positive.
pub trait MarketDataSource {
    /// Daily OHLCV bars for a ticker, ending at `end_date` inclusive.
    fn price_bars(
        &self,
        ticker: &str,
        end_date: NaiveDate,
        days: usize,
    ) -> Result<Vec<PriceBar>, MarketDataError>;

    /// A daily portfolio value series for the given holdings.
    fn portfolio_values(
        &self,
        positions: &[Position],
        end_date: NaiveDate,
        days: usize,
    ) -> Result<Vec<TimeSeriesPoint>, MarketDataError>;

    /// A daily value series for a named benchmark index.
    fn benchmark_values(
        &self,
        benchmark: &str,
        end_date: NaiveDate,
        days: usize,
    ) -> Result<Vec<TimeSeriesPoint>, MarketDataError>;
}
