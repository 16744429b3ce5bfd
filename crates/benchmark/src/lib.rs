//! # Meridian Benchmark Comparator
//!
//! Compares a portfolio value series against a benchmark value series over
//! the same date range: tracking error, information ratio, and alpha.
//!
//! Built on the same return-series primitives as the performance analyzer,
//! so period returns reported here match the performance endpoint for the
//! same series.

pub mod comparator;
pub mod error;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use comparator::BenchmarkComparator;
pub use error::BenchmarkError;
pub use report::BenchmarkReport;
