//! # Meridian Performance Analyzer
//!
//! This crate computes portfolio performance statistics: absolute and
//! percentage return, maximum drawdown, annualized volatility, the Sharpe
//! ratio, and period returns over an equity curve.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** A pure logic crate with no knowledge of external
//!   systems. It depends only on `core-types`, `timeseries`, and
//!   `configuration`.
//! - **Stateless Calculation:** The `PerformanceAnalyzer` is a stateless
//!   calculator. It takes positions and a value series as input and
//!   produces a `PerformanceReport` as output, which makes it reliable
//!   and easy to test.

pub mod engine;
pub mod error;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use engine::PerformanceAnalyzer;
pub use error::PerformanceError;
pub use report::PerformanceReport;
