//! # Meridian Diversification Analyzer
//!
//! Sector and asset-class allocation plus concentration metrics (top
//! holdings, Herfindahl-Hirschman Index) over a position list.
//!
//! Ticker classification comes from the injectable
//! [`ClassificationSource`] trait; a static default table ships with the
//! crate and unknown tickers fall into "Other". Allocation values are
//! grouped in exact `Decimal` arithmetic so bucket sums always equal the
//! portfolio total.

pub mod analyzer;
pub mod classification;
pub mod error;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use analyzer::DiversificationAnalyzer;
pub use classification::{ClassificationSource, StaticClassification};
pub use error::DiversificationError;
pub use report::{ConcentrationMetrics, DiversificationReport};
