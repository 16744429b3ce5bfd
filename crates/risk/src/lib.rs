//! # Meridian Risk Analyzer
//!
//! Portfolio risk metrics: a correlation matrix over the held tickers, a
//! value-weighted portfolio beta, parametric Value-at-Risk, and a risk
//! decomposition.
//!
//! ## Architectural Principles
//!
//! - **Swappable Sources:** Correlations and betas come from the
//!   [`CorrelationSource`] and [`BetaSource`] traits. The analyzer's own
//!   contract — unit diagonal, symmetry, off-diagonals clamped to
//!   `[-0.9, 0.9]` — holds no matter how the entries are sourced, because
//!   the analyzer enforces it while assembling the matrix.
//! - **Deterministic Defaults:** The bundled sources are seeded estimates,
//!   not market observations. A production deployment would swap in
//!   history-derived implementations behind the same traits.

pub mod analyzer;
pub mod error;
pub mod report;
pub mod sources;

// Re-export the key components to create a clean, public-facing API.
pub use analyzer::RiskAnalyzer;
pub use error::RiskError;
pub use report::{CorrelationCell, RiskBreakdown, RiskReport, ValueAtRisk};
pub use sources::{BetaSource, CorrelationSource, SeededCorrelationSource, StaticBetaSource};
