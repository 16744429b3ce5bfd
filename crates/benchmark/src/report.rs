use core_types::{Period, TimeSeriesPoint};
use serde::{Deserialize, Serialize};

/// The standardized output of a benchmark comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkReport {
    /// The benchmark symbol compared against (e.g., "SPY").
    pub benchmark: String,
    pub period: Period,
    /// Portfolio return over the window, in percent.
    pub portfolio_return: f64,
    /// Benchmark return over the window, in percent.
    pub benchmark_return: f64,
    /// Annualized standard deviation of daily return differences, in
    /// percent.
    pub tracking_error: f64,
    /// Excess return per unit of tracking error (0 when tracking error
    /// is 0).
    pub information_ratio: f64,
    /// `portfolio_return - benchmark_return`.
    pub alpha: f64,
    pub portfolio_time_series: Vec<TimeSeriesPoint>,
    pub benchmark_time_series: Vec<TimeSeriesPoint>,
}
