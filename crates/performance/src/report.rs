use core_types::TimeSeriesPoint;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The standardized output of a portfolio performance analysis.
///
/// Field names (via camelCase renaming) are part of the external
/// compatibility surface; money fields are exact `Decimal` values that
/// serialize as plain numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceReport {
    /// Total cost basis of all positions.
    pub initial_value: Decimal,
    /// Total market value of all positions.
    pub current_value: Decimal,
    /// `current_value - initial_value`, exact.
    pub absolute_return: Decimal,
    /// Absolute return over initial value, in percent (0 on a zero base).
    pub percentage_return: f64,
    /// Largest peak-to-trough decline of the value series, in percent.
    pub max_drawdown: f64,
    /// Annualized standard deviation of daily returns, in percent.
    pub volatility: f64,
    /// Annualized excess return per unit of volatility (0 on zero variance).
    pub sharpe_ratio: f64,
    /// The value series the statistics were computed from.
    pub time_series: Vec<TimeSeriesPoint>,
}
