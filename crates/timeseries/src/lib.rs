//! # Meridian TimeSeries Utilities
//!
//! Shared numeric helpers for every analyzer: return-series derivation,
//! rolling-window iteration, and division that is safe against zero bases.
//!
//! These are stateless `f64` functions. Money stays in `Decimal` inside
//! the analyzers; series statistics work in floating point and convert at
//! the boundary, the same trade-off the rest of the workspace makes.

use core_types::TimeSeriesPoint;

pub mod error;

pub use error::TimeSeriesError;

/// Extracts the raw values of a dated series.
pub fn values(series: &[TimeSeriesPoint]) -> Vec<f64> {
    series.iter().map(|point| point.value).collect()
}

/// Computes the simple period-over-period return series `(v[i] / v[i-1]) - 1`.
///
/// The output is one element shorter than the input. A series with fewer
/// than two points has no returns and is rejected as insufficient data.
pub fn simple_returns(values: &[f64]) -> Result<Vec<f64>, TimeSeriesError> {
    if values.len() < 2 {
        return Err(TimeSeriesError::InsufficientData {
            required: 2,
            actual: values.len(),
        });
    }

    Ok(values
        .windows(2)
        .map(|window| safe_divide(window[1], window[0], 1.0) - 1.0)
        .collect())
}

/// Returns `fallback` when the divisor is zero, `a / b` otherwise.
///
/// Used everywhere a base can legitimately be zero: initial portfolio
/// value, volatility, tracking error.
pub fn safe_divide(a: f64, b: f64, fallback: f64) -> f64 {
    if b == 0.0 { fallback } else { a / b }
}

/// Arithmetic mean; 0.0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (divisor `n`, not `n - 1`); 0.0 for an
/// empty slice.
pub fn population_std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let avg = mean(values);
    let variance = values.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Iterates the trailing windows of size `period` over a series.
///
/// Fails with `InsufficientData` when the series is shorter than one
/// full window.
pub fn rolling(values: &[f64], period: usize) -> Result<std::slice::Windows<'_, f64>, TimeSeriesError> {
    if period == 0 || values.len() < period {
        return Err(TimeSeriesError::InsufficientData {
            required: period.max(1),
            actual: values.len(),
        });
    }
    Ok(values.windows(period))
}
