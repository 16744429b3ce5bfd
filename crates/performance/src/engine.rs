use crate::error::PerformanceError;
use crate::report::PerformanceReport;
use configuration::AnalysisSettings;
use core_types::{Position, TimeSeriesPoint};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use timeseries::{safe_divide, simple_returns, values};

/// A stateless calculator for portfolio performance metrics.
#[derive(Debug, Clone)]
pub struct PerformanceAnalyzer {
    risk_free_rate: f64,
    trading_days: f64,
}

impl PerformanceAnalyzer {
    pub fn new(settings: &AnalysisSettings) -> Self {
        Self {
            risk_free_rate: settings.risk_free_rate,
            trading_days: f64::from(settings.trading_days_per_year),
        }
    }

    /// The main entry point: computes the full performance report for a
    /// set of positions and their portfolio value series.
    pub fn analyze(
        &self,
        positions: &[Position],
        series: &[TimeSeriesPoint],
    ) -> Result<PerformanceReport, PerformanceError> {
        if positions.is_empty() {
            return Err(PerformanceError::InvalidInput(
                "no positions to analyze".to_string(),
            ));
        }

        let initial_value: Decimal = positions.iter().map(Position::cost_basis).sum();
        let current_value: Decimal = positions.iter().map(Position::market_value).sum();
        let absolute_return = current_value - initial_value;

        let percentage_return = safe_divide(
            absolute_return.to_f64().unwrap_or(0.0),
            initial_value.to_f64().unwrap_or(0.0),
            0.0,
        ) * 100.0;

        let report = PerformanceReport {
            initial_value,
            current_value,
            absolute_return,
            percentage_return,
            max_drawdown: self.max_drawdown(series),
            volatility: self.volatility(series)?,
            sharpe_ratio: self.sharpe_ratio(series)?,
            time_series: series.to_vec(),
        };

        tracing::debug!(
            positions = positions.len(),
            points = series.len(),
            "computed performance report"
        );

        Ok(report)
    }

    /// Total return over the series, in percent.
    ///
    /// Fails with `InvalidInput` when the series starts at zero, since the
    /// ratio is undefined there.
    pub fn period_return(&self, series: &[TimeSeriesPoint]) -> Result<f64, PerformanceError> {
        let (first, last) = match (series.first(), series.last()) {
            (Some(first), Some(last)) => (first.value, last.value),
            _ => {
                return Err(PerformanceError::InvalidInput(
                    "period return requires a non-empty series".to_string(),
                ));
            }
        };

        if first == 0.0 {
            return Err(PerformanceError::InvalidInput(
                "period return is undefined for a series starting at zero".to_string(),
            ));
        }

        Ok((last / first - 1.0) * 100.0)
    }

    /// Maximum peak-to-trough drawdown of the series, in percent.
    ///
    /// Single monotone-peak pass: the running peak only ever rises, and
    /// each point's decline is measured against it.
    pub fn max_drawdown(&self, series: &[TimeSeriesPoint]) -> f64 {
        let Some(first) = series.first() else {
            return 0.0;
        };

        let mut peak = first.value;
        let mut max_dd = 0.0_f64;

        for point in series {
            if point.value > peak {
                peak = point.value;
            }
            let drawdown = safe_divide(peak - point.value, peak, 0.0);
            max_dd = max_dd.max(drawdown);
        }

        max_dd * 100.0
    }

    /// Annualized volatility of the series' daily returns, in percent.
    pub fn volatility(&self, series: &[TimeSeriesPoint]) -> Result<f64, PerformanceError> {
        let returns = simple_returns(&values(series))?;
        Ok(timeseries::population_std_dev(&returns) * self.trading_days.sqrt() * 100.0)
    }

    /// Annualized Sharpe ratio of the series' daily returns.
    ///
    /// A flat series has zero return variance; the ratio is defined to be
    /// 0 in that case rather than an error.
    pub fn sharpe_ratio(&self, series: &[TimeSeriesPoint]) -> Result<f64, PerformanceError> {
        let returns = simple_returns(&values(series))?;

        let avg_return = timeseries::mean(&returns);
        let std_return = timeseries::population_std_dev(&returns);
        let risk_free_daily = self.risk_free_rate / self.trading_days;

        if std_return == 0.0 {
            return Ok(0.0);
        }

        Ok((avg_return - risk_free_daily) / std_return * self.trading_days.sqrt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn analyzer() -> PerformanceAnalyzer {
        PerformanceAnalyzer::new(&AnalysisSettings::default())
    }

    fn series(values: &[f64]) -> Vec<TimeSeriesPoint> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        values
            .iter()
            .enumerate()
            .map(|(i, &value)| TimeSeriesPoint {
                date: start + chrono::Duration::days(i as i64),
                value,
            })
            .collect()
    }

    fn aapl_position() -> Position {
        Position::new(
            "AAPL".to_string(),
            10,
            dec!(150.25),
            dec!(175.75),
            NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn position_returns_match_reference_scenario() {
        let report = analyzer()
            .analyze(&[aapl_position()], &series(&[1502.5, 1600.0, 1757.5]))
            .unwrap();

        assert_eq!(report.initial_value, dec!(1502.50));
        assert_eq!(report.current_value, dec!(1757.50));
        assert_eq!(report.absolute_return, dec!(255.00));
        assert_relative_eq!(report.percentage_return, 16.97, max_relative = 1e-3);
    }

    #[test]
    fn empty_portfolio_is_invalid_input() {
        let result = analyzer().analyze(&[], &series(&[100.0, 101.0]));
        assert!(matches!(result, Err(PerformanceError::InvalidInput(_))));
    }

    #[test]
    fn flat_series_has_zero_volatility_and_sharpe() {
        let flat = series(&[10.0, 10.0, 10.0, 10.0, 10.0]);
        let analyzer = analyzer();

        assert_eq!(analyzer.volatility(&flat).unwrap(), 0.0);
        assert_eq!(analyzer.sharpe_ratio(&flat).unwrap(), 0.0);
    }

    #[test]
    fn drawdown_tracks_the_running_peak() {
        // Peak 120, trough 90: drawdown 25%.
        let curve = series(&[100.0, 120.0, 90.0, 110.0]);
        assert_relative_eq!(analyzer().max_drawdown(&curve), 25.0, max_relative = 1e-12);
    }

    #[test]
    fn drawdown_is_zero_for_monotone_series() {
        let curve = series(&[100.0, 101.0, 105.0]);
        assert_eq!(analyzer().max_drawdown(&curve), 0.0);
    }

    #[test]
    fn period_return_rejects_zero_start() {
        let curve = series(&[0.0, 110.0]);
        assert!(matches!(
            analyzer().period_return(&curve),
            Err(PerformanceError::InvalidInput(_))
        ));
    }

    #[test]
    fn period_return_is_last_over_first() {
        let curve = series(&[100.0, 90.0, 112.0]);
        assert_relative_eq!(
            analyzer().period_return(&curve).unwrap(),
            12.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn short_series_is_insufficient_data() {
        let result = analyzer().volatility(&series(&[100.0]));
        assert!(matches!(
            result,
            Err(PerformanceError::InsufficientData(_))
        ));
    }
}
