use crate::error::BenchmarkError;
use crate::report::BenchmarkReport;
use configuration::AnalysisSettings;
use core_types::{Period, TimeSeriesPoint};
use performance::PerformanceAnalyzer;
use timeseries::{population_std_dev, safe_divide, simple_returns, values};

/// A stateless calculator for portfolio-versus-benchmark statistics.
#[derive(Debug, Clone)]
pub struct BenchmarkComparator {
    performance: PerformanceAnalyzer,
    trading_days: f64,
}

impl BenchmarkComparator {
    pub fn new(settings: &AnalysisSettings) -> Self {
        Self {
            performance: PerformanceAnalyzer::new(settings),
            trading_days: f64::from(settings.trading_days_per_year),
        }
    }

    /// The main entry point: compares aligned portfolio and benchmark
    /// series over one period.
    pub fn compare(
        &self,
        benchmark: &str,
        period: Period,
        portfolio_series: &[TimeSeriesPoint],
        benchmark_series: &[TimeSeriesPoint],
    ) -> Result<BenchmarkReport, BenchmarkError> {
        check_alignment(portfolio_series, benchmark_series)?;

        let portfolio_return = self.performance.period_return(portfolio_series)?;
        let benchmark_return = self.performance.period_return(benchmark_series)?;

        let tracking_error = self.tracking_error(portfolio_series, benchmark_series)?;
        let excess_return = portfolio_return - benchmark_return;

        tracing::debug!(
            benchmark,
            %period,
            tracking_error,
            excess_return,
            "compared portfolio against benchmark"
        );

        Ok(BenchmarkReport {
            benchmark: benchmark.to_string(),
            period,
            portfolio_return,
            benchmark_return,
            tracking_error,
            information_ratio: safe_divide(excess_return, tracking_error, 0.0),
            alpha: excess_return,
            portfolio_time_series: portfolio_series.to_vec(),
            benchmark_time_series: benchmark_series.to_vec(),
        })
    }

    /// Annualized standard deviation of the daily return differences, in
    /// percent. Zero for a portfolio that tracks its benchmark exactly.
    pub fn tracking_error(
        &self,
        portfolio_series: &[TimeSeriesPoint],
        benchmark_series: &[TimeSeriesPoint],
    ) -> Result<f64, BenchmarkError> {
        check_alignment(portfolio_series, benchmark_series)?;

        let portfolio_returns = simple_returns(&values(portfolio_series))?;
        let benchmark_returns = simple_returns(&values(benchmark_series))?;

        let differences: Vec<f64> = portfolio_returns
            .iter()
            .zip(&benchmark_returns)
            .map(|(p, b)| p - b)
            .collect();

        Ok(population_std_dev(&differences) * self.trading_days.sqrt() * 100.0)
    }
}

fn check_alignment(
    portfolio_series: &[TimeSeriesPoint],
    benchmark_series: &[TimeSeriesPoint],
) -> Result<(), BenchmarkError> {
    if portfolio_series.len() != benchmark_series.len() {
        return Err(BenchmarkError::MisalignedSeries {
            portfolio: portfolio_series.len(),
            benchmark: benchmark_series.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

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

    fn comparator() -> BenchmarkComparator {
        BenchmarkComparator::new(&AnalysisSettings::default())
    }

    #[test]
    fn identical_series_produce_zero_everything() {
        let curve = series(&[100.0, 104.0, 99.0, 107.0]);
        let report = comparator()
            .compare("SPY", Period::OneYear, &curve, &curve)
            .unwrap();

        assert_eq!(report.tracking_error, 0.0);
        assert_eq!(report.information_ratio, 0.0);
        assert_eq!(report.alpha, 0.0);
    }

    #[test]
    fn misaligned_series_are_rejected() {
        let portfolio = series(&[100.0, 101.0, 102.0]);
        let benchmark = series(&[100.0, 101.0]);

        let result = comparator().compare("SPY", Period::OneYear, &portfolio, &benchmark);
        assert!(matches!(
            result,
            Err(BenchmarkError::MisalignedSeries { portfolio: 3, benchmark: 2 })
        ));
    }

    #[test]
    fn alpha_is_the_return_difference() {
        let portfolio = series(&[100.0, 105.0, 120.0]);
        let benchmark = series(&[100.0, 102.0, 110.0]);
        let report = comparator()
            .compare("SPY", Period::OneYear, &portfolio, &benchmark)
            .unwrap();

        assert_relative_eq!(report.portfolio_return, 20.0, max_relative = 1e-12);
        assert_relative_eq!(report.benchmark_return, 10.0, max_relative = 1e-12);
        assert_relative_eq!(report.alpha, 10.0, max_relative = 1e-12);
        assert!(report.tracking_error > 0.0);
        assert_relative_eq!(
            report.information_ratio,
            10.0 / report.tracking_error,
            max_relative = 1e-12
        );
    }

    #[test]
    fn tracking_error_matches_hand_calculation() {
        // Portfolio returns: +10%, -10%; benchmark returns: +5%, +5%.
        // Differences: 0.05, -0.15; population std = 0.1.
        let portfolio = series(&[100.0, 110.0, 99.0]);
        let benchmark = series(&[100.0, 105.0, 110.25]);

        let te = comparator().tracking_error(&portfolio, &benchmark).unwrap();
        assert_relative_eq!(te, 0.1 * 252.0_f64.sqrt() * 100.0, max_relative = 1e-9);
    }
}
