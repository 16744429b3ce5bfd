use crate::error::MarketDataError;
use crate::MarketDataSource;
use chrono::{Duration, NaiveDate};
use core_types::{Position, PriceBar, TimeSeriesPoint};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::Normal;
use rust_decimal::prelude::ToPrimitive;

/// A deterministic synthetic market-data generator.
///
/// Series are produced from a linear trend plus Gaussian daily noise, with
/// the RNG seeded from the ticker or benchmark name, so the same request
/// always yields the same series. This stands in for a real feed in tests
/// and demos; it is not a price model.
#[derive(Debug, Clone, Default)]
pub struct SyntheticMarketData {}

impl SyntheticMarketData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sums the bytes of a name into an RNG seed, so distinct tickers get
    /// distinct but reproducible series.
    fn name_seed(name: &str) -> u64 {
        name.bytes().map(u64::from).sum()
    }

    /// Dates for `days + 1` consecutive calendar days ending at `end_date`.
    fn date_range(end_date: NaiveDate, days: usize) -> Vec<NaiveDate> {
        let start = end_date - Duration::days(days as i64);
        (0..=days as i64).map(|i| start + Duration::days(i)).collect()
    }

    /// Builds a value path `base * (1 + trend[i] + noise[i])`, where the
    /// trend rises linearly from 0 to `total_trend` across the range and
    /// the noise is drawn from `N(0, noise_std)`. Values are floored just
    /// above zero so downstream return math stays defined.
    fn trended_values(
        rng: &mut StdRng,
        base: f64,
        total_trend: f64,
        noise_std: f64,
        points: usize,
    ) -> Vec<f64> {
        let noise = Normal::new(0.0, noise_std).expect("noise_std is a fixed positive constant");
        let steps = (points - 1).max(1) as f64;

        (0..points)
            .map(|i| {
                let trend = total_trend * i as f64 / steps;
                let value = base * (1.0 + trend + rng.sample(noise));
                value.max(base * 1e-4)
            })
            .collect()
    }
}

impl MarketDataSource for SyntheticMarketData {
    /// Generates OHLCV bars around a trended close path.
    ///
    /// The starting price, trend direction, and magnitude are all derived
    /// from the ticker seed, mirroring how distinct symbols behave
    /// differently on a real feed.
    fn price_bars(
        &self,
        ticker: &str,
        end_date: NaiveDate,
        days: usize,
    ) -> Result<Vec<PriceBar>, MarketDataError> {
        if ticker.is_empty() {
            return Err(MarketDataError::InvalidRequest(
                "ticker must not be empty".to_string(),
            ));
        }

        let seed = Self::name_seed(ticker);
        let mut rng = StdRng::seed_from_u64(seed);

        let start_price = 50.0 + (seed % 450) as f64;
        let trend_direction = if seed % 3 != 0 { 1.0 } else { -1.0 };
        let trend_magnitude = 0.2 + (seed % 20) as f64 / 100.0;

        let dates = Self::date_range(end_date, days);
        let closes = Self::trended_values(
            &mut rng,
            start_price,
            trend_direction * trend_magnitude,
            0.015,
            dates.len(),
        );

        tracing::debug!(ticker, days, start_price, "generated synthetic price path");

        let bars = dates
            .into_iter()
            .zip(closes)
            .map(|(date, close)| {
                let open = close * (1.0 - rng.gen_range(0.005..0.015));
                let high = close * (1.0 + rng.gen_range(0.005..0.025));
                let low = close * (1.0 - rng.gen_range(0.010..0.030));
                let volume = rng.gen_range(1_000_000..10_000_000);

                PriceBar {
                    date,
                    open,
                    high,
                    low,
                    close,
                    volume,
                }
            })
            .collect();

        Ok(bars)
    }

    /// Generates a portfolio equity curve starting from the positions'
    /// total cost basis, trending up 15% over the window.
    fn portfolio_values(
        &self,
        positions: &[Position],
        end_date: NaiveDate,
        days: usize,
    ) -> Result<Vec<TimeSeriesPoint>, MarketDataError> {
        if positions.is_empty() {
            return Err(MarketDataError::InvalidRequest(
                "portfolio has no positions".to_string(),
            ));
        }

        let base: f64 = positions
            .iter()
            .map(|p| p.cost_basis().to_f64().unwrap_or(0.0))
            .sum();

        let mut rng = StdRng::seed_from_u64(42);
        let dates = Self::date_range(end_date, days);
        let values = Self::trended_values(&mut rng, base, 0.15, 0.01, dates.len());

        Ok(dates
            .into_iter()
            .zip(values)
            .map(|(date, value)| TimeSeriesPoint { date, value })
            .collect())
    }

    /// Generates a benchmark value series from an arbitrary 10,000 base.
    /// Well-known benchmarks get characteristic trends.
    fn benchmark_values(
        &self,
        benchmark: &str,
        end_date: NaiveDate,
        days: usize,
    ) -> Result<Vec<TimeSeriesPoint>, MarketDataError> {
        if benchmark.is_empty() {
            return Err(MarketDataError::InvalidRequest(
                "benchmark must not be empty".to_string(),
            ));
        }

        let total_trend = match benchmark.to_uppercase().as_str() {
            "SPY" => 0.12,
            "QQQ" => 0.18,
            "DIA" => 0.08,
            _ => 0.10,
        };

        let mut rng = StdRng::seed_from_u64(Self::name_seed(benchmark));
        let dates = Self::date_range(end_date, days);
        let values = Self::trended_values(&mut rng, 10_000.0, total_trend, 0.008, dates.len());

        Ok(dates
            .into_iter()
            .zip(values)
            .map(|(date, value)| TimeSeriesPoint { date, value })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn end_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 28).unwrap()
    }

    fn position(ticker: &str) -> Position {
        Position::new(
            ticker.to_string(),
            10,
            Decimal::new(10025, 2),
            Decimal::new(11050, 2),
            NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn price_bars_are_deterministic_per_ticker() {
        let source = SyntheticMarketData::new();
        let first = source.price_bars("AAPL", end_date(), 100).unwrap();
        let second = source.price_bars("AAPL", end_date(), 100).unwrap();
        let other = source.price_bars("MSFT", end_date(), 100).unwrap();

        assert_eq!(first, second);
        assert_ne!(first, other);
    }

    #[test]
    fn bars_are_ordered_with_positive_closes() {
        let source = SyntheticMarketData::new();
        let bars = source.price_bars("GOOGL", end_date(), 100).unwrap();

        assert_eq!(bars.len(), 101);
        assert!(bars.windows(2).all(|w| w[0].date < w[1].date));
        assert!(bars.iter().all(|b| b.close > 0.0));
    }

    #[test]
    fn portfolio_series_starts_near_cost_basis() {
        let source = SyntheticMarketData::new();
        let positions = vec![position("AAPL"), position("MSFT")];
        let series = source.portfolio_values(&positions, end_date(), 30).unwrap();

        assert_eq!(series.len(), 31);
        // Base is 2 * 10 * 100.25 = 2005; day one deviates only by noise.
        assert!((series[0].value - 2005.0).abs() < 2005.0 * 0.05);
    }

    #[test]
    fn empty_portfolio_is_rejected() {
        let source = SyntheticMarketData::new();
        assert!(source.portfolio_values(&[], end_date(), 30).is_err());
    }

    #[test]
    fn benchmark_series_is_deterministic() {
        let source = SyntheticMarketData::new();
        let first = source.benchmark_values("SPY", end_date(), 365).unwrap();
        let second = source.benchmark_values("SPY", end_date(), 365).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.len(), 366);
    }
}
