//! End-to-end run of every analyzer over the deterministic synthetic
//! market-data source, checking the cross-analyzer consistency the
//! individual crates cannot see.

use benchmark::BenchmarkComparator;
use chrono::NaiveDate;
use configuration::Config;
use core_types::{Period, Position};
use diversification::DiversificationAnalyzer;
use indicators::TechnicalIndicatorEngine;
use market_data::{MarketDataSource, SyntheticMarketData};
use performance::PerformanceAnalyzer;
use risk::RiskAnalyzer;
use rust_decimal_macros::dec;

fn sample_positions() -> Vec<Position> {
    let date = NaiveDate::from_ymd_opt(2023, 1, 15).unwrap();
    vec![
        Position::new("AAPL".to_string(), 10, dec!(150.25), dec!(175.75), date).unwrap(),
        Position::new("MSFT".to_string(), 5, dec!(305.75), dec!(364.30), date).unwrap(),
        Position::new("GOOGL".to_string(), 2, dec!(2750.00), dec!(2850.25), date).unwrap(),
        Position::new("AMZN".to_string(), 3, dec!(3300.50), dec!(3450.75), date).unwrap(),
    ]
}

fn end_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 28).unwrap()
}

#[test]
fn performance_over_synthetic_series() {
    let config = Config::default();
    let positions = sample_positions();
    let source = SyntheticMarketData::new();

    let series = source
        .portfolio_values(&positions, end_date(), Period::OneMonth.days())
        .unwrap();
    let report = PerformanceAnalyzer::new(&config.analysis)
        .analyze(&positions, &series)
        .unwrap();

    let expected_initial = dec!(1502.50) + dec!(1528.75) + dec!(5500.00) + dec!(9901.50);
    assert_eq!(report.initial_value, expected_initial);
    assert_eq!(
        report.absolute_return,
        report.current_value - report.initial_value
    );
    assert!(report.max_drawdown >= 0.0);
    assert!(report.volatility >= 0.0);
    assert_eq!(report.time_series.len(), Period::OneMonth.days() + 1);
}

#[test]
fn indicators_over_synthetic_bars() {
    let config = Config::default();
    let source = SyntheticMarketData::new();

    let bars = source.price_bars("AAPL", end_date(), 100).unwrap();
    let report = TechnicalIndicatorEngine::new(&config.indicators)
        .analyze("AAPL", &bars)
        .unwrap();

    assert_eq!(report.indicators.sma.len(), 20);
    assert_eq!(report.indicators.macd.len(), 26);
    assert!(report.indicators.rsi.iter().all(|p| (0.0..=100.0).contains(&p.rsi)));
    assert!(report
        .indicators
        .bollinger
        .iter()
        .all(|p| p.upper >= p.middle && p.middle >= p.lower));
}

#[test]
fn risk_over_the_sample_portfolio() {
    let config = Config::default();
    let positions = sample_positions();

    let report = RiskAnalyzer::new(&config.risk).analyze(&positions).unwrap();

    assert_eq!(report.correlation_matrix.len(), positions.len());
    for (i, row) in report.correlation_matrix.iter().enumerate() {
        assert_eq!(row.len(), positions.len());
        assert_eq!(row[i].correlation, 1.0);
    }

    // All four sample tickers have known betas between 1.05 and 1.3.
    assert!(report.portfolio_beta > 1.0 && report.portfolio_beta < 1.3);
    assert!(
        (report.value_at_risk.ten_day - report.value_at_risk.daily * 10.0_f64.sqrt()).abs()
            < 1e-9
    );
}

#[test]
fn benchmark_comparison_over_synthetic_series() {
    let config = Config::default();
    let positions = sample_positions();
    let source = SyntheticMarketData::new();
    let days = Period::OneYear.days();

    let portfolio_series = source
        .portfolio_values(&positions, end_date(), days)
        .unwrap();
    let benchmark_series = source.benchmark_values("SPY", end_date(), days).unwrap();

    let report = BenchmarkComparator::new(&config.analysis)
        .compare("SPY", Period::OneYear, &portfolio_series, &benchmark_series)
        .unwrap();

    assert_eq!(report.benchmark, "SPY");
    assert!((report.alpha - (report.portfolio_return - report.benchmark_return)).abs() < 1e-9);
    assert!(report.tracking_error > 0.0);
    assert_eq!(report.portfolio_time_series.len(), days + 1);
    assert_eq!(report.benchmark_time_series.len(), days + 1);
}

#[test]
fn diversification_over_the_sample_portfolio() {
    let positions = sample_positions();
    let report = DiversificationAnalyzer::new().analyze(&positions).unwrap();

    assert_eq!(report.concentration.number_of_positions, 4);
    assert!((0.0..=10_000.0).contains(&report.concentration.hhi));
    assert!((0.0..=100.0).contains(&report.diversification_score));

    // Three tech names and one consumer cyclical.
    assert_eq!(report.sector_allocation.len(), 2);
    let total_pct: f64 = report.sector_allocation.iter().map(|b| b.percentage).sum();
    assert!((total_pct - 100.0).abs() < 1e-9);
}

#[test]
fn reports_serialize_with_camel_case_fields() {
    let config = Config::default();
    let positions = sample_positions();
    let source = SyntheticMarketData::new();

    let series = source
        .portfolio_values(&positions, end_date(), 30)
        .unwrap();
    let report = PerformanceAnalyzer::new(&config.analysis)
        .analyze(&positions, &series)
        .unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert!(json.get("initialValue").is_some());
    assert!(json.get("percentageReturn").is_some());
    assert!(json.get("maxDrawdown").is_some());
    // Money fields serialize as plain numbers, not strings.
    assert!(json["absoluteReturn"].is_number());
}
