use anyhow::Context;
use benchmark::BenchmarkComparator;
use chrono::Local;
use clap::{Parser, Subcommand};
use comfy_table::Table;
use core_types::{Period, Position};
use diversification::DiversificationAnalyzer;
use indicators::TechnicalIndicatorEngine;
use market_data::{MarketDataSource, SyntheticMarketData};
use performance::PerformanceAnalyzer;
use risk::RiskAnalyzer;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// The main entry point for the Meridian portfolio analytics CLI.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = configuration::load_config()?;
    let source = SyntheticMarketData::new();
    let today = Local::now().date_naive();

    match cli.command {
        Commands::Performance(args) => {
            let positions = load_positions(&args.positions)?;
            let series =
                source.portfolio_values(&positions, today, args.period.days())?;
            let report =
                PerformanceAnalyzer::new(&config.analysis).analyze(&positions, &series)?;
            print_json(&report)
        }
        Commands::Technical(args) => {
            let bars = source.price_bars(&args.ticker, today, args.days)?;
            let report =
                TechnicalIndicatorEngine::new(&config.indicators).analyze(&args.ticker, &bars)?;
            print_json(&report)
        }
        Commands::Risk(args) => {
            let positions = load_positions(&args.positions)?;
            let report = RiskAnalyzer::new(&config.risk).analyze(&positions)?;
            print_json(&report)
        }
        Commands::Benchmark(args) => {
            let positions = load_positions(&args.positions)?;
            let days = args.period.days();
            let portfolio_series = source.portfolio_values(&positions, today, days)?;
            let benchmark_series = source.benchmark_values(&args.benchmark, today, days)?;
            let report = BenchmarkComparator::new(&config.analysis).compare(
                &args.benchmark,
                args.period,
                &portfolio_series,
                &benchmark_series,
            )?;
            print_json(&report)
        }
        Commands::Diversification(args) => {
            let positions = load_positions(&args.positions)?;
            let report = DiversificationAnalyzer::new().analyze(&positions)?;
            if args.table {
                print_allocation_tables(&report);
                Ok(())
            } else {
                print_json(&report)
            }
        }
    }
}

/// Quantitative analytics over a brokerage portfolio.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Portfolio performance statistics: returns, drawdown, volatility, Sharpe.
    Performance(PerformanceArgs),
    /// Technical indicators (SMA, EMA, RSI, MACD, Bollinger) for one ticker.
    Technical(TechnicalArgs),
    /// Risk metrics: correlation matrix, portfolio beta, Value-at-Risk.
    Risk(PositionsArgs),
    /// Portfolio performance compared against a benchmark index.
    Benchmark(BenchmarkArgs),
    /// Sector/asset-class allocation and concentration metrics.
    Diversification(DiversificationArgs),
}

#[derive(Parser)]
struct PerformanceArgs {
    /// Path to a JSON file with the portfolio's positions.
    #[arg(long)]
    positions: PathBuf,

    /// The lookback window (1w, 1m, 3m, 6m, 1y, 3y, 5y).
    #[arg(long, default_value = "1m")]
    period: Period,
}

#[derive(Parser)]
struct TechnicalArgs {
    /// The ticker symbol to compute indicators for (e.g., "AAPL").
    #[arg(long)]
    ticker: String,

    /// How many calendar days of price history to analyze.
    #[arg(long, default_value_t = 100)]
    days: usize,
}

#[derive(Parser)]
struct PositionsArgs {
    /// Path to a JSON file with the portfolio's positions.
    #[arg(long)]
    positions: PathBuf,
}

#[derive(Parser)]
struct BenchmarkArgs {
    /// Path to a JSON file with the portfolio's positions.
    #[arg(long)]
    positions: PathBuf,

    /// The benchmark symbol to compare against.
    #[arg(long, default_value = "SPY")]
    benchmark: String,

    /// The lookback window (1w, 1m, 3m, 6m, 1y, 3y, 5y).
    #[arg(long, default_value = "1y")]
    period: Period,
}

#[derive(Parser)]
struct DiversificationArgs {
    /// Path to a JSON file with the portfolio's positions.
    #[arg(long)]
    positions: PathBuf,

    /// Render allocation breakdowns as tables instead of JSON.
    #[arg(long)]
    table: bool,
}

/// Reads and validates a positions file. Validation happens inside the
/// `Position` deserializer, so a file with a bad record fails here with a
/// specific message.
fn load_positions(path: &PathBuf) -> anyhow::Result<Vec<Position>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read positions file {}", path.display()))?;
    let positions: Vec<Position> = serde_json::from_str(&contents)
        .with_context(|| format!("invalid positions file {}", path.display()))?;

    if positions.is_empty() {
        anyhow::bail!("positions file {} contains no positions", path.display());
    }

    tracing::info!(count = positions.len(), "loaded positions");
    Ok(positions)
}

fn print_json<T: serde::Serialize>(report: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

fn print_allocation_tables(report: &diversification::DiversificationReport) {
    for (title, buckets) in [
        ("Sector", &report.sector_allocation),
        ("Asset Class", &report.asset_class_allocation),
    ] {
        let mut table = Table::new();
        table.set_header(vec![title, "Value", "Percentage"]);
        for bucket in buckets {
            table.add_row(vec![
                bucket.label.clone(),
                format!("{:.2}", bucket.value),
                format!("{:.2}%", bucket.percentage),
            ]);
        }
        println!("{table}");
    }

    println!(
        "Diversification score: {:.1} (HHI {:.0}, {} positions)",
        report.diversification_score,
        report.concentration.hhi,
        report.concentration.number_of_positions
    );
}
