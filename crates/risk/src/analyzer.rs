use crate::error::RiskError;
use crate::report::{CorrelationCell, RiskBreakdown, RiskReport, ValueAtRisk};
use crate::sources::{BetaSource, CorrelationSource, SeededCorrelationSource, StaticBetaSource};
use configuration::RiskSettings;
use core_types::Position;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use timeseries::safe_divide;

/// Off-diagonal correlation entries are clamped to this bound; the
/// diagonal is exactly 1.
const CORRELATION_BOUND: f64 = 0.9;

/// A calculator for portfolio risk metrics over injectable correlation
/// and beta sources.
pub struct RiskAnalyzer {
    correlations: Box<dyn CorrelationSource>,
    betas: Box<dyn BetaSource>,
    settings: RiskSettings,
}

impl RiskAnalyzer {
    /// Creates an analyzer with the bundled deterministic sources.
    pub fn new(settings: &RiskSettings) -> Self {
        Self::with_sources(
            settings,
            Box::new(SeededCorrelationSource::new()),
            Box::new(StaticBetaSource::new()),
        )
    }

    /// Creates an analyzer over caller-supplied sources (e.g., estimates
    /// derived from real return history, or fixtures in tests).
    pub fn with_sources(
        settings: &RiskSettings,
        correlations: Box<dyn CorrelationSource>,
        betas: Box<dyn BetaSource>,
    ) -> Self {
        Self {
            correlations,
            betas,
            settings: settings.clone(),
        }
    }

    /// The main entry point: computes the full risk report for a set of
    /// positions.
    pub fn analyze(&self, positions: &[Position]) -> Result<RiskReport, RiskError> {
        if positions.is_empty() {
            return Err(RiskError::EmptyPortfolio);
        }

        let tickers: Vec<&str> = positions.iter().map(|p| p.ticker.as_str()).collect();
        let total_value: Decimal = positions.iter().map(Position::market_value).sum();
        let total_value = total_value.to_f64().unwrap_or(0.0);

        tracing::debug!(
            positions = positions.len(),
            total_value,
            "computing risk report"
        );

        Ok(RiskReport {
            correlation_matrix: self.correlation_matrix(&tickers),
            portfolio_beta: self.portfolio_beta(positions),
            value_at_risk: self.value_at_risk(total_value),
            risk_breakdown: RiskBreakdown {
                market_risk: self.settings.market_risk_pct,
                sector_risk: self.settings.sector_risk_pct,
                specific_risk: self.settings.specific_risk_pct,
            },
        })
    }

    /// Assembles the `n x n` correlation matrix over the given tickers.
    ///
    /// Each unordered pair is sourced once and mirrored, the diagonal is
    /// set to exactly 1, and off-diagonal entries are clamped, so the
    /// matrix invariants hold for any `CorrelationSource`.
    pub fn correlation_matrix(&self, tickers: &[&str]) -> Vec<Vec<CorrelationCell>> {
        let n = tickers.len();
        let mut entries = vec![vec![1.0_f64; n]; n];

        for i in 0..n {
            for j in (i + 1)..n {
                let estimate = self.correlations.pairwise(tickers[i], tickers[j]);
                let bounded = estimate.clamp(-CORRELATION_BOUND, CORRELATION_BOUND);
                entries[i][j] = bounded;
                entries[j][i] = bounded;
            }
        }

        entries
            .into_iter()
            .enumerate()
            .map(|(i, row)| {
                row.into_iter()
                    .enumerate()
                    .map(|(j, correlation)| CorrelationCell {
                        ticker1: tickers[i].to_string(),
                        ticker2: tickers[j].to_string(),
                        correlation,
                    })
                    .collect()
            })
            .collect()
    }

    /// Value-weighted average of per-asset betas. Tickers the source does
    /// not know use the configured default beta.
    pub fn portfolio_beta(&self, positions: &[Position]) -> f64 {
        let mut total_value = 0.0;
        let mut weighted = 0.0;

        for position in positions {
            let value = position.market_value().to_f64().unwrap_or(0.0);
            let beta = self
                .betas
                .beta(&position.ticker)
                .unwrap_or(self.settings.default_beta);

            total_value += value;
            weighted += value * beta;
        }

        safe_divide(weighted, total_value, 0.0)
    }

    /// Parametric VaR under the configured daily volatility and one-sided
    /// normal confidence factor, with square-root-of-time scaling for the
    /// ten-day horizon.
    pub fn value_at_risk(&self, total_value: f64) -> ValueAtRisk {
        let daily = total_value * self.settings.daily_volatility * self.settings.confidence_factor;

        ValueAtRisk {
            daily,
            ten_day: daily * 10.0_f64.sqrt(),
            confidence_level: self.settings.confidence_level,
            portfolio_value: total_value,
            percentage_of_portfolio: safe_divide(daily, total_value, 0.0) * 100.0,
        }
    }
}
