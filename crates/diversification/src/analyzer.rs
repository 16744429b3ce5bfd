use crate::classification::{ClassificationSource, StaticClassification};
use crate::error::DiversificationError;
use crate::report::{ConcentrationMetrics, DiversificationReport};
use core_types::{AllocationBucket, Position};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::collections::BTreeMap;
use timeseries::safe_divide;

const UNCLASSIFIED: &str = "Other";

/// A calculator for allocation and concentration metrics over an
/// injectable ticker classification.
pub struct DiversificationAnalyzer {
    classification: Box<dyn ClassificationSource>,
}

impl DiversificationAnalyzer {
    /// Creates an analyzer backed by the bundled static ticker table.
    pub fn new() -> Self {
        Self::with_classification(Box::new(StaticClassification::new()))
    }

    /// Creates an analyzer over a caller-supplied classification source.
    pub fn with_classification(classification: Box<dyn ClassificationSource>) -> Self {
        Self { classification }
    }

    /// The main entry point: computes allocations, concentration, and the
    /// diversification score for a set of positions.
    pub fn analyze(
        &self,
        positions: &[Position],
    ) -> Result<DiversificationReport, DiversificationError> {
        if positions.is_empty() {
            return Err(DiversificationError::EmptyPortfolio);
        }

        let total_value: Decimal = positions.iter().map(Position::market_value).sum();

        let sector_allocation = self.allocation(positions, total_value, |c, ticker| c.sector(ticker));
        let asset_class_allocation =
            self.allocation(positions, total_value, |c, ticker| c.asset_class(ticker));
        let concentration = concentration(positions, total_value);

        let diversification_score = ((1.0 - concentration.hhi / 10_000.0) * 100.0).clamp(0.0, 100.0);

        tracing::debug!(
            positions = positions.len(),
            hhi = concentration.hhi,
            "computed diversification report"
        );

        Ok(DiversificationReport {
            sector_allocation,
            asset_class_allocation,
            concentration,
            diversification_score,
        })
    }

    /// Groups market value by a classification label and converts the
    /// groups into percentage buckets sorted descending by share.
    ///
    /// Grouping stays in `Decimal`, so the bucket values sum to the
    /// portfolio total exactly.
    fn allocation(
        &self,
        positions: &[Position],
        total_value: Decimal,
        label_of: impl for<'a> Fn(&'a dyn ClassificationSource, &str) -> Option<&'a str>,
    ) -> Vec<AllocationBucket> {
        let mut grouped: BTreeMap<String, Decimal> = BTreeMap::new();

        for position in positions {
            let label = label_of(self.classification.as_ref(), &position.ticker)
                .unwrap_or(UNCLASSIFIED)
                .to_string();
            *grouped.entry(label).or_insert(Decimal::ZERO) += position.market_value();
        }

        let total = total_value.to_f64().unwrap_or(0.0);
        let mut buckets: Vec<AllocationBucket> = grouped
            .into_iter()
            .map(|(label, value)| AllocationBucket {
                label,
                percentage: safe_divide(value.to_f64().unwrap_or(0.0), total, 0.0) * 100.0,
                value,
            })
            .collect();

        buckets.sort_by(|a, b| {
            b.percentage
                .partial_cmp(&a.percentage)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        buckets
    }
}

impl Default for DiversificationAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Top-holding shares and the Herfindahl-Hirschman Index.
fn concentration(positions: &[Position], total_value: Decimal) -> ConcentrationMetrics {
    let total = total_value.to_f64().unwrap_or(0.0);

    let mut percentages: Vec<f64> = positions
        .iter()
        .map(|p| safe_divide(p.market_value().to_f64().unwrap_or(0.0), total, 0.0) * 100.0)
        .collect();
    percentages.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));

    let cumulative = |n: usize| percentages.iter().take(n).sum::<f64>();
    let hhi = percentages.iter().map(|p| (p / 100.0).powi(2)).sum::<f64>() * 10_000.0;

    ConcentrationMetrics {
        top_holding: percentages.first().copied().unwrap_or(0.0),
        top3_holdings: cumulative(3),
        top5_holdings: cumulative(5),
        hhi,
        number_of_positions: positions.len(),
    }
}
