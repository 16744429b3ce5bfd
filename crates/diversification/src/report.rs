use core_types::AllocationBucket;
use serde::{Deserialize, Serialize};

/// How concentrated the portfolio is in its largest holdings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConcentrationMetrics {
    /// The largest single position's share of portfolio value, in percent.
    pub top_holding: f64,
    /// Cumulative share of the three largest positions (all of them when
    /// fewer exist).
    pub top3_holdings: f64,
    /// Cumulative share of the five largest positions.
    pub top5_holdings: f64,
    /// Herfindahl-Hirschman Index in `[0, 10000]`; 10000 means a single
    /// position holds everything.
    pub hhi: f64,
    pub number_of_positions: usize,
}

/// The standardized output of a diversification analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiversificationReport {
    /// Market value grouped by sector, sorted descending by share.
    pub sector_allocation: Vec<AllocationBucket>,
    /// Market value grouped by asset class, sorted descending by share.
    pub asset_class_allocation: Vec<AllocationBucket>,
    pub concentration: ConcentrationMetrics,
    /// `(1 - HHI / 10000) * 100`: 100 for a perfectly even portfolio,
    /// 0 for a single holding.
    pub diversification_score: f64,
}
