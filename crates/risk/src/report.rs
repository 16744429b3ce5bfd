use serde::{Deserialize, Serialize};

/// One entry of the correlation matrix, labeled with both tickers so rows
/// remain self-describing on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrelationCell {
    pub ticker1: String,
    pub ticker2: String,
    pub correlation: f64,
}

/// Parametric Value-at-Risk figures at the configured confidence level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueAtRisk {
    /// One-day VaR in portfolio currency.
    pub daily: f64,
    /// Ten-day VaR: `daily * sqrt(10)` (square-root-of-time scaling).
    pub ten_day: f64,
    pub confidence_level: u8,
    pub portfolio_value: f64,
    /// Daily VaR as a share of portfolio value, in percent.
    pub percentage_of_portfolio: f64,
}

/// Decomposition of total risk into market, sector, and specific shares.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskBreakdown {
    pub market_risk: f64,
    pub sector_risk: f64,
    pub specific_risk: f64,
}

/// The standardized output of a portfolio risk analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskReport {
    pub correlation_matrix: Vec<Vec<CorrelationCell>>,
    pub portfolio_beta: f64,
    pub value_at_risk: ValueAtRisk,
    pub risk_breakdown: RiskBreakdown,
}
