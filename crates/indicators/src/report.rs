use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One Simple Moving Average observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SmaPoint {
    pub date: NaiveDate,
    pub sma: f64,
}

/// One Exponential Moving Average observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmaPoint {
    pub date: NaiveDate,
    pub ema: f64,
}

/// One Relative Strength Index observation, always in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RsiPoint {
    pub date: NaiveDate,
    pub rsi: f64,
}

/// One aligned MACD triple: `histogram = macd - signal`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacdPoint {
    pub date: NaiveDate,
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
}

/// One Bollinger Bands observation: `upper >= middle >= lower`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollingerPoint {
    pub date: NaiveDate,
    pub middle: f64,
    pub upper: f64,
    pub lower: f64,
}

/// All indicator series for one ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSet {
    pub sma: Vec<SmaPoint>,
    pub ema: Vec<EmaPoint>,
    pub rsi: Vec<RsiPoint>,
    pub macd: Vec<MacdPoint>,
    pub bollinger: Vec<BollingerPoint>,
}

/// The standardized output of a technical indicator analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorReport {
    pub ticker: String,
    pub indicators: IndicatorSet,
}
