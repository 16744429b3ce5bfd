use crate::error::CoreError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single brokerage holding.
///
/// A `Position` can only be obtained through [`Position::new`], which
/// enforces the invariants the analyzers rely on: a strictly positive
/// share count and strictly positive prices. A non-positive price would
/// make percentage returns and VaR undefined, so it is rejected here
/// rather than silently coerced downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawPosition")]
pub struct Position {
    pub ticker: String,
    pub shares: u32,
    pub purchase_price: Decimal,
    pub current_price: Decimal,
    pub purchase_date: NaiveDate,
}

/// The unvalidated wire shape of a position. Deserialization goes through
/// `TryFrom` so a position file with bad records fails up front.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPosition {
    ticker: String,
    shares: u32,
    purchase_price: Decimal,
    current_price: Decimal,
    purchase_date: NaiveDate,
}

impl TryFrom<RawPosition> for Position {
    type Error = CoreError;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        Position::new(
            raw.ticker,
            raw.shares,
            raw.purchase_price,
            raw.current_price,
            raw.purchase_date,
        )
    }
}

impl Position {
    /// Creates a validated `Position`.
    pub fn new(
        ticker: String,
        shares: u32,
        purchase_price: Decimal,
        current_price: Decimal,
        purchase_date: NaiveDate,
    ) -> Result<Self, CoreError> {
        if shares == 0 {
            return Err(CoreError::InvalidInput(
                ticker,
                "shares must be greater than zero".to_string(),
            ));
        }
        if purchase_price <= Decimal::ZERO || current_price <= Decimal::ZERO {
            return Err(CoreError::InvalidInput(
                ticker,
                "prices must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            ticker,
            shares,
            purchase_price,
            current_price,
            purchase_date,
        })
    }

    /// The market value of the holding at the current price.
    pub fn market_value(&self) -> Decimal {
        Decimal::from(self.shares) * self.current_price
    }

    /// The original cost of the holding at the purchase price.
    pub fn cost_basis(&self) -> Decimal {
        Decimal::from(self.shares) * self.purchase_price
    }
}

/// One observation in a dated value series (e.g., a portfolio equity curve).
///
/// A series is an ordered sequence of these points, strictly increasing by
/// date with no duplicates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// A single trading day's OHLCV bar, ordered ascending by date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

/// Output of a sector or asset-class grouping: the total market value held
/// under one label and its share of the portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationBucket {
    pub label: String,
    pub value: Decimal,
    pub percentage: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn position_rejects_zero_shares() {
        let result = Position::new(
            "AAPL".to_string(),
            0,
            dec!(150.25),
            dec!(175.75),
            date("2023-01-15"),
        );
        assert!(matches!(result, Err(CoreError::InvalidInput(_, _))));
    }

    #[test]
    fn position_rejects_non_positive_price() {
        let result = Position::new(
            "AAPL".to_string(),
            10,
            dec!(150.25),
            dec!(0),
            date("2023-01-15"),
        );
        assert!(matches!(result, Err(CoreError::InvalidInput(_, _))));
    }

    #[test]
    fn position_values_are_exact() {
        let position = Position::new(
            "AAPL".to_string(),
            10,
            dec!(150.25),
            dec!(175.75),
            date("2023-01-15"),
        )
        .unwrap();

        assert_eq!(position.cost_basis(), dec!(1502.50));
        assert_eq!(position.market_value(), dec!(1757.50));
    }
}
