use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The lookback window for a performance or benchmark analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "1w")]
    OneWeek,
    #[serde(rename = "1m")]
    OneMonth,
    #[serde(rename = "3m")]
    ThreeMonths,
    #[serde(rename = "6m")]
    SixMonths,
    #[serde(rename = "1y")]
    OneYear,
    #[serde(rename = "3y")]
    ThreeYears,
    #[serde(rename = "5y")]
    FiveYears,
}

impl Period {
    /// The number of calendar days covered by the period.
    pub fn days(&self) -> usize {
        match self {
            Period::OneWeek => 7,
            Period::OneMonth => 30,
            Period::ThreeMonths => 90,
            Period::SixMonths => 180,
            Period::OneYear => 365,
            Period::ThreeYears => 365 * 3,
            Period::FiveYears => 365 * 5,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Period::OneWeek => "1w",
            Period::OneMonth => "1m",
            Period::ThreeMonths => "3m",
            Period::SixMonths => "6m",
            Period::OneYear => "1y",
            Period::ThreeYears => "3y",
            Period::FiveYears => "5y",
        }
    }
}

impl FromStr for Period {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1w" => Ok(Period::OneWeek),
            "1m" => Ok(Period::OneMonth),
            "3m" => Ok(Period::ThreeMonths),
            "6m" => Ok(Period::SixMonths),
            "1y" => Ok(Period::OneYear),
            "3y" => Ok(Period::ThreeYears),
            "5y" => Ok(Period::FiveYears),
            other => Err(CoreError::InvalidInput(
                "period".to_string(),
                format!("unknown period '{other}'"),
            )),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_round_trips_through_str() {
        for s in ["1w", "1m", "3m", "6m", "1y", "3y", "5y"] {
            let period: Period = s.parse().unwrap();
            assert_eq!(period.as_str(), s);
        }
    }

    #[test]
    fn unknown_period_is_invalid_input() {
        let result = "2q".parse::<Period>();
        assert!(matches!(result, Err(CoreError::InvalidInput(_, _))));
    }
}
