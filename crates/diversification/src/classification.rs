use std::collections::HashMap;

/// Maps tickers to their sector and asset class.
///
/// Unknown tickers return `None`; the analyzer groups them under "Other".
/// A production deployment would back this with a reference-data service,
/// the analyzer contract does not change.
pub trait ClassificationSource {
    fn sector(&self, ticker: &str) -> Option<&str>;
    fn asset_class(&self, ticker: &str) -> Option<&str>;
}

/// A fixed classification table for widely held US tickers.
#[derive(Debug, Clone)]
pub struct StaticClassification {
    sectors: HashMap<&'static str, &'static str>,
    asset_classes: HashMap<&'static str, &'static str>,
}

impl Default for StaticClassification {
    fn default() -> Self {
        let sectors = HashMap::from([
            ("AAPL", "Technology"),
            ("MSFT", "Technology"),
            ("GOOGL", "Technology"),
            ("INTC", "Technology"),
            ("CSCO", "Technology"),
            ("FB", "Technology"),
            ("AMZN", "Consumer Cyclical"),
            ("HD", "Consumer Cyclical"),
            ("TSLA", "Automotive"),
            ("JPM", "Financial Services"),
            ("V", "Financial Services"),
            ("BAC", "Financial Services"),
            ("JNJ", "Healthcare"),
            ("PFE", "Healthcare"),
            ("WMT", "Consumer Defensive"),
            ("PG", "Consumer Defensive"),
            ("XOM", "Energy"),
            ("VZ", "Communication Services"),
            ("T", "Communication Services"),
            ("NFLX", "Communication Services"),
        ]);

        let mut asset_classes: HashMap<&'static str, &'static str> =
            sectors.keys().map(|&ticker| (ticker, "Stocks")).collect();
        asset_classes.extend([
            ("AGG", "Bonds"),
            ("BND", "Bonds"),
            ("LQD", "Bonds"),
            ("TLT", "Bonds"),
            ("SHY", "Bonds"),
            ("GLD", "Commodities"),
            ("SLV", "Commodities"),
            ("VNQ", "Real Estate"),
        ]);

        Self {
            sectors,
            asset_classes,
        }
    }
}

impl StaticClassification {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClassificationSource for StaticClassification {
    fn sector(&self, ticker: &str) -> Option<&str> {
        self.sectors.get(ticker).copied()
    }

    fn asset_class(&self, ticker: &str) -> Option<&str> {
        self.asset_classes.get(ticker).copied()
    }
}
