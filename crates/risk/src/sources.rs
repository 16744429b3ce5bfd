use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;

/// An estimator of pairwise return correlation between two tickers.
///
/// The analyzer queries each unordered pair exactly once and mirrors the
/// result, so implementations only need to be deterministic per pair;
/// symmetry and clamping are handled by the caller.
pub trait CorrelationSource {
    fn pairwise(&self, a: &str, b: &str) -> f64;
}

/// A provider of per-asset beta coefficients against the market.
pub trait BetaSource {
    /// `None` when no coefficient is known for the ticker; the analyzer
    /// substitutes its configured default.
    fn beta(&self, ticker: &str) -> Option<f64>;
}

/// A deterministic correlation estimate seeded from the ticker pair.
///
/// The pair is ordered lexicographically before seeding, so
/// `pairwise(a, b) == pairwise(b, a)` for any two tickers.
#[derive(Debug, Clone, Default)]
pub struct SeededCorrelationSource {}

impl SeededCorrelationSource {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CorrelationSource for SeededCorrelationSource {
    fn pairwise(&self, a: &str, b: &str) -> f64 {
        let (first, second) = if a <= b { (a, b) } else { (b, a) };
        let seed = first
            .bytes()
            .chain(second.bytes())
            .fold(0u64, |acc, byte| acc.wrapping_mul(31).wrapping_add(u64::from(byte)));

        StdRng::seed_from_u64(seed).gen_range(-1.0..1.0)
    }
}

/// A fixed table of published beta estimates for well-known tickers.
#[derive(Debug, Clone)]
pub struct StaticBetaSource {
    betas: HashMap<String, f64>,
}

impl Default for StaticBetaSource {
    fn default() -> Self {
        let betas = [
            ("AAPL", 1.2),
            ("MSFT", 1.1),
            ("GOOGL", 1.05),
            ("AMZN", 1.3),
        ]
        .into_iter()
        .map(|(ticker, beta)| (ticker.to_string(), beta))
        .collect();

        Self { betas }
    }
}

impl StaticBetaSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a source from an arbitrary ticker/beta table.
    pub fn from_table(betas: HashMap<String, f64>) -> Self {
        Self { betas }
    }
}

impl BetaSource for StaticBetaSource {
    fn beta(&self, ticker: &str) -> Option<f64> {
        self.betas.get(ticker).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_correlations_are_symmetric_and_stable() {
        let source = SeededCorrelationSource::new();

        assert_eq!(source.pairwise("AAPL", "MSFT"), source.pairwise("MSFT", "AAPL"));
        assert_eq!(source.pairwise("AAPL", "MSFT"), source.pairwise("AAPL", "MSFT"));
    }

    #[test]
    fn distinct_pairs_get_distinct_estimates() {
        let source = SeededCorrelationSource::new();

        assert_ne!(
            source.pairwise("AAPL", "MSFT"),
            source.pairwise("AAPL", "GOOGL")
        );
    }

    #[test]
    fn static_source_knows_its_table_only() {
        let source = StaticBetaSource::new();

        assert_eq!(source.beta("AAPL"), Some(1.2));
        assert_eq!(source.beta("ZZZZ"), None);
    }
}
