use serde::Deserialize;

/// The root configuration structure for the entire application.
///
/// Every section has sensible defaults, so a missing `config.toml` yields
/// a fully usable configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub analysis: AnalysisSettings,
    #[serde(default)]
    pub indicators: IndicatorSettings,
    #[serde(default)]
    pub risk: RiskSettings,
}

/// Parameters shared by the return-statistics calculations.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// The annual risk-free rate used by the Sharpe ratio (0.02 = 2%).
    pub risk_free_rate: f64,
    /// Trading days per year, used to annualize daily statistics.
    pub trading_days_per_year: u32,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            risk_free_rate: 0.02,
            trading_days_per_year: 252,
        }
    }
}

/// Default lookback periods for the technical indicator engine.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IndicatorSettings {
    pub sma_period: usize,
    pub ema_period: usize,
    pub rsi_period: usize,
    pub bollinger_period: usize,
}

impl Default for IndicatorSettings {
    fn default() -> Self {
        Self {
            sma_period: 20,
            ema_period: 20,
            rsi_period: 14,
            bollinger_period: 20,
        }
    }
}

/// Parameters for the risk analyzer: the VaR model, the fallback beta for
/// tickers without a known coefficient, and the risk decomposition weights.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RiskSettings {
    /// Assumed daily portfolio volatility for the parametric VaR model
    /// (0.015 = 1.5%).
    pub daily_volatility: f64,
    /// One-sided normal quantile for the VaR confidence level
    /// (1.645 for 95%).
    pub confidence_factor: f64,
    /// The confidence level reported alongside the VaR figures.
    pub confidence_level: u8,
    /// Beta assigned to tickers the beta source does not know.
    pub default_beta: f64,
    /// Share of total risk attributed to the market, in percent.
    pub market_risk_pct: f64,
    /// Share of total risk attributed to sector exposure, in percent.
    pub sector_risk_pct: f64,
    /// Share of total risk specific to individual holdings, in percent.
    pub specific_risk_pct: f64,
}

impl Default for RiskSettings {
    fn default() -> Self {
        Self {
            daily_volatility: 0.015,
            confidence_factor: 1.645,
            confidence_level: 95,
            default_beta: 1.0,
            market_risk_pct: 65.0,
            sector_risk_pct: 20.0,
            specific_risk_pct: 15.0,
        }
    }
}
