use crate::error::ConfigError;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{AnalysisSettings, Config, IndicatorSettings, RiskSettings};

/// Loads the application configuration from the `config.toml` file.
///
/// The file is optional: every setting has a default, so a missing file
/// simply yields the default configuration. A present but malformed file
/// is still an error.
pub fn load_config() -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        // Tells the builder to look for a file named `config.toml`
        .add_source(config::File::with_name("config.toml").required(false))
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;

    validate(&config)?;

    Ok(config)
}

/// Rejects configurations the analyzers cannot work with.
fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.analysis.trading_days_per_year == 0 {
        return Err(ConfigError::ValidationError(
            "trading_days_per_year must be greater than zero".to_string(),
        ));
    }
    if config.risk.daily_volatility <= 0.0 {
        return Err(ConfigError::ValidationError(
            "daily_volatility must be greater than zero".to_string(),
        ));
    }

    let breakdown_total = config.risk.market_risk_pct
        + config.risk.sector_risk_pct
        + config.risk.specific_risk_pct;
    if (breakdown_total - 100.0).abs() > 1e-9 {
        return Err(ConfigError::ValidationError(format!(
            "risk breakdown weights must sum to 100, got {breakdown_total}"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        assert!(validate(&config).is_ok());
        assert_eq!(config.analysis.trading_days_per_year, 252);
        assert_eq!(config.indicators.rsi_period, 14);
        assert_eq!(config.risk.confidence_level, 95);
    }

    #[test]
    fn skewed_breakdown_weights_are_rejected() {
        let mut config = Config::default();
        config.risk.market_risk_pct = 80.0;
        assert!(matches!(
            validate(&config),
            Err(ConfigError::ValidationError(_))
        ));
    }
}
