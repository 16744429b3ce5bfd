use thiserror::Error;

#[derive(Error, Debug)]
pub enum RiskError {
    #[error("Cannot analyze risk for an empty portfolio")]
    EmptyPortfolio,

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
