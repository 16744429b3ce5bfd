use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarketDataError {
    #[error("Invalid market data request: {0}")]
    InvalidRequest(String),
}
