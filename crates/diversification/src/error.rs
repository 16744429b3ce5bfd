use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiversificationError {
    #[error("Cannot analyze diversification for an empty portfolio")]
    EmptyPortfolio,
}
