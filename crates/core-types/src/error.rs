use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid input for {0}: {1}")]
    InvalidInput(String, String),

    #[error("Insufficient data: {0} requires at least {1} points, got {2}")]
    InsufficientData(String, usize, usize),
}
