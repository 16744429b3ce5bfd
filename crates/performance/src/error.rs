use thiserror::Error;
use timeseries::TimeSeriesError;

#[derive(Error, Debug)]
pub enum PerformanceError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    InsufficientData(#[from] TimeSeriesError),
}
