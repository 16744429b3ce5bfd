use thiserror::Error;

#[derive(Error, Debug)]
pub enum TimeSeriesError {
    #[error("Not enough data: needed at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },
}
