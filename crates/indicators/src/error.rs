use thiserror::Error;

#[derive(Error, Debug)]
pub enum IndicatorError {
    #[error("Invalid period {0}: must be greater than zero")]
    InvalidPeriod(usize),

    #[error("{indicator} requires at least {required} closes, got {actual}")]
    InsufficientData {
        indicator: &'static str,
        required: usize,
        actual: usize,
    },
}
