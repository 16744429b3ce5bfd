use performance::PerformanceError;
use thiserror::Error;
use timeseries::TimeSeriesError;

#[derive(Error, Debug)]
pub enum BenchmarkError {
    #[error(
        "Series are misaligned: portfolio has {portfolio} points, benchmark has {benchmark}"
    )]
    MisalignedSeries { portfolio: usize, benchmark: usize },

    #[error(transparent)]
    Performance(#[from] PerformanceError),

    #[error(transparent)]
    InsufficientData(#[from] TimeSeriesError),
}
