use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("runs must be at least 1, got {0}")]
    InvalidRuns(usize),

    #[error("cpu frequency must be a finite positive number of hertz, got {0}")]
    InvalidFrequency(f64),

    #[error("unknown summation strategy: '{0}'")]
    UnknownStrategy(String),

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = core::result::Result<T, BenchError>;
