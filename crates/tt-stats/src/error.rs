use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum StatsError {
    #[error("bin width must be finite and > 0, got {0}")]
    InvalidBinWidth(f64),

    #[error("invalid histogram range [{min}, {max}]")]
    InvalidRange { min: f64, max: f64 },

    #[error("range needs {bins:.0} bins, limit is {max}")]
    TooManyBins { bins: f64, max: usize },

    #[error("cannot merge histograms with different bins: {left} vs {right}")]
    IncompatibleBins { left: String, right: String },

    #[error("quantile must be in (0, 1], got {0}")]
    InvalidQuantile(f64),

    #[error("no samples recorded")]
    NoSamples,
}

impl StatsError {
    /// `true` for the "statistics requested before any data" condition, which
    /// callers typically render as "no data" rather than treat as a bug.
    pub fn is_precondition(&self) -> bool {
        matches!(self, StatsError::NoSamples)
    }
}

pub type StatsResult<T> = Result<T, StatsError>;
