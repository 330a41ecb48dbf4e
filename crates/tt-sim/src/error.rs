use thiserror::Error;
use tt_core::TtError;
use tt_stats::StatsError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Params(#[from] TtError),

    #[error("histogram error: {0}")]
    Stats(#[from] StatsError),
}

pub type SimResult<T> = Result<T, SimError>;
