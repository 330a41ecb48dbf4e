//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `TtError` as one variant
//! via `#[from]`.

use thiserror::Error;

/// The top-level error type for `tt-core`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TtError {
    /// Invalid parameter combination, detected before any simulation work.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `tt-core`.
pub type TtResult<T> = Result<T, TtError>;
