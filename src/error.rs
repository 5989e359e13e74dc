//! Error type shared by every stage of the engine.

use thiserror::Error;

/// Failures surfaced by construction, cost lookup and traceback.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlignError {
    /// A predecessor chain does not lead back to the origin through one of
    /// the three legal step shapes.
    #[error("invalid traceback at cell ({row}, {col})")]
    InvalidTraceback { row: usize, col: usize },

    /// A coordinate was read that the fill never produced.
    #[error("cell ({row}, {col}) was never filled")]
    MissingCell { row: usize, col: usize },

    /// The supplied configuration cannot produce a well-defined alignment.
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

pub type Result<T> = std::result::Result<T, AlignError>;
