//! Error types for array generation, sorting runs, and playback
//!
//! This module defines [`SortError`], covering every failure a caller can
//! observe: rejected configuration (bad array size, unknown keys or tags),
//! cooperative cancellation of a paced run, and frame-history limits.
//!
//! Indexing a slot that does not exist is not represented here. That is a
//! programming error and panics inside [`crate::store::ArrayStore::mutate`].

use thiserror::Error;

/// Errors reported synchronously to the caller; core state is left unchanged
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// Requested array size is outside the supported range
    #[error("Array size {size} is out of range ({min}..={max})")]
    InvalidArraySize { size: usize, min: usize, max: usize },

    /// Algorithm key is not one of the eight known keys
    #[error("Unknown algorithm '{0}'")]
    UnknownAlgorithm(String),

    /// Distribution tag is not recognised by the recommender
    #[error("Unknown data distribution '{0}'")]
    UnknownDistribution(String),

    /// Playback speed name is not recognised
    #[error("Unknown speed '{0}'")]
    UnknownSpeed(String),

    /// The run was cancelled at a suspension point
    #[error("Sorting run was cancelled")]
    Cancelled,

    /// Recorded frames exceeded the configured memory budget
    #[error("Frame history memory limit exceeded: {current} > {limit}")]
    FrameLimitExceeded { current: usize, limit: usize },

    /// Stepping past either end of a recorded history
    #[error("{0}")]
    History(String),
}

/// Result type for sorting operations
pub type Result<T> = std::result::Result<T, SortError>;
