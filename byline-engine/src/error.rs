//! Engine error types

use thiserror::Error;

/// Result type for engine operations
pub type EngineResult<T> = std::result::Result<T, EngineError>;

/// Errors surfaced by the disambiguation engine
#[derive(Error, Debug)]
pub enum EngineError {
    /// Run rejected before clustering (bad identity or parameters)
    #[error("Configuration error: {0}")]
    Config(String),

    /// A selected cluster id does not exist in the Phase 1 partition;
    /// the partition invariant is broken and the run cannot be trusted
    #[error("Cluster {0} is missing from the partition")]
    ClusterNotFound(u64),

    /// An evidence strategy failed internally; callers at the scoring
    /// boundary convert this into a zero contribution
    #[error("Strategy {name} failed: {message}")]
    Strategy {
        name: &'static str,
        message: String,
    },

    /// Error from the shared model layer
    #[error(transparent)]
    Common(#[from] byline_common::Error),
}
