//! Error types for the `clausecheck-match` crate.

use thiserror::Error;

/// Errors that can occur while building or querying a clause matcher.
#[derive(Debug, Error)]
pub enum MatchError {
    /// The exemplar corpus or matcher configuration is invalid.
    ///
    /// Raised at startup, before any embedding work happens. A matcher is
    /// never constructed in a degraded state.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The embedding capability failed for a batch.
    ///
    /// Never retried here; the caller owns retry and fallback policy.
    #[error("Embedding error ({provider}): {message}")]
    EmbeddingError {
        /// The embedding provider that produced the error.
        provider: String,
        /// A description of the failure.
        message: String,
    },
}

/// A convenience result type for clause matching operations.
pub type Result<T> = std::result::Result<T, MatchError>;
