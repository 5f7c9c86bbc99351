//! Error types for the `clausecheck-audit` crate.

use thiserror::Error;

/// Errors that can occur while assembling a contract audit report.
#[derive(Debug, Error)]
pub enum AuditError {
    /// A pipeline configuration problem (missing component, bad rule
    /// pattern).
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The summarization capability failed. Not retried here.
    #[error("Summarizer error: {0}")]
    SummaryError(String),

    /// An error propagated from the clause matcher.
    #[error(transparent)]
    Match(#[from] clausecheck_match::MatchError),
}

/// A convenience result type for audit operations.
pub type Result<T> = std::result::Result<T, AuditError>;
