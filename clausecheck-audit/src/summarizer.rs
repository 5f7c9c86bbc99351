//! Summarization boundary.

use async_trait::async_trait;

use crate::error::Result;

/// An external capability that produces a short natural-language summary of
/// a document.
///
/// The pipeline treats summarization as text-in/text-out; model choice,
/// prompting, and chunking for context limits all live behind this trait.
/// Failures surface as [`AuditError::SummaryError`](crate::AuditError) and
/// are not retried by the pipeline.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Summarize `text` into a few lines.
    async fn summarize(&self, text: &str) -> Result<String>;
}
