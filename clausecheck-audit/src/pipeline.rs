//! Audit pipeline orchestration.
//!
//! [`AuditPipeline`] composes the semantic clause matcher, the boilerplate
//! rule set, and an optional summarizer into a single
//! [`analyze`](AuditPipeline::analyze) call that yields an
//! [`AnalysisReport`].
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use clausecheck_audit::AuditPipeline;
//!
//! let pipeline = AuditPipeline::builder()
//!     .matcher(matcher)
//!     .summarizer(Arc::new(my_summarizer))  // optional
//!     .build()?;
//!
//! let report = pipeline.analyze(&contract_text).await?;
//! ```

use std::sync::Arc;

use clausecheck_match::ClauseMatcher;
use tracing::{error, info};

use crate::error::{AuditError, Result};
use crate::report::AnalysisReport;
use crate::rules::RuleSet;
use crate::summarizer::Summarizer;

/// Runs the full audit for one document: clause matching, rule screening,
/// and (when configured) summarization.
///
/// Holds only immutable shared components, so one pipeline can serve any
/// number of concurrent `analyze` calls.
pub struct AuditPipeline {
    matcher: Arc<ClauseMatcher>,
    rules: RuleSet,
    summarizer: Option<Arc<dyn Summarizer>>,
}

impl std::fmt::Debug for AuditPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuditPipeline")
            .field("rules", &self.rules)
            .field("has_summarizer", &self.summarizer.is_some())
            .finish_non_exhaustive()
    }
}

impl AuditPipeline {
    /// Create a new [`AuditPipelineBuilder`].
    pub fn builder() -> AuditPipelineBuilder {
        AuditPipelineBuilder::default()
    }

    /// The configured rule set.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// The underlying clause matcher.
    pub fn matcher(&self) -> &Arc<ClauseMatcher> {
        &self.matcher
    }

    /// Analyze one document's plain text into a report.
    ///
    /// Either the full report is produced or the call fails; no partial
    /// results. Empty text yields a report with no clauses, every rule
    /// flagged absent, and whatever the summarizer makes of empty input.
    ///
    /// # Errors
    ///
    /// Propagates [`AuditError::Match`] from the matcher and
    /// [`AuditError::SummaryError`] from the summarizer unmodified.
    pub async fn analyze(&self, text: &str) -> Result<AnalysisReport> {
        let clauses = self.matcher.find_clauses(text).await.map_err(|e| {
            error!(error = %e, "clause matching failed during audit");
            AuditError::from(e)
        })?;

        let flags = self.rules.run(text);

        let summary = match &self.summarizer {
            Some(summarizer) => Some(summarizer.summarize(text).await.map_err(|e| {
                error!(error = %e, "summarization failed during audit");
                e
            })?),
            None => None,
        };

        info!(
            clause_chunks = clauses.len(),
            missing_rules = flags.iter().filter(|f| !f.present).count(),
            summarized = summary.is_some(),
            "audit completed"
        );

        Ok(AnalysisReport { summary, clauses, flags })
    }
}

/// Builder for an [`AuditPipeline`].
///
/// `matcher` is required; `rules` defaults to [`RuleSet::standard()`];
/// `summarizer` is optional.
#[derive(Default)]
pub struct AuditPipelineBuilder {
    matcher: Option<Arc<ClauseMatcher>>,
    rules: Option<RuleSet>,
    summarizer: Option<Arc<dyn Summarizer>>,
}

impl AuditPipelineBuilder {
    /// Set the clause matcher.
    pub fn matcher(mut self, matcher: Arc<ClauseMatcher>) -> Self {
        self.matcher = Some(matcher);
        self
    }

    /// Replace the default rule set.
    pub fn rules(mut self, rules: RuleSet) -> Self {
        self.rules = Some(rules);
        self
    }

    /// Set an optional summarizer.
    pub fn summarizer(mut self, summarizer: Arc<dyn Summarizer>) -> Self {
        self.summarizer = Some(summarizer);
        self
    }

    /// Build the [`AuditPipeline`].
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::ConfigError`] if no matcher was provided.
    pub fn build(self) -> Result<AuditPipeline> {
        let matcher = self
            .matcher
            .ok_or_else(|| AuditError::ConfigError("matcher is required".to_string()))?;
        let rules = match self.rules {
            Some(rules) => rules,
            None => RuleSet::standard()?,
        };
        Ok(AuditPipeline { matcher, rules, summarizer: self.summarizer })
    }
}
