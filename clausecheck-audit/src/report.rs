//! The assembled audit report.

use clausecheck_match::{ChunkResult, ClauseMatch};
use serde::{Deserialize, Serialize};

use crate::rules::RuleFlag;

/// Everything one audit run produced for a single document.
///
/// Rendering (PDF, tables, markdown) is a presentation concern left to
/// consumers; this type only carries the data and serializes cleanly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisReport {
    /// Natural-language summary, when a summarizer was configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Chunks with at least one clause match, in document order.
    pub clauses: Vec<ChunkResult>,
    /// One flag per boilerplate rule, in rule order.
    pub flags: Vec<RuleFlag>,
}

impl AnalysisReport {
    /// All clause matches across all chunks, flattened in document order.
    pub fn all_matches(&self) -> impl Iterator<Item = &ClauseMatch> {
        self.clauses.iter().flat_map(|c| c.matches.iter())
    }

    /// IDs of boilerplate rules whose pattern was not found.
    pub fn missing_boilerplate(&self) -> Vec<&str> {
        self.flags.iter().filter(|f| !f.present).map(|f| f.id.as_str()).collect()
    }
}
