//! Contract audit pipeline.
//!
//! This crate composes the semantic clause matcher from
//! [`clausecheck-match`](clausecheck_match) with:
//!
//! - a deterministic regex screen for expected boilerplate ([`RuleSet`]);
//! - a black-box summarization boundary ([`Summarizer`]);
//! - a serializable report model ([`AnalysisReport`]).
//!
//! Text extraction from source files and report rendering are consumer
//! concerns; the pipeline takes plain text in and hands a report back.

pub mod error;
pub mod pipeline;
pub mod report;
pub mod rules;
pub mod summarizer;

pub use error::{AuditError, Result};
pub use pipeline::{AuditPipeline, AuditPipelineBuilder};
pub use report::AnalysisReport;
pub use rules::{Rule, RuleFlag, RuleSet};
pub use summarizer::Summarizer;
