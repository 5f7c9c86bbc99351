//! Semantic clause matching for contract documents.
//!
//! This crate is the core of the clausecheck pipeline. It:
//!
//! - splits raw contract text into paragraph-aligned chunks
//!   ([`ParagraphChunker`]);
//! - embeds a fixed, labeled corpus of clause exemplars once at startup
//!   ([`ClauseCorpus`], [`ExemplarIndex`]);
//! - embeds each document's chunks in one batch and retrieves the top-k
//!   nearest exemplars per chunk by cosine similarity, keeping matches
//!   above a threshold ([`ClauseMatcher::find_clauses`]).
//!
//! The embedding model is an external capability behind the
//! [`EmbeddingProvider`] trait; an OpenAI-backed implementation is
//! available behind the `openai` feature.

pub mod chunking;
pub mod config;
pub mod corpus;
pub mod embedding;
pub mod error;
pub mod index;
pub mod matcher;
#[cfg(feature = "openai")]
pub mod openai;
pub mod result;

pub use chunking::ParagraphChunker;
pub use config::{MatcherConfig, MatcherConfigBuilder};
pub use corpus::ClauseCorpus;
pub use embedding::EmbeddingProvider;
pub use error::{MatchError, Result};
pub use index::{ExemplarIndex, Hit, l2_normalize};
pub use matcher::{ClauseMatcher, ClauseMatcherBuilder};
pub use result::{ChunkResult, ClauseMatch};
