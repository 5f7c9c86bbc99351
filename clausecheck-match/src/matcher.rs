//! The clause matcher: exemplar index construction and per-document search.
//!
//! A [`ClauseMatcher`] owns the exemplar corpus, its precomputed embedding
//! index, and a handle to the embedding capability. It is built once at
//! process start via [`ClauseMatcher::builder()`] and passed explicitly to
//! request handlers; after the build completes it is read-only and safe to
//! share across concurrent callers.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use clausecheck_match::{ClauseCorpus, ClauseMatcher, MatcherConfig};
//!
//! let matcher = ClauseMatcher::builder()
//!     .config(MatcherConfig::default())
//!     .corpus(corpus)
//!     .embedding_provider(Arc::new(provider))
//!     .build()
//!     .await?;
//!
//! let results = matcher.find_clauses(&contract_text).await?;
//! ```

use std::sync::Arc;

use tracing::{debug, info};

use crate::chunking::ParagraphChunker;
use crate::config::MatcherConfig;
use crate::corpus::ClauseCorpus;
use crate::embedding::EmbeddingProvider;
use crate::error::{MatchError, Result};
use crate::index::{ExemplarIndex, l2_normalize};
use crate::result::{ChunkResult, ClauseMatch};

/// Matches document chunks against a fixed corpus of clause exemplars.
///
/// Construction embeds the whole corpus in one batch (the expensive,
/// once-per-process step); each [`find_clauses`](ClauseMatcher::find_clauses)
/// call then only pays for embedding the document's own chunks.
pub struct ClauseMatcher {
    config: MatcherConfig,
    corpus: ClauseCorpus,
    exemplar_texts: Vec<String>,
    exemplar_types: Vec<String>,
    index: ExemplarIndex,
    embedding_provider: Arc<dyn EmbeddingProvider>,
    chunker: ParagraphChunker,
}

impl std::fmt::Debug for ClauseMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClauseMatcher")
            .field("config", &self.config)
            .field("exemplar_count", &self.exemplar_texts.len())
            .finish_non_exhaustive()
    }
}

impl ClauseMatcher {
    /// Create a new [`ClauseMatcherBuilder`].
    pub fn builder() -> ClauseMatcherBuilder {
        ClauseMatcherBuilder::default()
    }

    /// The matcher's configuration.
    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Read-only view of the exemplar corpus, for inspection and
    /// diagnostics.
    pub fn corpus(&self) -> &ClauseCorpus {
        &self.corpus
    }

    /// Find clause matches for every chunk of `text`.
    ///
    /// Chunks the document, embeds all chunks in one batch, retrieves the
    /// `top_k` nearest exemplars per chunk, and keeps those scoring at or
    /// above the similarity threshold. Chunks with no surviving match are
    /// omitted. Result order follows document order; matches within a
    /// result are sorted highest score first.
    ///
    /// Empty or blank input returns `Ok(vec![])` without any embedding
    /// call.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::EmbeddingError`] if the embedding capability
    /// fails for the chunk batch. The error is propagated unmodified and no
    /// partial results are returned.
    pub async fn find_clauses(&self, text: &str) -> Result<Vec<ChunkResult>> {
        let chunks = self.chunker.chunk(text);
        if chunks.is_empty() {
            debug!("no chunks in input text; skipping embedding");
            return Ok(Vec::new());
        }

        let chunk_refs: Vec<&str> = chunks.iter().map(String::as_str).collect();
        let embeddings = self.embedding_provider.embed_batch(&chunk_refs).await?;

        let threshold = self.config.similarity_threshold;
        let mut results = Vec::new();
        for (chunk, embedding) in chunks.into_iter().zip(embeddings) {
            let query = l2_normalize(embedding);
            let matches: Vec<ClauseMatch> = self
                .index
                .search(&query, self.config.top_k)
                .into_iter()
                .filter(|hit| hit.score >= threshold)
                .map(|hit| ClauseMatch {
                    clause_type: self.exemplar_types[hit.index].clone(),
                    clause_example: self.exemplar_texts[hit.index].clone(),
                    score: hit.score,
                })
                .collect();

            if !matches.is_empty() {
                results.push(ChunkResult { chunk, matches });
            }
        }

        info!(result_count = results.len(), "clause matching completed");
        Ok(results)
    }
}

/// Builder for a [`ClauseMatcher`].
///
/// `corpus` and `embedding_provider` are required; `config` defaults to
/// [`MatcherConfig::default()`]. [`build()`](ClauseMatcherBuilder::build)
/// performs the one-time exemplar embedding and index construction, so no
/// partially-initialized matcher can exist.
#[derive(Default)]
pub struct ClauseMatcherBuilder {
    config: Option<MatcherConfig>,
    corpus: Option<ClauseCorpus>,
    embedding_provider: Option<Arc<dyn EmbeddingProvider>>,
}

impl ClauseMatcherBuilder {
    /// Set the matcher configuration.
    pub fn config(mut self, config: MatcherConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the exemplar corpus.
    pub fn corpus(mut self, corpus: ClauseCorpus) -> Self {
        self.corpus = Some(corpus);
        self
    }

    /// Set the embedding provider.
    pub fn embedding_provider(mut self, provider: Arc<dyn EmbeddingProvider>) -> Self {
        self.embedding_provider = Some(provider);
        self
    }

    /// Embed the exemplar corpus and build the [`ClauseMatcher`].
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::ConfigError`] if a required field is missing
    /// or the corpus is empty, and [`MatchError::EmbeddingError`] if
    /// embedding the exemplar batch fails.
    pub async fn build(self) -> Result<ClauseMatcher> {
        let config = self.config.unwrap_or_default();
        let corpus = self
            .corpus
            .ok_or_else(|| MatchError::ConfigError("corpus is required".to_string()))?;
        let embedding_provider = self.embedding_provider.ok_or_else(|| {
            MatchError::ConfigError("embedding_provider is required".to_string())
        })?;

        let (exemplar_texts, exemplar_types) = corpus.flatten();

        let text_refs: Vec<&str> = exemplar_texts.iter().map(String::as_str).collect();
        let embeddings = embedding_provider.embed_batch(&text_refs).await?;
        let normalized: Vec<Vec<f32>> = embeddings.into_iter().map(l2_normalize).collect();

        let index = ExemplarIndex::build(normalized)?;

        info!(
            exemplar_count = index.len(),
            type_count = corpus.type_count(),
            "built exemplar index"
        );

        Ok(ClauseMatcher {
            chunker: ParagraphChunker::new(config.max_chars),
            config,
            corpus,
            exemplar_texts,
            exemplar_types,
            index,
            embedding_provider,
        })
    }
}
