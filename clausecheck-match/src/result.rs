//! Result types returned by the clause matcher.

use serde::{Deserialize, Serialize};

/// One exemplar's similarity to a chunk of document text.
///
/// Scores are cosine similarities on L2-normalized vectors, so they fall in
/// `[-1, 1]` (realistically `[0, 1]` for natural-language text). A match is
/// only emitted when its score clears the configured threshold.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClauseMatch {
    /// The clause type label of the matched exemplar.
    pub clause_type: String,
    /// The exemplar text that matched.
    pub clause_example: String,
    /// Cosine similarity between the chunk and the exemplar.
    pub score: f32,
}

/// A chunk of the source document together with its surviving matches.
///
/// Chunks with no match above the threshold are omitted from results
/// entirely, so `matches` is always non-empty and sorted highest score
/// first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChunkResult {
    /// The chunk text, trimmed of surrounding whitespace.
    pub chunk: String,
    /// Matches above the similarity threshold, highest score first.
    pub matches: Vec<ClauseMatch>,
}
