//! Flat inner-product index over the exemplar corpus.
//!
//! A brute-force linear scan is exact and entirely sufficient at the
//! expected corpus size (tens to low hundreds of exemplars), and keeps the
//! core free of any vector-index library. All vectors are L2-normalized
//! before insertion, so inner product equals cosine similarity.

use crate::error::{MatchError, Result};

/// L2-normalize a vector in place and return it.
///
/// A zero-magnitude vector is returned unchanged; its inner product with
/// anything is 0.0, which falls below any useful threshold.
pub fn l2_normalize(mut vector: Vec<f32>) -> Vec<f32> {
    let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > 0.0 {
        for x in &mut vector {
            *x /= norm;
        }
    }
    vector
}

/// A scored reference into the exemplar sequences.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Position in the parallel `(texts, types)` exemplar sequences.
    pub index: usize,
    /// Inner product between the query and the exemplar vector.
    pub score: f32,
}

/// Immutable top-k similarity index over normalized exemplar embeddings.
///
/// Built exactly once at matcher startup and never mutated afterwards, so
/// it is safe to share across any number of concurrent readers without
/// locking.
#[derive(Debug)]
pub struct ExemplarIndex {
    embeddings: Vec<Vec<f32>>,
}

impl ExemplarIndex {
    /// Build an index from normalized exemplar embeddings.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::ConfigError`] if `embeddings` is empty or the
    /// vectors do not all share one dimension.
    pub fn build(embeddings: Vec<Vec<f32>>) -> Result<Self> {
        let Some(first) = embeddings.first() else {
            return Err(MatchError::ConfigError(
                "cannot build an index over zero exemplar embeddings".to_string(),
            ));
        };
        let dimensions = first.len();
        if embeddings.iter().any(|e| e.len() != dimensions) {
            return Err(MatchError::ConfigError(format!(
                "exemplar embeddings have mixed dimensions (expected {dimensions})"
            )));
        }
        Ok(Self { embeddings })
    }

    /// Number of indexed exemplars.
    pub fn len(&self) -> usize {
        self.embeddings.len()
    }

    /// Whether the index holds no exemplars. Always `false` for a built
    /// index; present for API completeness.
    pub fn is_empty(&self) -> bool {
        self.embeddings.is_empty()
    }

    /// Return the `top_k` exemplars closest to `query` by inner product,
    /// highest score first.
    ///
    /// The sort is stable, so equal scores keep exemplar order; repeated
    /// queries over the same index return identical rankings.
    pub fn search(&self, query: &[f32], top_k: usize) -> Vec<Hit> {
        let mut hits: Vec<Hit> = self
            .embeddings
            .iter()
            .enumerate()
            .map(|(index, embedding)| {
                let score = embedding.iter().zip(query.iter()).map(|(a, b)| a * b).sum();
                Hit { index, score }
            })
            .collect();

        hits.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        hits.truncate(top_k);
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_produces_unit_length() {
        let v = l2_normalize(vec![3.0, 4.0]);
        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-6);
        assert!((v[0] - 0.6).abs() < 1e-6);
        assert!((v[1] - 0.8).abs() < 1e-6);
    }

    #[test]
    fn normalize_passes_zero_vector_through() {
        assert_eq!(l2_normalize(vec![0.0, 0.0, 0.0]), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn empty_index_is_a_config_error() {
        let err = ExemplarIndex::build(Vec::new()).unwrap_err();
        assert!(matches!(err, MatchError::ConfigError(_)));
    }

    #[test]
    fn mixed_dimensions_are_rejected() {
        let err = ExemplarIndex::build(vec![vec![1.0, 0.0], vec![1.0]]).unwrap_err();
        assert!(matches!(err, MatchError::ConfigError(_)));
    }

    #[test]
    fn search_ranks_by_inner_product_descending() {
        let index = ExemplarIndex::build(vec![
            vec![1.0, 0.0],
            vec![0.0, 1.0],
            l2_normalize(vec![1.0, 1.0]),
        ])
        .unwrap();

        let hits = index.search(&[1.0, 0.0], 3);
        assert_eq!(hits.len(), 3);
        assert_eq!(hits[0].index, 0);
        assert_eq!(hits[1].index, 2);
        assert_eq!(hits[2].index, 1);
        assert!(hits[0].score >= hits[1].score && hits[1].score >= hits[2].score);
    }

    #[test]
    fn search_truncates_to_top_k() {
        let index =
            ExemplarIndex::build(vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap();
        assert_eq!(index.search(&[1.0, 0.0], 2).len(), 2);
        // top_k larger than the corpus returns everything
        assert_eq!(index.search(&[1.0, 0.0], 10).len(), 3);
    }

    #[test]
    fn equal_scores_keep_exemplar_order() {
        let index =
            ExemplarIndex::build(vec![vec![1.0, 0.0], vec![1.0, 0.0], vec![1.0, 0.0]]).unwrap();
        let hits = index.search(&[1.0, 0.0], 3);
        assert_eq!(hits.iter().map(|h| h.index).collect::<Vec<_>>(), vec![0, 1, 2]);
    }
}
