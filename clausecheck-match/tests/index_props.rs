//! Property tests for exemplar index search ordering.

use clausecheck_match::index::{ExemplarIndex, l2_normalize};
use proptest::prelude::*;

/// Generate a non-zero L2-normalized embedding of the given dimension.
fn arb_normalized_embedding(dim: usize) -> impl Strategy<Value = Vec<f32>> {
    proptest::collection::vec(-1.0f32..1.0f32, dim).prop_filter_map(
        "non-zero embedding",
        |v| {
            let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
            if norm < 1e-8 {
                return None;
            }
            Some(l2_normalize(v))
        },
    )
}

/// *For any* set of normalized exemplar embeddings, a top-k search returns
/// at most `min(top_k, exemplar_count)` hits, ordered by non-increasing
/// inner product, and repeating the search gives identical hits.
mod prop_index_search_ordering {
    use super::*;

    const DIM: usize = 16;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn hits_ordered_descending_bounded_and_repeatable(
            embeddings in proptest::collection::vec(arb_normalized_embedding(DIM), 1..20),
            query in arb_normalized_embedding(DIM),
            top_k in 1usize..25,
        ) {
            let exemplar_count = embeddings.len();
            let index = ExemplarIndex::build(embeddings).unwrap();

            let hits = index.search(&query, top_k);

            prop_assert!(hits.len() <= top_k);
            prop_assert!(hits.len() <= exemplar_count);
            prop_assert_eq!(hits.len(), top_k.min(exemplar_count));

            for window in hits.windows(2) {
                prop_assert!(
                    window[0].score >= window[1].score,
                    "hits not in descending order: {} < {}",
                    window[0].score,
                    window[1].score,
                );
            }

            // Searching the immutable index again is bit-identical.
            let again = index.search(&query, top_k);
            prop_assert_eq!(hits, again);
        }
    }
}
