//! Embedding provider boundary.

use async_trait::async_trait;

use crate::error::Result;

/// An external capability that turns text into fixed-dimension dense
/// vectors.
///
/// The matcher treats embeddings as opaque: it only assumes the provider is
/// deterministic (identical input, identical output) and that every vector
/// has [`dimensions`](EmbeddingProvider::dimensions) components. Outputs
/// are plain `Vec<f32>` so no numeric-library tensor type leaks into the
/// matching core.
///
/// The default [`embed_batch`](EmbeddingProvider::embed_batch) calls
/// [`embed`](EmbeddingProvider::embed) once per input; backends with native
/// batching should override it, since the matcher embeds all chunks of a
/// document in a single batch call.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Embed a single text span.
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Embed a batch of text spans, one vector per input, in input order.
    async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        let mut vectors = Vec::with_capacity(texts.len());
        for text in texts {
            vectors.push(self.embed(text).await?);
        }
        Ok(vectors)
    }

    /// The dimensionality of vectors produced by this provider.
    fn dimensions(&self) -> usize;
}
