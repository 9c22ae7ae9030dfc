use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

use super::{Embedder, EmbeddingError};

/// Session-scoped memo of embeddings keyed by raw text.
///
/// Lives exactly as long as one scoring session so nothing leaks across
/// sessions. Two concurrent misses on the same text may both reach the inner
/// embedder; the orchestrator warms the job description before fanning out.
pub struct CachedEmbedder {
    inner: Arc<dyn Embedder>,
    vectors: DashMap<String, Arc<Vec<f32>>>,
}

impl CachedEmbedder {
    pub fn new(inner: Arc<dyn Embedder>) -> Self {
        Self {
            inner,
            vectors: DashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// Returns the cached vector for `text`, embedding it on first use.
    pub async fn vector(&self, text: &str) -> Result<Arc<Vec<f32>>, EmbeddingError> {
        if let Some(hit) = self.vectors.get(text) {
            return Ok(Arc::clone(hit.value()));
        }

        let vector = Arc::new(self.inner.vectorize(text).await?);
        debug!(
            backend = self.inner.name(),
            dimension = vector.len(),
            "embedding cached"
        );
        self.vectors.insert(text.to_string(), Arc::clone(&vector));
        Ok(vector)
    }
}

#[async_trait]
impl Embedder for CachedEmbedder {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    async fn vectorize(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        self.vector(text).await.map(|v| v.as_ref().clone())
    }
}
