use async_trait::async_trait;
use xxhash_rust::xxh3::{xxh3_64, xxh3_64_with_seed};

use super::{Embedder, EmbeddingError};

/// Seed for the sign hash. Changing it changes every embedding.
const SIGN_SEED: u64 = 0x5eed_0f_5167;

/// Deterministic feature-hashing embedder.
///
/// - No model download, no training
/// - Each lower-cased whitespace token lands in one signed bucket
/// - Output is L2-normalised; empty text maps to the zero vector
pub struct HashEmbedder {
    dimension: usize,
}

impl HashEmbedder {
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension: dimension.max(1),
        }
    }

    fn embed(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.dimension];

        for token in text.to_lowercase().split_whitespace() {
            let idx = (xxh3_64(token.as_bytes()) % self.dimension as u64) as usize;
            let sign = if xxh3_64_with_seed(token.as_bytes(), SIGN_SEED) % 2 == 0 {
                1.0
            } else {
                -1.0
            };
            vector[idx] += sign;
        }

        let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for v in &mut vector {
                *v /= norm;
            }
        }
        vector
    }
}

#[async_trait]
impl Embedder for HashEmbedder {
    fn name(&self) -> &'static str {
        "hash"
    }

    async fn vectorize(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        Ok(self.embed(text))
    }
}
