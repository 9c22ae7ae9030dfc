//! Embedding capability: the only ML-facing seam of the scoring pipeline.
//!
//! Backends implement `Embedder`. `AppState` holds one `Arc<dyn Embedder>` loaded
//! at startup; each scoring session wraps it in a `CachedEmbedder`.

pub mod cache;
pub mod hash;
pub mod http;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use thiserror::Error;

use crate::config::Config;

pub use cache::CachedEmbedder;
pub use hash::HashEmbedder;
pub use http::HttpEmbedder;

#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Embedding service returned no vectors")]
    EmptyResponse,

    #[error("Embedding dimension mismatch: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },

    #[error("Embedding produced a non-finite similarity")]
    NonFinite,
}

/// Turns raw text into a fixed-size numeric vector.
///
/// Implementations must be deterministic for identical input and safe to call
/// concurrently.
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Backend name surfaced in responses ("hash", "http").
    fn name(&self) -> &'static str;

    async fn vectorize(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;
}

/// Builds the configured backend. Unknown backend names fail startup.
pub fn create_embedder(config: &Config) -> Result<Arc<dyn Embedder>> {
    match config.embedding_backend.as_str() {
        "hash" => Ok(Arc::new(HashEmbedder::new(config.embedding_dimension))),
        "http" => {
            let url = config
                .embedding_api_url
                .clone()
                .context("EMBEDDING_API_URL is required when EMBEDDING_BACKEND=http")?;
            let embedder = HttpEmbedder::new(
                url,
                config.embedding_api_key.clone(),
                config.embedding_model.clone(),
                Duration::from_secs(config.embedding_timeout_secs),
            )?;
            Ok(Arc::new(embedder))
        }
        other => bail!("Unknown EMBEDDING_BACKEND '{other}' (expected 'hash' or 'http')"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_embedder_hash_backend() {
        let config = Config::for_tests();
        let embedder = create_embedder(&config).unwrap();
        assert_eq!(embedder.name(), "hash");
    }

    #[test]
    fn test_create_embedder_http_requires_url() {
        let mut config = Config::for_tests();
        config.embedding_backend = "http".to_string();
        config.embedding_api_url = None;
        let err = create_embedder(&config).err().unwrap();
        assert!(err.to_string().contains("EMBEDDING_API_URL"));
    }

    #[test]
    fn test_create_embedder_http_backend() {
        let mut config = Config::for_tests();
        config.embedding_backend = "http".to_string();
        config.embedding_api_url = Some("http://localhost:9999/v1/embeddings".to_string());
        let embedder = create_embedder(&config).unwrap();
        assert_eq!(embedder.name(), "http");
    }

    #[test]
    fn test_create_embedder_rejects_malformed_url() {
        let mut config = Config::for_tests();
        config.embedding_backend = "http".to_string();
        config.embedding_api_url = Some("not a url".to_string());
        let err = create_embedder(&config).err().unwrap();
        assert!(err.to_string().contains("not a valid absolute URL"));
    }

    #[test]
    fn test_create_embedder_rejects_unknown_backend() {
        let mut config = Config::for_tests();
        config.embedding_backend = "onnx".to_string();
        let err = create_embedder(&config).err().unwrap();
        assert!(err.to_string().contains("onnx"));
    }
}
