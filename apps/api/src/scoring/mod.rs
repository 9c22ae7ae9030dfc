// Relevance scoring pipeline.
// normalize → lexical match → semantic score → fuse → classify, per resume.
// Embedding goes through the `Embedder` capability only; no module here talks to a model directly.

pub mod fusion;
pub mod handlers;
pub mod lexical;
pub mod normalizer;
pub mod orchestrator;
pub mod semantic;
pub mod verdict;

use thiserror::Error;

use crate::embedding::EmbeddingError;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("no job description provided")]
    MissingJobDescription,

    #[error("no resumes provided")]
    NoResumes,

    #[error("invalid fusion weights: lexical={lexical}, semantic={semantic} (each in [0, 1], summing to 1.0)")]
    InvalidWeights { lexical: f64, semantic: f64 },

    #[error("embedding failed: {0}")]
    Embedding(#[from] EmbeddingError),
}
