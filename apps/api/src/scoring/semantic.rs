use crate::embedding::{Embedder, EmbeddingError};

use super::fusion::round2;

/// Cosine similarity in [-1, 1]. Zero when either vector has no magnitude.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f64, EmbeddingError> {
    if a.len() != b.len() {
        return Err(EmbeddingError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let dot: f64 = a.iter().zip(b).map(|(x, y)| *x as f64 * *y as f64).sum();
    let norm_a: f64 = a.iter().map(|x| (*x as f64).powi(2)).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| (*x as f64).powi(2)).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }

    let cos = dot / (norm_a * norm_b);
    if !cos.is_finite() {
        return Err(EmbeddingError::NonFinite);
    }
    Ok(cos)
}

/// Scales a cosine similarity to a percentage, rounds to 2 decimals and clamps
/// into [0, 100]. Negative similarity becomes 0.
pub fn scale_similarity(cos: f64) -> f64 {
    round2(cos * 100.0).clamp(0.0, 100.0)
}

/// Embedding-space similarity of two raw texts as a percentage in [0, 100].
///
/// Embedding failures are returned as-is; there is no fallback score.
pub async fn semantic_score(
    jd_text: &str,
    resume_text: &str,
    embed: &dyn Embedder,
) -> Result<f64, EmbeddingError> {
    let jd_vector = embed.vectorize(jd_text).await?;
    let resume_vector = embed.vectorize(resume_text).await?;
    let cos = cosine_similarity(&jd_vector, &resume_vector)?;
    Ok(scale_similarity(cos))
}
