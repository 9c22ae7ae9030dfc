//! Scoring Orchestrator: scores every resume of a session against one job description.
//!
//! Resumes are independent of each other and are scored concurrently, up to
//! `ScoringOptions::max_concurrency` at a time. Output order always matches input order.

use std::sync::Arc;

use futures::{stream, StreamExt, TryStreamExt};
use tracing::{debug, info};
use uuid::Uuid;

use crate::embedding::{CachedEmbedder, Embedder};
use crate::models::{Document, ScoreResult};
use crate::scoring::fusion::FusionWeights;
use crate::scoring::lexical::{match_keywords, DEFAULT_KEYWORD_LIMIT};
use crate::scoring::normalizer::{normalize, TokenSet};
use crate::scoring::semantic::semantic_score;
use crate::scoring::verdict::classify;
use crate::scoring::ScoringError;

/// Per-session knobs. Defaults reproduce the documented numeric behavior.
#[derive(Debug, Clone)]
pub struct ScoringOptions {
    pub weights: FusionWeights,
    pub keyword_limit: usize,
    pub max_concurrency: usize,
}

impl Default for ScoringOptions {
    fn default() -> Self {
        Self {
            weights: FusionWeights::default(),
            keyword_limit: DEFAULT_KEYWORD_LIMIT,
            max_concurrency: 4,
        }
    }
}

/// Rejects sessions the surrounding application should not start.
///
/// `score_all` itself tolerates both cases; this is the user-facing gate.
pub fn check_preconditions(
    jd: Option<&Document>,
    resumes: &[Document],
) -> Result<(), ScoringError> {
    match jd {
        Some(jd) if !jd.is_blank() => {}
        _ => return Err(ScoringError::MissingJobDescription),
    }
    if resumes.is_empty() {
        return Err(ScoringError::NoResumes);
    }
    Ok(())
}

/// Scores `resumes` against `jd`, one `ScoreResult` per resume in input order.
///
/// - No resumes → empty output, the embedder is never called
/// - Empty JD text → lexical scores of 0, semantic scores from the empty-text embedding
/// - Any embedding failure aborts the whole session
pub async fn score_all(
    jd: &Document,
    resumes: &[Document],
    embedder: Arc<dyn Embedder>,
    options: &ScoringOptions,
) -> Result<Vec<ScoreResult>, ScoringError> {
    if resumes.is_empty() {
        return Ok(Vec::new());
    }

    let session_id = Uuid::new_v4();
    info!(
        %session_id,
        jd = %jd.identifier,
        resumes = resumes.len(),
        backend = embedder.name(),
        "Scoring session started"
    );

    let session = CachedEmbedder::new(embedder);
    let jd_tokens = normalize(&jd.raw_text);

    // Embed the JD once up front so concurrent resumes all hit the cache.
    session.vector(&jd.raw_text).await?;

    // Collected before streaming: a lazy `map` makes the session future non-`Send`.
    let pending: Vec<_> = resumes
        .iter()
        .map(|resume| score_resume(jd, &jd_tokens, resume, &session, options))
        .collect();

    let results: Vec<ScoreResult> = stream::iter(pending)
        .buffered(options.max_concurrency.max(1))
        .try_collect()
        .await?;

    info!(
        %session_id,
        scored = results.len(),
        embeddings = session.len(),
        "Scoring session finished"
    );
    Ok(results)
}

async fn score_resume(
    jd: &Document,
    jd_tokens: &TokenSet,
    resume: &Document,
    session: &CachedEmbedder,
    options: &ScoringOptions,
) -> Result<ScoreResult, ScoringError> {
    let resume_tokens = normalize(&resume.raw_text);
    let lexical = match_keywords(jd_tokens, &resume_tokens);

    let semantic = semantic_score(&jd.raw_text, &resume.raw_text, session).await?;

    let final_score = options.weights.fuse(lexical.score, semantic);
    let verdict = classify(final_score);

    debug!(
        resume = %resume.identifier,
        lexical = lexical.score,
        semantic,
        final_score,
        ?verdict,
        "Resume scored"
    );

    Ok(ScoreResult {
        resume_id: resume.identifier.clone(),
        lexical_score: lexical.score,
        semantic_score: semantic,
        final_score,
        verdict,
        matched_keywords: lexical.matched_keywords(options.keyword_limit),
        missing_keywords: lexical.missing_keywords(options.keyword_limit),
    })
}
