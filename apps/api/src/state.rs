use std::sync::Arc;

use crate::embedding::Embedder;
use crate::scoring::orchestrator::ScoringOptions;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Embedding backend, loaded once at startup and shared by every session.
    pub embedder: Arc<dyn Embedder>,
    pub scoring: ScoringOptions,
}
