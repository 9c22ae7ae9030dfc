pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::scoring::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/relevance/score", post(handlers::handle_score))
        .route("/api/v1/relevance/upload", post(handlers::handle_upload))
        .route("/api/v1/relevance/export", post(handlers::handle_export))
        .with_state(state)
}
