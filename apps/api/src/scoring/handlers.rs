//! Axum route handlers for the Relevance API.

use axum::{
    extract::{Multipart, State},
    http::header,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::{Document, ScoreResult};
use crate::report::csv::{render_csv, REPORT_FILE_NAME};
use crate::report::{summarize, RelevanceSummary};
use crate::scoring::orchestrator::{check_preconditions, score_all};
use crate::scoring::ScoringError;
use crate::state::AppState;

const JD_FIELD: &str = "job_description";
const RESUME_FIELD: &str = "resumes";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    #[serde(default)]
    pub job_description: Option<Document>,
    #[serde(default)]
    pub resumes: Vec<Document>,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub generated_at: DateTime<Utc>,
    pub scorer_backend: String, // "hash" | "http"
    pub results: Vec<ScoreResult>,
    pub summary: RelevanceSummary,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/relevance/score
///
/// Scores every resume against the job description. Results keep request order.
pub async fn handle_score(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, AppError> {
    let response = run_session(&state, request.job_description, request.resumes).await?;
    Ok(Json(response))
}

/// POST /api/v1/relevance/upload
///
/// Multipart variant of `/score`: one `job_description` part and any number of
/// `resumes` parts, each holding already-extracted UTF-8 text. The part's file
/// name becomes the document identifier; unnamed resume parts are numbered
/// `resume-1`, `resume-2`, ... in upload order.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ScoreResponse>, AppError> {
    let mut jd: Option<Document> = None;
    let mut resumes = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        let identifier = field
            .file_name()
            .filter(|f| !f.trim().is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| fallback_identifier(&name, resumes.len()));
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read '{identifier}': {e}")))?;
        let text = String::from_utf8(bytes.to_vec()).map_err(|_| {
            AppError::UnprocessableEntity(format!(
                "'{identifier}' is not UTF-8 text; upload extracted plain text, not PDF/DOCX"
            ))
        })?;

        match name.as_str() {
            JD_FIELD if jd.is_some() => {
                return Err(AppError::Validation(
                    "Only one job description per session".to_string(),
                ))
            }
            JD_FIELD => jd = Some(Document::new(identifier, text)),
            RESUME_FIELD => resumes.push(Document::new(identifier, text)),
            other => {
                return Err(AppError::Validation(format!(
                    "Unexpected form field '{other}'"
                )))
            }
        }
    }

    let response = run_session(&state, jd, resumes).await?;
    Ok(Json(response))
}

/// POST /api/v1/relevance/export
///
/// Same input as `/score`; returns the scoreboard as a CSV attachment.
pub async fn handle_export(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Result<impl IntoResponse, AppError> {
    let response = run_session(&state, request.job_description, request.resumes).await?;
    let csv = render_csv(&response.results);

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{REPORT_FILE_NAME}\""),
            ),
        ],
        csv,
    ))
}

/// Identifier for a part uploaded without a file name.
fn fallback_identifier(field_name: &str, resumes_so_far: usize) -> String {
    if field_name == RESUME_FIELD {
        format!("resume-{}", resumes_so_far + 1)
    } else {
        field_name.to_string()
    }
}

/// Precondition check → score → summarize.
async fn run_session(
    state: &AppState,
    jd: Option<Document>,
    resumes: Vec<Document>,
) -> Result<ScoreResponse, AppError> {
    check_preconditions(jd.as_ref(), &resumes)?;
    let jd = jd.ok_or(ScoringError::MissingJobDescription)?;

    let results = score_all(&jd, &resumes, state.embedder.clone(), &state.scoring).await?;
    let summary = summarize(&results);

    Ok(ScoreResponse {
        generated_at: Utc::now(),
        scorer_backend: state.embedder.name().to_string(),
        results,
        summary,
    })
}
