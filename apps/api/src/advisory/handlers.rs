//! Axum route handlers for the Advisory API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::advisory::chat::{ask, ChatTurn};
use crate::advisory::narrative::advise;
use crate::advisory::pipeline::{AdvisoryOutcome, AdvisoryPipeline};
use crate::advisory::profile::UserProfile;
use crate::errors::{AppError, AppJson};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct AdviceResponse {
    pub report: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub question: String,
    #[serde(default)]
    pub history: Vec<ChatTurn>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub answer: String,
    pub history: Vec<ChatTurn>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analysis
///
/// Two-stage pipeline: evaluate coverage sufficiency, then model required amounts and gaps.
pub async fn handle_analysis(
    State(state): State<AppState>,
    AppJson(profile): AppJson<UserProfile>,
) -> Result<Json<AdvisoryOutcome>, AppError> {
    profile.validate()?;

    let outcome = AdvisoryPipeline::new(state.llm.as_ref())
        .run(&profile)
        .await?;

    Ok(Json(outcome))
}

/// POST /api/v1/advice
///
/// Single-call narrative report in markdown.
pub async fn handle_advice(
    State(state): State<AppState>,
    AppJson(profile): AppJson<UserProfile>,
) -> Result<Json<AdviceResponse>, AppError> {
    profile.validate()?;

    let report = advise(state.llm.as_ref(), &profile).await?;
    info!("Narrative advice generated ({} chars)", report.len());

    Ok(Json(AdviceResponse { report }))
}

/// POST /api/v1/chat
///
/// Answers a question given the caller-held history; returns the extended history.
pub async fn handle_chat(
    State(state): State<AppState>,
    AppJson(request): AppJson<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if request.question.trim().is_empty() {
        return Err(AppError::Validation("question cannot be empty".to_string()));
    }

    let history = ask(state.llm.as_ref(), &request.history, &request.question).await?;
    let answer = history
        .last()
        .map(|turn| turn.answer.clone())
        .unwrap_or_default();

    Ok(Json(ChatResponse { answer, history }))
}
