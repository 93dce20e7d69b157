use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::llm_client::ChatMessage;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateQuery {
    pub prompt: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub response: String,
}

/// POST /generate?prompt=...
/// Relays a single user prompt to the local model.
pub async fn generate_handler(
    State(state): State<AppState>,
    Query(query): Query<GenerateQuery>,
) -> Result<Json<GenerateResponse>, AppError> {
    if query.prompt.trim().is_empty() {
        return Err(AppError::Validation("prompt cannot be empty".to_string()));
    }

    let response = state
        .local_llm
        .complete(&[ChatMessage::user(query.prompt)])
        .await?;

    Ok(Json(GenerateResponse { response }))
}
