use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns a simple status object with service version and configured models.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "iaa-api",
        "model": state.llm.model(),
        "local_model": state.local_llm.model(),
        "credential_configured": state.config.openai_api_key.is_some(),
    }))
}
