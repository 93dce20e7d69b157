pub mod generate;
pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::advisory::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Local model relay
        .route("/generate", post(generate::generate_handler))
        // Advisory API
        .route("/api/v1/analysis", post(handlers::handle_analysis))
        .route("/api/v1/advice", post(handlers::handle_advice))
        .route("/api/v1/chat", post(handlers::handle_chat))
        .with_state(state)
}
