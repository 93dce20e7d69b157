use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Hosted model used by the analysis, advice and chat endpoints.
    pub llm: Arc<dyn TextGenerator>,
    /// Locally served model behind `POST /generate`.
    pub local_llm: Arc<dyn TextGenerator>,
    pub config: Config,
}
