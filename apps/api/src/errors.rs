use axum::{
    extract::{rejection::JsonRejection, FromRequest},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::advisory::stage::StageError;
use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant is fatal to the current request; nothing is retried.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Malformed model output: {0}")]
    MalformedOutput(String),

    #[error("Schema violation: {0}")]
    SchemaViolation(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// `Json` extractor whose rejections use the `AppError` body instead of axum's plain text.
#[derive(FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<StageError> for AppError {
    fn from(err: StageError) -> Self {
        match err {
            StageError::Generation { source, .. } => AppError::Llm(source),
            e @ StageError::MalformedOutput { .. } => AppError::MalformedOutput(e.to_string()),
            e @ StageError::SchemaViolation { .. } => AppError::SchemaViolation(e.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Llm(e) => {
                tracing::error!("LLM error: {e}");
                let message = match e {
                    LlmError::MissingCredential => {
                        "The language model credential is not configured".to_string()
                    }
                    LlmError::Api { status: 401, .. } | LlmError::Api { status: 403, .. } => {
                        "The language model rejected the configured credential".to_string()
                    }
                    _ => "The language model call failed".to_string(),
                };
                (StatusCode::BAD_GATEWAY, "LLM_ERROR", message)
            }
            AppError::MalformedOutput(msg) => {
                tracing::error!("{msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "MALFORMED_MODEL_OUTPUT",
                    "The language model did not return valid JSON".to_string(),
                )
            }
            AppError::SchemaViolation(msg) => {
                tracing::error!("{msg}");
                (StatusCode::BAD_GATEWAY, "SCHEMA_VIOLATION", msg.clone())
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisory::stage::Stage;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let response = AppError::Validation("name cannot be empty".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_model_failures_map_to_bad_gateway() {
        for err in [
            AppError::Llm(LlmError::MissingCredential),
            AppError::MalformedOutput("bad".to_string()),
            AppError::SchemaViolation("bad".to_string()),
        ] {
            assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
        }
    }

    #[test]
    fn test_stage_error_conversion_keeps_kind() {
        let err: AppError = StageError::SchemaViolation {
            stage: Stage::Modeler,
            detail: "life_insurance.required.amount is a placeholder".to_string(),
        }
        .into();
        match err {
            AppError::SchemaViolation(msg) => {
                assert!(msg.contains("modeler"));
                assert!(msg.contains("placeholder"));
            }
            other => panic!("expected SchemaViolation, got {other:?}"),
        }

        let err: AppError = StageError::Generation {
            stage: Stage::Evaluator,
            source: LlmError::EmptyContent,
        }
        .into();
        assert!(matches!(err, AppError::Llm(LlmError::EmptyContent)));
    }
}
