//! Stage boundary plumbing shared by the evaluator and the modeler.
//!
//! Raw model text → fence stripping → JSON value → typed struct → placeholder checks.
//! Each step has its own failure kind so callers can tell prose from a wrong shape.

use std::fmt;

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::llm_client::{strip_json_fences, LlmError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Evaluator,
    Modeler,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Evaluator => f.write_str("evaluator"),
            Stage::Modeler => f.write_str("modeler"),
        }
    }
}

#[derive(Debug, Error)]
pub enum StageError {
    #[error("{stage} stage: generation failed: {source}")]
    Generation {
        stage: Stage,
        #[source]
        source: LlmError,
    },

    #[error("{stage} stage returned malformed JSON: {source}")]
    MalformedOutput {
        stage: Stage,
        #[source]
        source: serde_json::Error,
    },

    #[error("{stage} stage output violates schema: {detail}")]
    SchemaViolation { stage: Stage, detail: String },
}

impl StageError {
    pub fn stage(&self) -> Stage {
        match self {
            StageError::Generation { stage, .. }
            | StageError::MalformedOutput { stage, .. }
            | StageError::SchemaViolation { stage, .. } => *stage,
        }
    }
}

/// Structured output of a stage that carries checks serde cannot express.
pub trait StageOutput: DeserializeOwned {
    /// Returns a description of the first violated rule, if any.
    fn check(&self) -> Result<(), String>;
}

/// Cleans and parses a raw model reply into the stage's typed output.
pub fn parse_stage_output<T: StageOutput>(stage: Stage, raw: &str) -> Result<T, StageError> {
    let cleaned = strip_json_fences(raw);

    let value: serde_json::Value = serde_json::from_str(cleaned)
        .map_err(|source| StageError::MalformedOutput { stage, source })?;

    let output: T = serde_json::from_value(value).map_err(|e| StageError::SchemaViolation {
        stage,
        detail: e.to_string(),
    })?;

    output
        .check()
        .map_err(|detail| StageError::SchemaViolation { stage, detail })?;

    Ok(output)
}

const PLACEHOLDERS: &[&str] = &[
    "unavailable",
    "not available",
    "n/a",
    "na",
    "unknown",
    "null",
    "none",
    "tbd",
    "-",
];

/// A currency string is a placeholder when it is blank, a known filler word,
/// or carries no digit at all.
pub fn is_placeholder_amount(amount: &str) -> bool {
    let normalized = amount.trim().to_lowercase();
    normalized.is_empty()
        || PLACEHOLDERS.contains(&normalized.as_str())
        || !normalized.chars().any(|c| c.is_ascii_digit())
}

/// Helper for `StageOutput::check` implementations.
pub fn require_amount(field: &str, amount: &str) -> Result<(), String> {
    if is_placeholder_amount(amount) {
        Err(format!("{field} must be a currency value, got {amount:?}"))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Probe {
        amount: String,
    }

    impl StageOutput for Probe {
        fn check(&self) -> Result<(), String> {
            require_amount("amount", &self.amount)
        }
    }

    #[test]
    fn test_parse_plain_json() {
        let probe: Probe = parse_stage_output(Stage::Evaluator, r#"{"amount": "₹5,00,000"}"#).unwrap();
        assert_eq!(probe.amount, "₹5,00,000");
    }

    #[test]
    fn test_parse_fenced_json() {
        let raw = "```json\n{\"amount\": \"₹0\"}\n```";
        let probe: Probe = parse_stage_output(Stage::Evaluator, raw).unwrap();
        assert_eq!(probe.amount, "₹0");
    }

    #[test]
    fn test_prose_is_malformed_output() {
        let err = parse_stage_output::<Probe>(
            Stage::Evaluator,
            "Based on the profile, life insurance looks insufficient.",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            StageError::MalformedOutput {
                stage: Stage::Evaluator,
                ..
            }
        ));
    }

    #[test]
    fn test_wrong_shape_is_schema_violation() {
        let err = parse_stage_output::<Probe>(Stage::Modeler, r#"{"total": 5}"#).unwrap_err();
        assert!(matches!(err, StageError::SchemaViolation { .. }));
        assert_eq!(err.stage(), Stage::Modeler);
    }

    #[test]
    fn test_placeholder_amount_is_schema_violation() {
        let err =
            parse_stage_output::<Probe>(Stage::Modeler, r#"{"amount": "Unavailable"}"#).unwrap_err();
        match err {
            StageError::SchemaViolation { detail, .. } => assert!(detail.contains("amount")),
            other => panic!("expected SchemaViolation, got {other:?}"),
        }
    }

    #[test]
    fn test_placeholder_detection() {
        assert!(is_placeholder_amount(""));
        assert!(is_placeholder_amount("  N/A "));
        assert!(is_placeholder_amount("unknown"));
        assert!(is_placeholder_amount("Not provided"));
        assert!(!is_placeholder_amount("₹0"));
        assert!(!is_placeholder_amount("₹1,10,00,000.00"));
        assert!(!is_placeholder_amount("approx ₹5 lakh"));
    }
}
