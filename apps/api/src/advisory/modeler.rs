//! Coverage Modeler — second stage. Turns the evaluation into a formatted report with
//! required amounts, gaps, and recommendations.
//!
//! The required-amount arithmetic is done by the model from the formulas in the prompt.
//! See `formulas` for the local reference values used to audit it.

use serde::{Deserialize, Deserializer, Serialize};

use crate::advisory::evaluator::{CoverageEvaluation, CoverageStatus};
use crate::advisory::prompts::MODELER_PROMPT_TEMPLATE;
use crate::advisory::stage::{parse_stage_output, require_amount, Stage, StageError, StageOutput};
use crate::llm_client::prompts::{fill_template, INDIAN_CURRENCY_INSTRUCTION, JSON_ONLY_SYSTEM};
use crate::llm_client::{ChatMessage, TextGenerator};

/// An amount as the model writes it: figure plus words.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoneyAmount {
    /// e.g. `₹12,34,567.89`
    pub amount: String,
    pub in_words: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryAnalysis {
    pub status: CoverageStatus,
    pub existing: MoneyAmount,
    pub required: MoneyAmount,
    pub gap: MoneyAmount,
    pub explanation: String,
}

impl CategoryAnalysis {
    fn check(&self, category: &str) -> Result<(), String> {
        require_amount(&format!("{category}.existing.amount"), &self.existing.amount)?;
        require_amount(&format!("{category}.required.amount"), &self.required.amount)?;
        require_amount(&format!("{category}.gap.amount"), &self.gap.amount)
    }
}

/// Output of the modeler stage. Terminal artifact, returned to the caller once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageReport {
    pub greeting: String,
    pub coverage_summary: String,
    pub life_insurance: CategoryAnalysis,
    pub health_insurance: CategoryAnalysis,
    pub asset_insurance: CategoryAnalysis,
    #[serde(deserialize_with = "one_or_many")]
    pub gaps_identified: Vec<String>,
    #[serde(deserialize_with = "one_or_many")]
    pub improvement_recommendations: Vec<String>,
}

impl StageOutput for CoverageReport {
    fn check(&self) -> Result<(), String> {
        self.life_insurance.check("life_insurance")?;
        self.health_insurance.check("health_insurance")?;
        self.asset_insurance.check("asset_insurance")
    }
}

/// Accepts either a list of strings or a single string (treated as one item).
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(item) => vec![item],
        OneOrMany::Many(items) => items,
    })
}

/// Builds the modeler prompt. The evaluation is embedded as compact JSON.
pub fn build_modeler_prompt(name: &str, evaluation: &CoverageEvaluation) -> Result<String, serde_json::Error> {
    let evaluation_json = serde_json::to_string(evaluation)?;

    Ok(fill_template(
        MODELER_PROMPT_TEMPLATE,
        &[
            ("name", name),
            ("coverage_evaluation", evaluation_json.as_str()),
            ("currency_instruction", INDIAN_CURRENCY_INSTRUCTION),
        ],
    ))
}

/// Runs the modeler stage: one model call, no retry.
///
/// The model receives the typed evaluation re-serialized, not the evaluator's raw reply.
/// Keys outside the six-field shape are dropped and status spellings are normalized
/// to `Sufficient` / `Insufficient`.
pub async fn model(
    llm: &dyn TextGenerator,
    name: &str,
    evaluation: &CoverageEvaluation,
) -> Result<CoverageReport, StageError> {
    // Plain strings and unit enums; serialization does not fail in practice.
    let prompt = build_modeler_prompt(name, evaluation).map_err(|e| StageError::SchemaViolation {
        stage: Stage::Modeler,
        detail: format!("evaluation could not be serialized: {e}"),
    })?;

    let messages = [ChatMessage::system(JSON_ONLY_SYSTEM), ChatMessage::user(prompt)];

    let raw = llm
        .complete(&messages)
        .await
        .map_err(|source| StageError::Generation {
            stage: Stage::Modeler,
            source,
        })?;

    parse_stage_output(Stage::Modeler, &raw)
}

#[cfg(test)]
pub(crate) const REPORT_FIXTURE: &str = r#"{
    "greeting": "Hello Asha Rao, here is your insurance coverage analysis.",
    "coverage_summary": "Life: Insufficient. Health: Insufficient. Asset: Sufficient.",
    "life_insurance": {
        "status": "Insufficient",
        "existing": {"amount": "₹50,00,000.00", "in_words": "Fifty Lakh Rupees"},
        "required": {"amount": "₹1,10,00,000.00", "in_words": "One Crore Ten Lakh Rupees"},
        "gap": {"amount": "₹60,00,000.00", "in_words": "Sixty Lakh Rupees"},
        "explanation": "10 × ₹10,00,000 × (1 + 0.05 × 2) = ₹1,10,00,000"
    },
    "health_insurance": {
        "status": "Insufficient",
        "existing": {"amount": "₹3,00,000.00", "in_words": "Three Lakh Rupees"},
        "required": {"amount": "₹15,00,000.00", "in_words": "Fifteen Lakh Rupees"},
        "gap": {"amount": "₹12,00,000.00", "in_words": "Twelve Lakh Rupees"},
        "explanation": "50% × ₹10,00,000 × 3 family members = ₹15,00,000"
    },
    "asset_insurance": {
        "status": "Sufficient",
        "existing": {"amount": "₹6,00,000.00", "in_words": "Six Lakh Rupees"},
        "required": {"amount": "₹6,00,000.00", "in_words": "Six Lakh Rupees"},
        "gap": {"amount": "₹0.00", "in_words": "Zero Rupees"},
        "explanation": "Car valued at ₹6,00,000 is fully covered."
    },
    "gaps_identified": [
        "Life cover short by ₹60,00,000.00",
        "Health cover short by ₹12,00,000.00"
    ],
    "improvement_recommendations": [
        "Buy a ₹60,00,000 term plan",
        "Add a ₹10,00,000 super top-up health policy"
    ]
}"#;

#[cfg(test)]
pub(crate) fn sample_report() -> CoverageReport {
    serde_json::from_str(REPORT_FIXTURE).unwrap()
}
