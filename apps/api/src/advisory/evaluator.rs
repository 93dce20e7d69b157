//! Coverage Evaluator — first stage. Judges sufficiency per insurance category.

use serde::{Deserialize, Serialize};

use crate::advisory::currency::group_indian;
use crate::advisory::profile::UserProfile;
use crate::advisory::prompts::EVALUATOR_PROMPT_TEMPLATE;
use crate::advisory::stage::{parse_stage_output, require_amount, Stage, StageError, StageOutput};
use crate::llm_client::prompts::{fill_template, JSON_ONLY_SYSTEM};
use crate::llm_client::{ChatMessage, TextGenerator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoverageStatus {
    #[serde(alias = "sufficient", alias = "SUFFICIENT")]
    Sufficient,
    #[serde(alias = "insufficient", alias = "INSUFFICIENT")]
    Insufficient,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Life,
    Health,
    Asset,
}

/// Output of the evaluator stage. Wire form is the flat six-key object the prompt asks for;
/// it is re-serialized unchanged into the modeler prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageEvaluation {
    pub life_status: CoverageStatus,
    pub life_existing_amount: String,
    pub health_status: CoverageStatus,
    pub health_existing_amount: String,
    pub asset_status: CoverageStatus,
    pub asset_existing_amount: String,
}

impl CoverageEvaluation {
    pub fn status(&self, category: Category) -> CoverageStatus {
        match category {
            Category::Life => self.life_status,
            Category::Health => self.health_status,
            Category::Asset => self.asset_status,
        }
    }

    pub fn insufficient_categories(&self) -> Vec<Category> {
        [Category::Life, Category::Health, Category::Asset]
            .into_iter()
            .filter(|c| self.status(*c) == CoverageStatus::Insufficient)
            .collect()
    }
}

impl StageOutput for CoverageEvaluation {
    fn check(&self) -> Result<(), String> {
        require_amount("life_existing_amount", &self.life_existing_amount)?;
        require_amount("health_existing_amount", &self.health_existing_amount)?;
        require_amount("asset_existing_amount", &self.asset_existing_amount)
    }
}

/// Builds the evaluator prompt from a validated profile.
pub fn build_evaluator_prompt(profile: &UserProfile) -> String {
    let age = profile.age.to_string();
    let income = group_indian(profile.annual_income);
    let dependents = profile.dependents.to_string();

    fill_template(
        EVALUATOR_PROMPT_TEMPLATE,
        &[
            ("name", profile.name.as_str()),
            ("age", age.as_str()),
            ("location", profile.location.as_str()),
            ("occupation", profile.occupation.as_str()),
            ("annual_income", income.as_str()),
            ("dependents", dependents.as_str()),
            ("existing_life", profile.existing_life_insurance.as_str()),
            ("existing_health", profile.existing_health_insurance.as_str()),
            ("existing_asset", profile.existing_asset_insurance.as_str()),
        ],
    )
}

/// Runs the evaluator stage: one model call, no retry.
pub async fn evaluate(
    llm: &dyn TextGenerator,
    profile: &UserProfile,
) -> Result<CoverageEvaluation, StageError> {
    let messages = [
        ChatMessage::system(JSON_ONLY_SYSTEM),
        ChatMessage::user(build_evaluator_prompt(profile)),
    ];

    let raw = llm
        .complete(&messages)
        .await
        .map_err(|source| StageError::Generation {
            stage: Stage::Evaluator,
            source,
        })?;

    parse_stage_output(Stage::Evaluator, &raw)
}

#[cfg(test)]
pub(crate) const EVALUATION_FIXTURE: &str = r#"{
    "life_status": "Insufficient",
    "life_existing_amount": "₹50,00,000",
    "health_status": "Insufficient",
    "health_existing_amount": "₹3,00,000",
    "asset_status": "Sufficient",
    "asset_existing_amount": "₹6,00,000"
}"#;
