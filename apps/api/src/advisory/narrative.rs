//! Narrative advice — one model call producing a markdown adequacy report.

use crate::advisory::currency::group_indian;
use crate::advisory::profile::UserProfile;
use crate::advisory::prompts::NARRATIVE_PROMPT_TEMPLATE;
use crate::llm_client::prompts::fill_template;
use crate::llm_client::{ChatMessage, LlmError, TextGenerator};

pub fn build_narrative_prompt(profile: &UserProfile) -> String {
    let age = profile.age.to_string();
    let income = group_indian(profile.annual_income);
    let dependents = profile.dependents.to_string();
    let existing = format!(
        "Life: {}; Health: {}; Asset: {}",
        profile.existing_life_insurance.trim(),
        profile.existing_health_insurance.trim(),
        profile.existing_asset_insurance.trim()
    );

    fill_template(
        NARRATIVE_PROMPT_TEMPLATE,
        &[
            ("name", profile.name.as_str()),
            ("age", age.as_str()),
            ("location", profile.location.as_str()),
            ("occupation", profile.occupation.as_str()),
            ("annual_income", income.as_str()),
            ("dependents", dependents.as_str()),
            ("existing_insurance", existing.as_str()),
        ],
    )
}

/// Returns the model's report text as-is.
pub async fn advise(llm: &dyn TextGenerator, profile: &UserProfile) -> Result<String, LlmError> {
    llm.complete(&[ChatMessage::user(build_narrative_prompt(profile))])
        .await
}
