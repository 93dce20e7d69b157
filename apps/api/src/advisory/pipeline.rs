//! Advisory Pipeline — orchestrates the two-stage coverage analysis.
//!
//! Flow: evaluate(profile) → CoverageEvaluation → model(name, evaluation) → CoverageReport.
//!
//! Strictly sequential. The modeler never runs unless the evaluator output parsed and
//! validated. No stage is retried.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::advisory::evaluator::{evaluate, CoverageEvaluation};
use crate::advisory::formulas::{audit_report, FormulaBaseline};
use crate::advisory::modeler::{model, CoverageReport};
use crate::advisory::profile::UserProfile;
use crate::advisory::stage::StageError;
use crate::llm_client::TextGenerator;

/// Everything produced by one successful pipeline run.
#[derive(Debug, Clone, Serialize)]
pub struct AdvisoryOutcome {
    pub analysis_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub evaluation: CoverageEvaluation,
    pub report: CoverageReport,
    pub baseline: FormulaBaseline,
    pub formula_warnings: Vec<String>,
}

pub struct AdvisoryPipeline<'a> {
    llm: &'a dyn TextGenerator,
}

impl<'a> AdvisoryPipeline<'a> {
    pub fn new(llm: &'a dyn TextGenerator) -> Self {
        Self { llm }
    }

    /// Stage 1 on its own.
    pub async fn evaluate(&self, profile: &UserProfile) -> Result<CoverageEvaluation, StageError> {
        evaluate(self.llm, profile).await
    }

    /// Stage 2 on its own.
    pub async fn model(
        &self,
        name: &str,
        evaluation: &CoverageEvaluation,
    ) -> Result<CoverageReport, StageError> {
        model(self.llm, name, evaluation).await
    }

    /// Runs both stages for an already validated profile.
    pub async fn run(&self, profile: &UserProfile) -> Result<AdvisoryOutcome, StageError> {
        let analysis_id = Uuid::new_v4();
        info!(
            "Analysis {analysis_id}: evaluating coverage (model: {})",
            self.llm.model()
        );

        let evaluation = self
            .evaluate(profile)
            .await
            .inspect_err(|e| warn!(stage = %e.stage(), "Analysis {analysis_id} failed: {e}"))?;
        info!(
            "Analysis {analysis_id}: evaluation complete, insufficient categories: {:?}",
            evaluation.insufficient_categories()
        );

        let report = self
            .model(&profile.name, &evaluation)
            .await
            .inspect_err(|e| warn!(stage = %e.stage(), "Analysis {analysis_id} failed: {e}"))?;
        info!("Analysis {analysis_id}: coverage report complete");

        let baseline = FormulaBaseline::for_profile(profile);
        let formula_warnings = audit_report(&report, &baseline);

        Ok(AdvisoryOutcome {
            analysis_id,
            generated_at: Utc::now(),
            evaluation,
            report,
            baseline,
            formula_warnings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisory::evaluator::EVALUATION_FIXTURE;
    use crate::advisory::modeler::REPORT_FIXTURE;
    use crate::advisory::profile::sample_profile;
    use crate::advisory::stage::Stage;
    use crate::llm_client::scripted::ScriptedGenerator;
    use crate::llm_client::LlmError;

    #[tokio::test]
    async fn test_run_chains_both_stages() {
        let llm = ScriptedGenerator::new([
            format!("```json\n{EVALUATION_FIXTURE}\n```"),
            REPORT_FIXTURE.to_string(),
        ]);
        let pipeline = AdvisoryPipeline::new(&llm);

        let outcome = pipeline.run(&sample_profile()).await.unwrap();
        assert_eq!(outcome.report.life_insurance.required.amount, "₹1,10,00,000.00");
        assert_eq!(outcome.baseline.life_required.value, 11_000_000.0);
        assert!(outcome.formula_warnings.is_empty());

        let calls = llm.calls();
        assert_eq!(calls.len(), 2);
        // The modeler sees the evaluator's output re-serialized, not the fenced raw text.
        let modeler_prompt = &calls[1][1].content;
        assert!(modeler_prompt.contains(
            &serde_json::to_string(&outcome.evaluation).unwrap()
        ));
        assert!(!modeler_prompt.contains("```"));
    }

    #[tokio::test]
    async fn test_malformed_evaluation_stops_before_modeler() {
        let llm = ScriptedGenerator::new([
            "I think the user should buy more life insurance.",
            REPORT_FIXTURE,
        ]);
        let pipeline = AdvisoryPipeline::new(&llm);

        let err = pipeline.run(&sample_profile()).await.unwrap_err();
        assert!(matches!(err, StageError::MalformedOutput { .. }));
        assert_eq!(err.stage(), Stage::Evaluator);
        assert_eq!(llm.calls().len(), 1, "modeler must not be called");
    }

    #[tokio::test]
    async fn test_modeler_failure_is_tagged_with_stage() {
        let llm = ScriptedGenerator::new([EVALUATION_FIXTURE]).then_fail(LlmError::EmptyContent);
        let pipeline = AdvisoryPipeline::new(&llm);

        let err = pipeline.run(&sample_profile()).await.unwrap_err();
        assert_eq!(err.stage(), Stage::Modeler);
        assert!(matches!(err, StageError::Generation { .. }));
    }

    #[tokio::test]
    async fn test_formula_deviation_is_reported_not_fatal() {
        let skewed = REPORT_FIXTURE.replace("₹1,10,00,000.00", "₹90,00,000.00");
        let llm = ScriptedGenerator::new([EVALUATION_FIXTURE.to_string(), skewed]);
        let pipeline = AdvisoryPipeline::new(&llm);

        let outcome = pipeline.run(&sample_profile()).await.unwrap();
        assert_eq!(outcome.formula_warnings.len(), 1);
        assert!(outcome.formula_warnings[0].contains("₹1,10,00,000.00"));
    }
}
