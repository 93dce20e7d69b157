//! Coverage formulas, computed locally as a deterministic reference.
//!
//! The modeler prompt asks the model to apply the same formulas; the model's figures are
//! what the user sees. `audit_report` only flags disagreement, it never overrides.
//! Asset cover has no fixed formula and is not computed here.

use serde::Serialize;
use tracing::warn;

use crate::advisory::currency::{amount_in_words, format_inr, parse_inr};
use crate::advisory::modeler::CoverageReport;
use crate::advisory::profile::UserProfile;

/// Relative deviation above which a model figure is reported.
const AUDIT_TOLERANCE: f64 = 0.01;

/// Life cover: 10 × annual income × (1 + 0.05 × dependents).
pub fn required_life_cover(annual_income: u64, dependents: u32) -> f64 {
    // 10 × (1 + 0.05d) == (20 + d) / 2
    (annual_income as f64) * (20.0 + f64::from(dependents)) / 2.0
}

/// Health cover: 50% of annual income per family member.
pub fn required_health_cover(annual_income: u64, family_size: u32) -> f64 {
    (annual_income as f64) * f64::from(family_size) / 2.0
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RupeeAmount {
    pub value: f64,
    pub formatted: String,
    pub in_words: String,
}

impl RupeeAmount {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            formatted: format_inr(value),
            in_words: amount_in_words(value),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FormulaBaseline {
    pub family_size: u32,
    pub life_required: RupeeAmount,
    pub health_required: RupeeAmount,
}

impl FormulaBaseline {
    pub fn for_profile(profile: &UserProfile) -> Self {
        let family_size = profile.family_size();
        Self {
            family_size,
            life_required: RupeeAmount::new(required_life_cover(
                profile.annual_income,
                profile.dependents,
            )),
            health_required: RupeeAmount::new(required_health_cover(
                profile.annual_income,
                family_size,
            )),
        }
    }
}

/// Compares the report's required life and health figures against the baseline.
/// Returns one human-readable warning per disagreement.
pub fn audit_report(report: &CoverageReport, baseline: &FormulaBaseline) -> Vec<String> {
    let checks = [
        (
            "life",
            report.life_insurance.required.amount.as_str(),
            &baseline.life_required,
        ),
        (
            "health",
            report.health_insurance.required.amount.as_str(),
            &baseline.health_required,
        ),
    ];

    let mut warnings = Vec::new();
    for (category, reported, expected) in checks {
        let message = match parse_inr(reported) {
            None => Some(format!(
                "{category} required amount {reported:?} could not be read; formula gives {}",
                expected.formatted
            )),
            Some(value) if deviates(value, expected.value) => Some(format!(
                "{category} required amount {reported} differs from formula value {}",
                expected.formatted
            )),
            Some(_) => None,
        };

        if let Some(message) = message {
            warn!("Formula audit: {message}");
            warnings.push(message);
        }
    }
    warnings
}

fn deviates(actual: f64, expected: f64) -> bool {
    if expected == 0.0 {
        return actual != 0.0;
    }
    ((actual - expected) / expected).abs() > AUDIT_TOLERANCE
}
