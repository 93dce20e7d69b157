use serde::{Deserialize, Serialize};

use crate::errors::AppError;

pub const MIN_AGE: u8 = 18;
pub const MAX_AGE: u8 = 65;
pub const MAX_DEPENDENTS: u32 = 20;

/// Financial profile submitted for one analysis request.
///
/// Field aliases accept the camelCase names the web form posts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub age: u8,
    pub location: String,
    pub occupation: String,
    /// Whole rupees per year.
    #[serde(alias = "annualIncome")]
    pub annual_income: u64,
    pub dependents: u32,
    #[serde(alias = "existingLifeInsurance")]
    pub existing_life_insurance: String,
    #[serde(alias = "existingHealthInsurance")]
    pub existing_health_insurance: String,
    #[serde(alias = "existingAssetInsurance")]
    pub existing_asset_insurance: String,
}

impl UserProfile {
    /// Rejects profiles the form would not have submitted: blank text fields, an age
    /// outside the insurable range, or an implausible number of dependents.
    pub fn validate(&self) -> Result<(), AppError> {
        let text_fields = [
            ("name", &self.name),
            ("location", &self.location),
            ("occupation", &self.occupation),
            ("existing_life_insurance", &self.existing_life_insurance),
            ("existing_health_insurance", &self.existing_health_insurance),
            ("existing_asset_insurance", &self.existing_asset_insurance),
        ];

        if let Some((field, _)) = text_fields.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(AppError::Validation(format!("{field} cannot be empty")));
        }

        if !(MIN_AGE..=MAX_AGE).contains(&self.age) {
            return Err(AppError::Validation(format!(
                "age must be between {MIN_AGE} and {MAX_AGE}, got {}",
                self.age
            )));
        }

        if self.dependents > MAX_DEPENDENTS {
            return Err(AppError::Validation(format!(
                "dependents must be at most {MAX_DEPENDENTS}, got {}",
                self.dependents
            )));
        }

        Ok(())
    }

    /// The earner plus every dependent.
    pub fn family_size(&self) -> u32 {
        self.dependents.saturating_add(1)
    }
}

#[cfg(test)]
pub(crate) fn sample_profile() -> UserProfile {
    UserProfile {
        name: "Asha Rao".to_string(),
        age: 34,
        location: "Pune".to_string(),
        occupation: "Software Engineer".to_string(),
        annual_income: 1_000_000,
        dependents: 2,
        existing_life_insurance: "Term plan of ₹50,00,000".to_string(),
        existing_health_insurance: "Employer floater ₹3,00,000".to_string(),
        existing_asset_insurance: "Car insurance ₹6,00,000".to_string(),
    }
}
