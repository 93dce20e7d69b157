// All LLM prompt templates for the advisory module.
// Reuses cross-cutting fragments from llm_client::prompts.

/// Coverage evaluator prompt.
/// Replace: {name}, {age}, {location}, {occupation}, {annual_income}, {dependents},
///          {existing_life}, {existing_health}, {existing_asset}
pub const EVALUATOR_PROMPT_TEMPLATE: &str = r#"You are an expert insurance advisor. Analyze the following user profile and evaluate the adequacy of their insurance coverage in three categories: life, health, and asset.

User Profile:
- Name: {name}
- Age: {age}
- Location: {location}
- Occupation: {occupation}
- Annual Income: ₹{annual_income}
- Dependents: {dependents}
- Existing Life Insurance Amount: {existing_life}
- Existing Health Insurance Amount: {existing_health}
- Existing Asset Insurance Amount: {existing_asset}

Return a JSON object with EXACTLY these keys:
{
  "life_status": "Sufficient",
  "life_existing_amount": "₹50,00,000",
  "health_status": "Insufficient",
  "health_existing_amount": "₹3,00,000",
  "asset_status": "Sufficient",
  "asset_existing_amount": "₹6,00,000"
}

Rules:
- Every *_status value is either "Sufficient" or "Insufficient".
- Every *_existing_amount is the existing cover in ₹ using Indian number formatting.
  If the user has no cover in a category, use "₹0". Never use "unavailable".

Respond ONLY with valid JSON. Do not include any explanation or extra text."#;

/// Coverage modeler prompt.
/// Replace: {name}, {coverage_evaluation}, {currency_instruction}
pub const MODELER_PROMPT_TEMPLATE: &str = r#"You are an advanced insurance corpus modeling expert. Analyze the following coverage evaluation and provide a structured analysis.

Coverage Evaluation: {coverage_evaluation}
Name: {name}

For each category (Life, Health, Asset), do the following:
- Clearly state the existing coverage amount. If not provided, estimate a reasonable amount based on the user's profile and typical industry averages.
- Calculate and recommend the required coverage amount using standard industry formulas:
    - Life Insurance: Required Amount = 10 × Annual Income × (1 + 0.05 × Number of Dependents)
    - Health Insurance: Required Amount = 50% of Annual Income per family member
    - Asset Insurance: Required Amount = Estimated value of major assets (home, car, etc.)
- Show the existing amount, the required amount, and the gap between them.
- List actionable recommendations to address these gaps with detailed reasons and calculations.

IMPORTANT: Never return "unavailable" for any amount. Always provide a best estimate if data is missing.
{currency_instruction}

Return a JSON object with this EXACT schema:
{
  "greeting": "Hello {name}, here is your insurance coverage analysis.",
  "coverage_summary": "Concise summary of life, health and asset adequacy with existing, required and gap amounts and a Sufficient/Insufficient status for each.",
  "life_insurance": {
    "status": "Insufficient",
    "existing": {"amount": "₹50,00,000.00", "in_words": "Fifty Lakh Rupees"},
    "required": {"amount": "₹1,10,00,000.00", "in_words": "One Crore Ten Lakh Rupees"},
    "gap": {"amount": "₹60,00,000.00", "in_words": "Sixty Lakh Rupees"},
    "explanation": "Formula and calculation used to arrive at the required amount."
  },
  "health_insurance": { same shape as life_insurance },
  "asset_insurance": { same shape as life_insurance },
  "gaps_identified": ["Each gap with existing and required amounts and the reason."],
  "improvement_recommendations": ["Each actionable suggestion."]
}

Respond ONLY with valid JSON. Do not include any explanation or extra text."#;

/// Narrative advisory report prompt (single call, markdown output).
/// Replace: {name}, {age}, {location}, {occupation}, {annual_income}, {dependents},
///          {existing_insurance}
pub const NARRATIVE_PROMPT_TEMPLATE: &str = r#"You are a financial insurance advisor helping individuals assess the adequacy of their current insurance coverage.

User Profile:
- Name: {name}
- Age: {age}
- Location: {location}
- Occupation: {occupation}
- Annual Income: ₹{annual_income}
- Number of Dependents: {dependents}
- Existing Insurance Details: {existing_insurance}

Your task:
1. Evaluate whether the user's current insurance coverage is sufficient across life, health, and asset categories.
2. Highlight any gaps or risks based on their income, dependents, and occupation.
3. Recommend ideal coverage amounts and types of insurance they should consider.
4. Provide actionable next steps in simple, jargon-free language.

Format your response EXACTLY as follows:

---
## Insurance Adequacy Report

### Coverage Evaluation
- Life Insurance: [Adequate/Inadequate]
- Health Insurance: [Adequate/Inadequate]
- Asset Insurance: [Adequate/Inadequate]

### Identified Gaps
- [List of gaps]

### Recommended Coverage
| Type           | Recommended Amount | Rationale / Formula |
|----------------|--------------------|----------------------|
| Life Insurance | ₹X                 | [Formula]            |
| Health         | ₹Y                 | [Formula]            |
| Asset          | ₹Z                 | [Formula]            |

### Next Steps ✅
1. [Step 1]
2. [Step 2]
3. [Step 3]

Use ✅ for good coverage and ❌ for gaps.
---"#;
