use serde::{Deserialize, Serialize};

/// Request for holiday destination recommendations
///
/// Budget bounds and enum-like fields are deliberately passed through to the
/// model as-is; the form constrains them and the prompt restates them, so the
/// server applies no business-rule validation of its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub temperature: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "budgetMin")]
    pub budget_min: i64,
    #[serde(rename = "budgetMax")]
    pub budget_max: i64,
    #[serde(default = "default_count")]
    pub count: u32,
}

fn default_count() -> u32 {
    5
}
