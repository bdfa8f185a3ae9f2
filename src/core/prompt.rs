use crate::models::RecommendationRequest;

/// Build the instruction sent to the model for a recommendation request.
///
/// The prompt restates the user's preferences, pins the exact output shape,
/// and asks for JSON only. The model still wraps the object in prose often
/// enough that the parser keeps a fallback extraction path.
pub fn build_prompt(req: &RecommendationRequest) -> String {
    format!(
        r#"You are a travel expert. Based on these preferences:
- Temperature preference: {temperature}
- Holiday type: {kind}
- Budget range: ${budget_min} - ${budget_max}

Provide exactly {count} holiday destinations in this JSON format:
{{
  "destinations": [
    {{
      "name": "City/Location Name",
      "country": "Country Name",
      "description": "2-3 sentence description",
      "estimatedCost": numerical_cost_in_USD,
      "bestTimeToVisit": "best season or months",
      "highlights": ["highlight1", "highlight2", "highlight3"]
    }}
  ]
}}

Ensure all costs are within the budget range and the temperature matches the preference.
Response must be valid JSON only, no additional text."#,
        temperature = req.temperature,
        kind = req.kind,
        budget_min = req.budget_min,
        budget_max = req.budget_max,
        count = req.count,
    )
}
