use crate::models::{Destination, RecommendationResponse};
use serde_json::Value;
use thiserror::Error;

/// Errors from turning raw model text into a recommendation response
///
/// The display strings are part of the API contract: they are the `details`
/// field clients see, so changing them breaks callers that match on them.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The text was JSON but had no `destinations` array
    #[error("Invalid response format from AI")]
    InvalidFormat,

    /// A destination was missing a field or carried an empty value
    #[error("Missing required fields in destination")]
    IncompleteDestination,

    /// No parseable JSON object anywhere in the text
    #[error("Could not parse AI response as JSON")]
    NotJson,
}

/// Parse the raw completion text into a validated response.
///
/// Two-stage parse: first the whole text as JSON, then, if that fails, the
/// span from the first `{` to the last `}` (the model regularly wraps its
/// JSON in prose). Both stages run the same typed validator, so a document
/// recovered by extraction gets no weaker guarantees than a clean one.
pub fn parse_recommendations(raw: &str) -> Result<RecommendationResponse, ParseError> {
    match serde_json::from_str::<Value>(raw) {
        Ok(value) => validate(&value),
        Err(_) => {
            let candidate = extract_json_object(raw).ok_or(ParseError::NotJson)?;
            let value =
                serde_json::from_str::<Value>(candidate).map_err(|_| ParseError::NotJson)?;
            validate(&value)
        }
    }
}

/// Greedy brace span: first `{` through last `}`. Not bracket-matched; good
/// enough for "prose before, prose after" model output.
fn extract_json_object(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    (start <= end).then(|| &raw[start..=end])
}

fn validate(value: &Value) -> Result<RecommendationResponse, ParseError> {
    let items = value
        .get("destinations")
        .and_then(Value::as_array)
        .ok_or(ParseError::InvalidFormat)?;

    let destinations = items
        .iter()
        .map(|item| {
            let dest: Destination = serde_json::from_value(item.clone())
                .map_err(|_| ParseError::IncompleteDestination)?;
            if !dest.is_complete() {
                return Err(ParseError::IncompleteDestination);
            }
            Ok(dest)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(RecommendationResponse { destinations })
}
