use crate::models::domain::Destination;
use serde::{Deserialize, Serialize};

/// Successful response for the recommendations endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub destinations: Vec<Destination>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
///
/// All server-side failures collapse to one 500 body; the message strings in
/// `details` are the only way callers can tell the failure classes apart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub details: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<DebugInfo>,
}

/// Extra diagnostics included outside production mode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugInfo {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_omitted_when_none() {
        let body = ErrorResponse {
            error: "Failed to generate recommendations".to_string(),
            details: "Could not parse AI response as JSON".to_string(),
            debug: None,
        };
        let json = serde_json::to_string(&body).unwrap();
        assert!(!json.contains("debug"));
    }

    #[test]
    fn test_debug_included_when_present() {
        let body = ErrorResponse {
            error: "Failed to generate recommendations".to_string(),
            details: "boom".to_string(),
            debug: Some(DebugInfo {
                message: "boom".to_string(),
                stack: None,
            }),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["debug"]["message"], "boom");
        assert!(json["debug"].get("stack").is_none());
    }
}
