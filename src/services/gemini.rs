use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors that can occur when calling the Gemini API
#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error ({status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("Model returned no text content")]
    EmptyResponse,
}

/// Client for the Gemini `generateContent` REST endpoint
///
/// Built explicitly from configuration so tests can point it at a mock
/// server instead of the real API. One call per recommendation request,
/// no retries, transport-default timeout.
pub struct GeminiClient {
    base_url: String,
    api_key: String,
    model: String,
    client: Client,
}

/// Sampling settings used for every recommendation prompt
const SAMPLING_TEMPERATURE: f64 = 0.7;
const MAX_OUTPUT_TOKENS: u32 = 1024;

impl GeminiClient {
    pub fn new(base_url: String, api_key: String, model: String) -> Self {
        Self {
            base_url,
            api_key,
            model,
            client: Client::new(),
        }
    }

    pub fn model_name(&self) -> &str {
        &self.model
    }

    /// Send a single user-role prompt and return the raw text reply.
    pub async fn generate(&self, prompt: &str) -> Result<String, GeminiError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: SAMPLING_TEMPERATURE,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        };

        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url.trim_end_matches('/'),
            self.model,
            urlencoding::encode(&self.api_key)
        );

        tracing::debug!("Calling Gemini model {}", self.model);

        let response = self.client.post(&url).json(&request).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        if status != 200 {
            // Try to surface the structured API error message
            if let Ok(error_response) = serde_json::from_str::<GeminiErrorResponse>(&body) {
                return Err(GeminiError::ApiError {
                    status,
                    message: error_response.error.message,
                });
            }
            return Err(GeminiError::ApiError {
                status,
                message: body,
            });
        }

        let response: GenerateContentResponse = serde_json::from_str(&body)
            .map_err(|e| GeminiError::InvalidResponse(e.to_string()))?;

        response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .filter(|text| !text.is_empty())
            .ok_or(GeminiError::EmptyResponse)
    }
}

impl fmt::Debug for GeminiClient {
    // api_key stays out of debug output
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

/// Gemini API request format
#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f64,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

/// Gemini API response format
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    // absent when the candidate was blocked by safety filters
    #[serde(default)]
    content: CandidateContent,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

/// Error response from the Gemini API
#[derive(Debug, Deserialize)]
struct GeminiErrorResponse {
    error: GeminiApiError,
}

#[derive(Debug, Deserialize)]
struct GeminiApiError {
    message: String,
}
