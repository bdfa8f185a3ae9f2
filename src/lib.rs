//! Trip Scout - AI-powered holiday destination recommendation service
//!
//! This library exposes the recommendation endpoint logic: prompt
//! construction for the Gemini API and the two-stage parse that turns the
//! model's free-text reply into a validated destination list.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{build_prompt, parse_recommendations, ParseError};
pub use models::{Destination, ErrorResponse, RecommendationRequest, RecommendationResponse};
pub use routes::AppState;
pub use services::{GeminiClient, GeminiError};
