// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::Destination;
pub use requests::RecommendationRequest;
pub use responses::{DebugInfo, ErrorResponse, HealthResponse, RecommendationResponse};
