use crate::core::{build_prompt, parse_recommendations};
use crate::models::{DebugInfo, ErrorResponse, HealthResponse, RecommendationRequest};
use crate::services::GeminiClient;
use actix_web::{web, HttpResponse, Responder};
use std::error::Error;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub gemini: Arc<GeminiClient>,
    pub debug_errors: bool,
}

/// Configure all recommendation-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/recommendations", web::post().to(recommend));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Holiday recommendation endpoint
///
/// POST /api/recommendations
///
/// Request body:
/// ```json
/// {
///   "temperature": "warm",
///   "type": "summer",
///   "budgetMin": 1000,
///   "budgetMax": 5000,
///   "count": 5
/// }
/// ```
///
/// Preferences go to the model as-is; the only validation applied here is on
/// the model's reply. Every failure class collapses to one 500 body whose
/// `details` string names the cause.
async fn recommend(
    state: web::Data<AppState>,
    req: web::Json<RecommendationRequest>,
) -> impl Responder {
    tracing::info!(
        "Received request: temperature={}, type={}, budget={}-{}, count={}",
        req.temperature,
        req.kind,
        req.budget_min,
        req.budget_max,
        req.count
    );

    let prompt = build_prompt(&req);

    let raw = match state.gemini.generate(&prompt).await {
        Ok(text) => text,
        Err(e) => {
            tracing::error!("Gemini call failed: {}", e);
            return failure_response(&e, state.debug_errors);
        }
    };

    tracing::info!("Raw AI response: {}", raw);

    match parse_recommendations(&raw) {
        Ok(response) => {
            tracing::info!("Returning {} destinations", response.destinations.len());
            HttpResponse::Ok().json(response)
        }
        Err(e) => {
            tracing::error!("Error parsing AI response: {}", e);
            failure_response(&e, state.debug_errors)
        }
    }
}

/// Build the single 500 error shape used for every server-side failure.
fn failure_response(err: &dyn Error, debug_errors: bool) -> HttpResponse {
    let debug = debug_errors.then(|| DebugInfo {
        message: err.to_string(),
        stack: source_chain(err),
    });

    HttpResponse::InternalServerError().json(ErrorResponse {
        error: "Failed to generate recommendations".to_string(),
        details: err.to_string(),
        debug,
    })
}

/// Render the error source chain, if any, for the debug payload.
fn source_chain(err: &dyn Error) -> Option<String> {
    let mut chain = Vec::new();
    let mut source = err.source();
    while let Some(cause) = source {
        chain.push(cause.to_string());
        source = cause.source();
    }
    if chain.is_empty() {
        None
    } else {
        Some(chain.join("\ncaused by: "))
    }
}
