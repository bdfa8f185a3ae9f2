// API-level tests for Trip Scout
//
// The Gemini endpoint is stood in for by mockito, so these exercise the full
// handler path (prompt, outbound call, parse, response shaping) without
// network access.

use actix_web::{test, web, App};
use mockito::Matcher;
use serde_json::json;
use std::sync::Arc;
use trip_scout::models::{ErrorResponse, RecommendationResponse};
use trip_scout::routes::{self, AppState};
use trip_scout::services::GeminiClient;

const GEMINI_PATH: &str = "/v1beta/models/gemini-pro:generateContent";

fn gemini_reply(text: &str) -> String {
    json!({
        "candidates": [
            {"content": {"parts": [{"text": text}], "role": "model"}}
        ]
    })
    .to_string()
}

fn destinations_payload(count: usize) -> String {
    let items: Vec<serde_json::Value> = (0..count)
        .map(|i| {
            json!({
                "name": format!("City {i}"),
                "country": "Portugal",
                "description": "A fine place to spend a week.",
                "estimatedCost": 1500,
                "bestTimeToVisit": "May to September",
                "highlights": ["old town", "coastline"],
            })
        })
        .collect();
    json!({ "destinations": items }).to_string()
}

fn app_state(server_url: &str) -> AppState {
    AppState {
        gemini: Arc::new(GeminiClient::new(
            server_url.to_string(),
            "test-key".to_string(),
            "gemini-pro".to_string(),
        )),
        debug_errors: true,
    }
}

macro_rules! init_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .configure(routes::configure_routes),
        )
        .await
    };
}

fn recommendation_request() -> serde_json::Value {
    json!({
        "temperature": "warm",
        "type": "summer",
        "budgetMin": 1000,
        "budgetMax": 5000
    })
}

#[actix_web::test]
async fn test_recommendations_success() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", GEMINI_PATH)
        .match_query(Matcher::UrlEncoded("key".into(), "test-key".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(gemini_reply(&destinations_payload(5)))
        .create_async()
        .await;

    let app = init_app!(app_state(&server.url()));

    let req = test::TestRequest::post()
        .uri("/api/recommendations")
        .set_json(recommendation_request())
        .to_request();
    let body: RecommendationResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body.destinations.len(), 5);
    assert_eq!(body.destinations[0].name, "City 0");
    assert_eq!(body.destinations[0].estimated_cost, 1500.0);
    mock.assert_async().await;
}

#[actix_web::test]
async fn test_recommendations_recovers_prose_wrapped_json() {
    let mut server = mockito::Server::new_async().await;
    let wrapped = format!("Here you go:\n{}\nEnjoy!", destinations_payload(2));
    let _mock = server
        .mock("POST", GEMINI_PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(gemini_reply(&wrapped))
        .create_async()
        .await;

    let app = init_app!(app_state(&server.url()));

    let req = test::TestRequest::post()
        .uri("/api/recommendations")
        .set_json(recommendation_request())
        .to_request();
    let body: RecommendationResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body.destinations.len(), 2);
}

#[actix_web::test]
async fn test_recommendations_refusal_returns_500() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", GEMINI_PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(gemini_reply("Sorry, I can't help with that."))
        .create_async()
        .await;

    let app = init_app!(app_state(&server.url()));

    let req = test::TestRequest::post()
        .uri("/api/recommendations")
        .set_json(recommendation_request())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 500);

    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "Failed to generate recommendations");
    assert_eq!(body.details, "Could not parse AI response as JSON");
    let debug = body.debug.expect("debug payload outside production");
    assert_eq!(debug.message, "Could not parse AI response as JSON");
}

#[actix_web::test]
async fn test_recommendations_api_error_returns_500() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", GEMINI_PATH)
        .match_query(Matcher::Any)
        .with_status(403)
        .with_body(json!({"error": {"code": 403, "message": "API key not valid"}}).to_string())
        .create_async()
        .await;

    let app = init_app!(app_state(&server.url()));

    let req = test::TestRequest::post()
        .uri("/api/recommendations")
        .set_json(recommendation_request())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 500);

    let body: ErrorResponse = test::read_body_json(resp).await;
    assert!(body.details.contains("API key not valid"));
}

#[actix_web::test]
async fn test_production_mode_omits_debug_payload() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", GEMINI_PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(gemini_reply("no json here"))
        .create_async()
        .await;

    let mut state = app_state(&server.url());
    state.debug_errors = false;
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/recommendations")
        .set_json(recommendation_request())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 500);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body.get("debug").is_none());
}

#[actix_web::test]
async fn test_malformed_request_body_returns_400() {
    let server = mockito::Server::new_async().await;
    let app = init_app!(app_state(&server.url()));

    let req = test::TestRequest::post()
        .uri("/api/recommendations")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);
}

#[actix_web::test]
async fn test_health_endpoint() {
    let server = mockito::Server::new_async().await;
    let app = init_app!(app_state(&server.url()));

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "healthy");
}

#[actix_web::test]
async fn test_index_page_served() {
    let server = mockito::Server::new_async().await;
    let app = init_app!(app_state(&server.url()));

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let content_type = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/html"));

    let body = test::read_body(resp).await;
    let html = String::from_utf8_lossy(&body);
    assert!(html.contains("Plan Your Perfect Holiday"));
}
