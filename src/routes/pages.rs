use actix_web::{HttpResponse, Responder};

/// The preference form and result renderer, embedded in the binary so the
/// service ships as a single artifact.
const INDEX_HTML: &str = include_str!("../../static/index.html");

/// Serve the single-page client
pub async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(INDEX_HTML)
}
