// Route exports
pub mod pages;
pub mod recommendations;

pub use recommendations::AppState;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(pages::index))
        .service(web::scope("/api").configure(recommendations::configure));
}
