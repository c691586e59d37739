use actix_web::web;

pub mod health;
pub mod library;
pub mod tracker;

/// Register every route. `main.rs` and the route tests share this so both
/// see the same paths.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/health").configure(health::configure_routes));
    cfg.service(web::scope("/api/tracker").configure(tracker::configure_routes));
    cfg.service(web::scope("/api/profiles").configure(library::configure_routes));
}
