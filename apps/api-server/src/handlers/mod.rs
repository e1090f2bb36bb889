//! HTTP handlers and route configuration.

mod auth;
mod health;
mod posts;
mod uploads;


use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        // Auth routes
        .route("/register", web::post().to(auth::register))
        .route("/login", web::post().to(auth::login))
        // Post routes - reads are public, mutations require authentication
        .service(
            web::scope("/blogs")
                .route("", web::get().to(posts::list))
                .route("", web::post().to(posts::create))
                .route("/{id}", web::put().to(posts::update))
                .route("/{id}", web::delete().to(posts::remove)),
        )
        .route("/uploads", web::post().to(uploads::upload));
}
