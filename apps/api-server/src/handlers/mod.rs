//! HTTP handlers and route configuration.

mod auth;
mod blogs;
mod health;
mod profile;

use actix_web::web;

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(
                web::JsonConfig::default()
                    .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
            )
            // Public routes
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/blogs")
                    .route("", web::get().to(blogs::list))
                    .route("", web::post().to(blogs::create))
                    .route("/featured", web::get().to(blogs::featured))
                    .route("/facets", web::get().to(blogs::facets))
                    .route("/{id}", web::get().to(blogs::get))
                    .route("/{id}/like", web::post().to(blogs::like))
                    .route("/{id}/comments", web::post().to(blogs::add_comment)),
            )
            // Sign-in routes
            .service(
                web::scope("/auth")
                    .route("/sign-in", web::post().to(auth::sign_in))
                    .route("/sign-out", web::post().to(auth::sign_out))
                    .route("/me", web::get().to(auth::me)),
            )
            .route("/profile", web::get().to(profile::profile)),
    );
}
