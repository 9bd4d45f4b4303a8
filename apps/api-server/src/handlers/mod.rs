//! HTTP handlers and route configuration.

mod health;
mod posts;
mod profile;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/posts")
                    // Literal segments first so they never parse as an id
                    .route("/test", web::get().to(posts::test))
                    .route("", web::get().to(posts::list))
                    .route("", web::post().to(posts::create))
                    .route("/like/{id}", web::post().to(posts::like))
                    .route("/unlike/{id}", web::post().to(posts::unlike))
                    .route("/comment/{id}", web::post().to(posts::add_comment))
                    .route(
                        "/comment/{id}/{comment_id}",
                        web::delete().to(posts::remove_comment),
                    )
                    .route("/{id}", web::get().to(posts::get))
                    .route("/{id}", web::delete().to(posts::delete)),
            )
            .service(
                web::resource("/profile")
                    .route(web::get().to(profile::current))
                    .route(web::post().to(profile::upsert)),
            ),
    );
}
