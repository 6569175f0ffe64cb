//! HTTP handlers and route configuration.

mod comments;
mod health;
mod posts;

use actix_web::web;

use crate::middleware::error::{
    json_error_handler, path_error_handler, query_error_handler, route_not_found,
};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .service(
            web::scope("/api")
                // Public routes
                .route("/health", web::get().to(health::health_check))
                .service(
                    web::scope("/posts")
                        .route("", web::post().to(posts::create_post))
                        .route("", web::get().to(posts::list_posts))
                        .route("/{id}", web::get().to(posts::get_post))
                        .route("/{id}", web::put().to(posts::update_post))
                        .route("/{id}", web::delete().to(posts::delete_post))
                        // Comments, scoped to their post
                        .route("/{post_id}/comments", web::post().to(comments::create_comment))
                        .route("/{post_id}/comments", web::get().to(comments::list_comments))
                        .route("/{post_id}/comments/{id}", web::get().to(comments::get_comment))
                        .route(
                            "/{post_id}/comments/{id}",
                            web::put().to(comments::update_comment),
                        )
                        .route(
                            "/{post_id}/comments/{id}",
                            web::delete().to(comments::delete_comment),
                        ),
                ),
        )
        .default_service(web::to(route_not_found));
}
