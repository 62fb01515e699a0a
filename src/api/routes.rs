//! # API Route Configuration
//!
//! This module sets up all the HTTP routes for the API.

use actix_web::web;

use super::handlers;

/// Configure all API routes.
///
/// This function is called from main.rs to set up
/// all the endpoint routes.
///
/// ## Route Structure
///
/// ```text
/// /
/// ├── /                    GET - Service metadata
/// ├── /health              GET - Health check
/// └── /accounts
///     ├── ""               POST - Create account
///     ├── ""               GET - List accounts
///     └── /{id}            GET - Read one
///                          PUT - Replace fields
///                          DELETE - Remove
/// ```
///
/// Each resource answers unmatched methods with a 405 JSON body.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // Root endpoint - service metadata
        .service(
            web::resource("/")
                .route(web::get().to(handlers::index))
                .default_service(web::route().to(handlers::method_not_allowed)),
        )
        // Health check endpoint
        .service(
            web::resource("/health")
                .route(web::get().to(handlers::health))
                .default_service(web::route().to(handlers::method_not_allowed)),
        )
        // Account collection
        .service(
            web::resource("/accounts")
                .route(web::post().to(handlers::create_account))
                .route(web::get().to(handlers::list_accounts))
                .default_service(web::route().to(handlers::method_not_allowed)),
        )
        // Single account
        .service(
            web::resource("/accounts/{id}")
                .route(web::get().to(handlers::read_account))
                .route(web::put().to(handlers::update_account))
                .route(web::delete().to(handlers::delete_account))
                .default_service(web::route().to(handlers::method_not_allowed)),
        );
}
