//! # API Request Handlers
//!
//! This module contains the handler functions for each API endpoint.
//! Each handler:
//! 1. Extracts request data
//! 2. Validates input
//! 3. Calls the account store
//! 4. Returns a formatted response
//!
//! ## Error Handling
//!
//! All errors are returned as JSON with a human-readable message:
//!
//! ```json
//! {
//!     "status": 404,
//!     "error": "Not Found",
//!     "message": "Account 42 not found"
//! }
//! ```
//!
//! Request bodies are read as raw bytes and parsed with `serde_json` so the
//! handlers own the 400/415 distinction: create enforces an exact
//! `application/json` content-type match, update does not enforce one at all.

use std::sync::Arc;

use actix_web::http::{header, StatusCode};
use actix_web::{web, HttpRequest, HttpResponse};
use tracing::{error, info};

use crate::models::{AccountPayload, ErrorBody, HealthStatus, ServiceInfo};
use crate::store::AccountStore;
use crate::AppState;

/// Media type required on account creation.
const JSON_MEDIA_TYPE: &str = "application/json";

/// Build a non-2xx response with the standard JSON error body.
fn error_response(status: StatusCode, message: &str) -> HttpResponse {
    HttpResponse::build(status).json(ErrorBody::new(status, message))
}

/// Check that the request carries the expected media type.
///
/// The match is exact; a missing header or a parameterized value such as
/// `application/json; charset=utf-8` does not qualify.
fn has_media_type(req: &HttpRequest, media_type: &str) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value == media_type)
        .unwrap_or(false)
}

/// Service metadata endpoint (root).
///
/// ## Endpoint
///
/// `GET /`
///
/// ## Response
///
/// ```json
/// {
///     "name": "Account REST API Service",
///     "version": "1.0.0"
/// }
/// ```
pub async fn index() -> HttpResponse {
    HttpResponse::Ok().json(ServiceInfo {
        name: "Account REST API Service".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Health check endpoint.
///
/// ## Endpoint
///
/// `GET /health`
///
/// ## Example
///
/// ```bash
/// curl http://127.0.0.1:8080/health
/// ```
///
/// ## Response
///
/// ```json
/// {
///     "status": "OK"
/// }
/// ```
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(HealthStatus {
        status: "OK".to_string(),
    })
}

/// Create a new account.
///
/// The body must be a JSON object with `name`, `email`, `address`, and
/// `phone_number`; `date_joined` is optional and defaults to today. The
/// response carries the serialized record and a `Location` header pointing
/// at the new resource.
///
/// ## Endpoint
///
/// `POST /accounts`
///
/// ## Example
///
/// ```bash
/// curl -X POST http://127.0.0.1:8080/accounts \
///   -H "Content-Type: application/json" \
///   -d '{
///     "name": "John Doe",
///     "email": "john@doe.com",
///     "address": "123 Main St",
///     "phone_number": "555-1212"
///   }'
/// ```
///
/// ## Errors
///
/// - 415 if the content-type is not exactly `application/json`
/// - 400 if the body fails deserialization
pub async fn create_account(
    state: web::Data<Arc<AppState>>,
    req: HttpRequest,
    body: web::Bytes,
) -> HttpResponse {
    info!("Request to create an Account");

    if !has_media_type(&req, JSON_MEDIA_TYPE) {
        return error_response(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            &format!("Content-Type must be {}", JSON_MEDIA_TYPE),
        );
    }

    let payload: AccountPayload = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(e) => {
            return error_response(
                StatusCode::BAD_REQUEST,
                &format!("Invalid account data: {}", e),
            );
        }
    };

    match state.store.create(payload.into_new_account()).await {
        Ok(account) => {
            info!("Account created with id: {}", account.id);
            HttpResponse::Created()
                .insert_header((header::LOCATION, format!("/accounts/{}", account.id)))
                .json(account)
        }
        Err(e) => {
            error!("Create account failed: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string())
        }
    }
}

/// List all accounts.
///
/// ## Endpoint
///
/// `GET /accounts`
///
/// ## Response
///
/// A JSON array of serialized accounts, possibly empty.
pub async fn list_accounts(state: web::Data<Arc<AppState>>) -> HttpResponse {
    info!("Request to list all Accounts");

    match state.store.all().await {
        Ok(accounts) => {
            info!("Returning a list of {} accounts", accounts.len());
            HttpResponse::Ok().json(accounts)
        }
        Err(e) => {
            error!("List accounts failed: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string())
        }
    }
}

/// Read a single account.
///
/// ## Endpoint
///
/// `GET /accounts/{id}`
///
/// ## Errors
///
/// - 404 if the id does not exist
pub async fn read_account(
    state: web::Data<Arc<AppState>>,
    path: web::Path<i32>,
) -> HttpResponse {
    let id = path.into_inner();
    info!("Request to read Account {}", id);

    match state.store.find(id).await {
        Ok(Some(account)) => HttpResponse::Ok().json(account),
        Ok(None) => error_response(
            StatusCode::NOT_FOUND,
            &format!("Account {} not found", id),
        ),
        Err(e) => {
            error!("Read account failed: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string())
        }
    }
}

/// Replace an account's fields.
///
/// The record is fetched first; a missing id yields 404 before the body is
/// even parsed. On success the stored fields are overwritten from the
/// payload with the id preserved.
///
/// ## Endpoint
///
/// `PUT /accounts/{id}`
///
/// ## Errors
///
/// - 404 if the id does not exist
/// - 400 if the body fails deserialization
pub async fn update_account(
    state: web::Data<Arc<AppState>>,
    path: web::Path<i32>,
    body: web::Bytes,
) -> HttpResponse {
    let id = path.into_inner();
    info!("Request to update Account {}", id);

    match state.store.find(id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return error_response(
                StatusCode::NOT_FOUND,
                &format!("Account {} not found", id),
            );
        }
        Err(e) => {
            error!("Update lookup failed: {}", e);
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string());
        }
    }

    let payload: AccountPayload = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(e) => {
            return error_response(
                StatusCode::BAD_REQUEST,
                &format!("Invalid account data: {}", e),
            );
        }
    };

    let account = payload.into_account(id);
    match state.store.update(&account).await {
        Ok(()) => {
            info!("Account {} updated", id);
            HttpResponse::Ok().json(account)
        }
        Err(e) => {
            error!("Update account failed: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string())
        }
    }
}

/// Remove an account.
///
/// Idempotent: deleting an id that does not exist still yields 204.
///
/// ## Endpoint
///
/// `DELETE /accounts/{id}`
pub async fn delete_account(
    state: web::Data<Arc<AppState>>,
    path: web::Path<i32>,
) -> HttpResponse {
    let id = path.into_inner();
    info!("Request to delete Account {}", id);

    match state.store.delete(id).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => {
            error!("Delete account failed: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string())
        }
    }
}

/// Fallback for unsupported methods on a known route.
pub async fn method_not_allowed(req: HttpRequest) -> HttpResponse {
    error_response(
        StatusCode::METHOD_NOT_ALLOWED,
        &format!("Method {} not allowed on {}", req.method(), req.path()),
    )
}

/// Fallback for unmatched paths.
pub async fn not_found(req: HttpRequest) -> HttpResponse {
    error_response(
        StatusCode::NOT_FOUND,
        &format!("Path {} not found", req.path()),
    )
}
