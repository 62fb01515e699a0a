//! # API Response Models
//!
//! Structures for outgoing API response bodies. Account resources are
//! returned as their serialized record directly (see `store::models`);
//! the structs here cover the metadata endpoints and error bodies.

use actix_web::http::StatusCode;
use serde::{Deserialize, Serialize};

/// Service metadata, returned by `GET /`.
///
/// ## Example Response
///
/// ```json
/// {
///     "name": "Account REST API Service",
///     "version": "1.0.0"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    /// Service name.
    pub name: String,

    /// Service version.
    pub version: String,
}

/// Liveness probe body, returned by `GET /health`.
///
/// ## Example Response
///
/// ```json
/// {
///     "status": "OK"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Always `"OK"` while the process is serving requests.
    pub status: String,
}

/// Error body attached to every non-2xx response.
///
/// ## Example Response
///
/// ```json
/// {
///     "status": 404,
///     "error": "Not Found",
///     "message": "Account 42 not found"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// HTTP status code, repeated in the body.
    pub status: u16,

    /// Canonical reason phrase (e.g. "Not Found").
    pub error: String,

    /// Human-readable message.
    pub message: String,
}

impl ErrorBody {
    /// Build an error body for a status code and message.
    pub fn new(status: StatusCode, message: &str) -> Self {
        Self {
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or("Unknown").to_string(),
            message: message.to_string(),
        }
    }
}
