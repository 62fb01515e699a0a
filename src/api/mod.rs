//! # REST API Module
//!
//! This module defines all HTTP endpoints for the Account API.
//!
//! ## Endpoint Overview
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/` | Service metadata |
//! | GET | `/health` | Health check |
//! | POST | `/accounts` | Create account |
//! | GET | `/accounts` | List accounts |
//! | GET | `/accounts/{id}` | Read one account |
//! | PUT | `/accounts/{id}` | Replace account fields |
//! | DELETE | `/accounts/{id}` | Remove account |
//!
//! ## Request/Response Format
//!
//! Account resources are plain JSON objects:
//!
//! ```json
//! {
//!     "id": 1,
//!     "name": "John Doe",
//!     "email": "john@doe.com",
//!     "address": "123 Main St",
//!     "phone_number": "555-1212",
//!     "date_joined": "2024-01-15"
//! }
//! ```
//!
//! Errors carry a JSON body with `status`, `error`, and `message` keys.

pub mod handlers;
pub mod routes;

pub use routes::configure_routes;
