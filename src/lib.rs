//! # Account REST API Service
//!
//! A minimal REST microservice exposing CRUD operations over a single
//! Account resource backed by a relational table.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                 ACCOUNT SERVICE                      │
//! │                                                      │
//! │  ┌─────────────┐   ┌─────────────┐   ┌───────────┐  │
//! │  │  REST API   │──▶│  AccountStore│──▶│ PostgreSQL│  │
//! │  │  (Actix)    │   │  (trait)     │   │  / memory │  │
//! │  └─────────────┘   └─────────────┘   └───────────┘  │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! Control flow: HTTP request → handler validates input → store operation →
//! serialized JSON response. Each request is stateless and independent; the
//! store is the only shared resource.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod models;
pub mod store;

use store::AccountStore;

/// Application state shared across all handlers.
///
/// Holds the process-wide store handle, initialized once at startup and
/// dropped (pool closed) at process exit.
pub struct AppState {
    /// The account store backend
    pub store: Arc<dyn AccountStore>,
}
