//! # API Models
//!
//! Request and response structures for the REST API. These are separate from
//! the store models to keep API-specific concerns (field defaulting, error
//! body shape) out of the persistence layer.
//!
//! ## Organization
//!
//! - `requests.rs` - Incoming request bodies
//! - `responses.rs` - Outgoing response bodies

pub mod requests;
pub mod responses;

pub use requests::*;
pub use responses::*;
