//! # API Request Models
//!
//! Structures for incoming API request bodies. Deserialization doubles as
//! validation: a missing or wrongly-shaped required field fails the parse,
//! which the handlers surface as a 400.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::store::{Account, NewAccount};

/// Inbound account payload, shared by create and update.
///
/// The `id` key is ignored on input (the server assigns it); unknown keys
/// are ignored as well. `date_joined` is optional and defaults to the
/// current date.
///
/// ## Example JSON
///
/// ```json
/// {
///     "name": "John Doe",
///     "email": "john@doe.com",
///     "address": "123 Main St",
///     "phone_number": "555-1212",
///     "date_joined": "2024-01-15"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountPayload {
    /// Customer name.
    pub name: String,

    /// Contact email address.
    pub email: String,

    /// Postal address.
    pub address: String,

    /// Contact phone number.
    pub phone_number: String,

    /// Date the customer joined (ISO-8601). Defaults to today if absent.
    pub date_joined: Option<NaiveDate>,
}

impl AccountPayload {
    /// Convert into an unpersisted record, defaulting the join date.
    pub fn into_new_account(self) -> NewAccount {
        NewAccount {
            name: self.name,
            email: self.email,
            address: self.address,
            phone_number: self.phone_number,
            date_joined: self.date_joined.unwrap_or_else(|| Utc::now().date_naive()),
        }
    }

    /// Convert into a persisted record carrying an existing id.
    ///
    /// Used by update, where the id comes from the URL rather than the body.
    pub fn into_account(self, id: i32) -> Account {
        self.into_new_account().with_id(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_parses_with_all_fields() {
        let payload: AccountPayload = serde_json::from_str(
            r#"{
                "name": "John Doe",
                "email": "john@doe.com",
                "address": "123 Main St",
                "phone_number": "555-1212",
                "date_joined": "2024-01-15"
            }"#,
        )
        .unwrap();
        assert_eq!(
            payload.date_joined,
            Some(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
        );
    }

    #[test]
    fn missing_required_field_fails() {
        let result: Result<AccountPayload, _> =
            serde_json::from_str(r#"{"name": "not enough data"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn null_body_fails() {
        let result: Result<AccountPayload, _> = serde_json::from_str("null");
        assert!(result.is_err());
    }

    #[test]
    fn invalid_date_fails() {
        let result: Result<AccountPayload, _> = serde_json::from_str(
            r#"{
                "name": "John Doe",
                "email": "john@doe.com",
                "address": "123 Main St",
                "phone_number": "555-1212",
                "date_joined": "not-a-date"
            }"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn id_key_is_ignored_on_input() {
        let payload: AccountPayload = serde_json::from_str(
            r#"{
                "id": 42,
                "name": "John Doe",
                "email": "john@doe.com",
                "address": "123 Main St",
                "phone_number": "555-1212"
            }"#,
        )
        .unwrap();
        let account = payload.into_account(7);
        assert_eq!(account.id, 7);
    }

    #[test]
    fn absent_date_defaults_to_today() {
        let payload: AccountPayload = serde_json::from_str(
            r#"{
                "name": "John Doe",
                "email": "john@doe.com",
                "address": "123 Main St",
                "phone_number": "555-1212"
            }"#,
        )
        .unwrap();
        let account = payload.into_new_account();
        assert_eq!(account.date_joined, Utc::now().date_naive());
    }
}
