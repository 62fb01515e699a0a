//! # Store Models
//!
//! Data structures that map to the `accounts` table. These double as the
//! wire representation: serializing an [`Account`] yields the JSON object
//! the API returns, with `id` as an integer and `date_joined` as an
//! ISO-8601 date string.
//!
//! | Field | Type | Description |
//! |-------|------|-------------|
//! | id | i32 | Server-assigned identifier (SERIAL) |
//! | name | String | Customer name |
//! | email | String | Contact email |
//! | address | String | Postal address |
//! | phone_number | String | Contact phone number |
//! | date_joined | NaiveDate | Enrollment date, defaults to today |

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A persisted account record.
///
/// The id is assigned by the store on creation and immutable thereafter.
///
/// ## Example JSON
///
/// ```json
/// {
///     "id": 1,
///     "name": "John Doe",
///     "email": "john@doe.com",
///     "address": "123 Main St",
///     "phone_number": "555-1212",
///     "date_joined": "2024-01-15"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Server-assigned identifier. Unique and stable once assigned.
    pub id: i32,

    /// Customer name.
    pub name: String,

    /// Contact email address.
    pub email: String,

    /// Postal address.
    pub address: String,

    /// Contact phone number.
    pub phone_number: String,

    /// Date the customer joined.
    pub date_joined: NaiveDate,
}

/// An account that has not been persisted yet.
///
/// Produced by deserializing a creation payload; the store assigns the id
/// when the record is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    /// Customer name.
    pub name: String,

    /// Contact email address.
    pub email: String,

    /// Postal address.
    pub address: String,

    /// Contact phone number.
    pub phone_number: String,

    /// Date the customer joined.
    pub date_joined: NaiveDate,
}

impl NewAccount {
    /// Attach a store-assigned id, producing a persisted record.
    pub fn with_id(self, id: i32) -> Account {
        Account {
            id,
            name: self.name,
            email: self.email,
            address: self.address,
            phone_number: self.phone_number,
            date_joined: self.date_joined,
        }
    }
}
