//! Client record model
//!
//! A [`Client`] is only ever built through [`Client::new`], which trims text
//! fields and runs every validation rule, so any `Client` handed to storage
//! is a complete, valid record.

use crate::domain::errors::ClientbookError;
use crate::domain::ids::CustomerId;
use crate::domain::validation::validate_fields;
use crate::domain::Result;
use serde::{Deserialize, Serialize};

/// Column names of the client schema, in canonical order
pub const CLIENT_COLUMNS: [&str; 5] = ["customer_id", "name", "email", "country", "age"];

/// A stored client record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    /// Unique, immutable identifier
    pub customer_id: CustomerId,

    /// Display name (trimmed, non-empty)
    pub name: String,

    /// Contact email
    pub email: String,

    /// Country of residence
    pub country: String,

    /// Age in years, if known
    #[serde(default)]
    pub age: Option<i32>,
}

impl Client {
    /// Builds a validated client record
    ///
    /// # Errors
    ///
    /// Returns [`ClientbookError::Validation`] listing every failed rule.
    pub fn new(customer_id: CustomerId, fields: ClientFields) -> Result<Self> {
        let fields = fields.validated()?;
        Ok(Self {
            customer_id,
            name: fields.name,
            email: fields.email,
            country: fields.country,
            age: fields.age,
        })
    }

    /// Mutable fields of this record
    pub fn fields(&self) -> ClientFields {
        ClientFields {
            name: self.name.clone(),
            email: self.email.clone(),
            country: self.country.clone(),
            age: self.age,
        }
    }
}

/// The mutable part of a client record (everything but the identifier)
///
/// Used as the update payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientFields {
    /// Display name
    pub name: String,

    /// Contact email
    pub email: String,

    /// Country of residence
    pub country: String,

    /// Age in years, if known
    #[serde(default)]
    pub age: Option<i32>,
}

impl ClientFields {
    /// Trims text fields and applies every validation rule
    ///
    /// # Errors
    ///
    /// Returns [`ClientbookError::Validation`] listing every failed rule.
    pub fn validated(self) -> Result<Self> {
        let fields = Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            country: self.country.trim().to_string(),
            age: self.age,
        };

        let violations = validate_fields(&fields.name, &fields.email, &fields.country, fields.age);
        if !violations.is_empty() {
            return Err(ClientbookError::Validation(violations));
        }

        Ok(fields)
    }
}

/// Create payload: a full record including its identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewClient {
    /// Caller-supplied identifier
    pub customer_id: CustomerId,

    /// Remaining record fields
    #[serde(flatten)]
    pub fields: ClientFields,
}

impl NewClient {
    /// Validates the payload into a [`Client`]
    pub fn into_client(self) -> Result<Client> {
        Client::new(self.customer_id, self.fields)
    }
}
