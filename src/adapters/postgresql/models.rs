//! PostgreSQL row models
//!
//! This module maps client records to and from rows of the `clients` table.

use crate::domain::{Client, ClientbookError, CustomerId, Result};
use tokio_postgres::types::ToSql;
use tokio_postgres::Row;

/// Columns selected whenever a full record is read back
pub const CLIENT_SELECT_COLUMNS: &str = "customer_id, name, email, country, age";

/// Client row for PostgreSQL storage
///
/// This structure maps to the `clients` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostgreSQLClientRow {
    /// Primary key
    pub customer_id: i64,

    /// Display name
    pub name: String,

    /// Contact email
    pub email: String,

    /// Country of residence
    pub country: String,

    /// Nullable age
    pub age: Option<i32>,
}

impl PostgreSQLClientRow {
    /// Convert from a domain client
    pub fn from_domain(client: &Client) -> Self {
        Self {
            customer_id: client.customer_id.value(),
            name: client.name.clone(),
            email: client.email.clone(),
            country: client.country.clone(),
            age: client.age,
        }
    }

    /// Read a row returned by a query selecting [`CLIENT_SELECT_COLUMNS`]
    pub fn from_row(row: &Row) -> Result<Self> {
        let column_error =
            |e: tokio_postgres::Error| ClientbookError::Database(format!("Invalid client row: {e}"));

        Ok(Self {
            customer_id: row.try_get("customer_id").map_err(column_error)?,
            name: row.try_get("name").map_err(column_error)?,
            email: row.try_get("email").map_err(column_error)?,
            country: row.try_get("country").map_err(column_error)?,
            age: row.try_get("age").map_err(column_error)?,
        })
    }

    /// Convert to the domain client
    ///
    /// Stored rows were validated on the way in, so no rule is re-run here.
    pub fn to_domain(self) -> Client {
        Client {
            customer_id: CustomerId::new(self.customer_id),
            name: self.name,
            email: self.email,
            country: self.country,
            age: self.age,
        }
    }

    /// Positional parameters for `INSERT (customer_id, name, email, country, age)`
    pub fn insert_params(&self) -> [&(dyn ToSql + Sync); 5] {
        [
            &self.customer_id,
            &self.name,
            &self.email,
            &self.country,
            &self.age,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ClientFields;

    #[test]
    fn test_domain_round_trip() {
        let client = Client::new(
            CustomerId::new(11),
            ClientFields {
                name: "Ana".to_string(),
                email: "ana@example.com".to_string(),
                country: "AR".to_string(),
                age: None,
            },
        )
        .unwrap();

        let row = PostgreSQLClientRow::from_domain(&client);
        assert_eq!(row.customer_id, 11);
        assert_eq!(row.age, None);
        assert_eq!(row.to_domain(), client);
    }

    #[test]
    fn test_insert_params_arity() {
        let row = PostgreSQLClientRow {
            customer_id: 1,
            name: "A".to_string(),
            email: "a@b.c".to_string(),
            country: "X".to_string(),
            age: Some(20),
        };
        assert_eq!(row.insert_params().len(), 5);
    }
}
