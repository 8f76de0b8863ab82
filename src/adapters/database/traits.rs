//! Storage abstraction traits
//!
//! This module defines the contract that a client-record store must
//! implement. Every call is awaited to completion by its caller and reads
//! always reflect the latest committed state; implementations must not cache.

use crate::domain::{Client, ClientFields, CustomerId, Result};
use async_trait::async_trait;
use std::collections::BTreeSet;

/// Durable store of client records
///
/// Uniqueness of `customer_id` is enforced by the store itself. Callers may
/// pre-check with [`ClientStore::exists`] or [`ClientStore::existing_ids_among`],
/// but an insert-time [`ClientbookError::DuplicateKey`] is authoritative.
///
/// [`ClientbookError::DuplicateKey`]: crate::domain::ClientbookError::DuplicateKey
#[async_trait]
pub trait ClientStore: Send + Sync {
    /// Test the database connection
    ///
    /// # Errors
    ///
    /// Returns an error if the connection test fails.
    async fn test_connection(&self) -> Result<()>;

    /// Create the clients table if it does not exist yet
    ///
    /// Safe to call on every startup.
    async fn ensure_schema(&self) -> Result<()>;

    /// All stored records, ordered by identifier
    async fn get_all(&self) -> Result<Vec<Client>>;

    /// Point lookup
    ///
    /// Returns `Ok(None)` if no record has this identifier.
    async fn get_by_id(&self, id: CustomerId) -> Result<Option<Client>>;

    /// Whether a record with this identifier is stored
    async fn exists(&self, id: CustomerId) -> Result<bool>;

    /// The subset of `ids` already stored, in one round-trip
    ///
    /// An empty input yields an empty set.
    async fn existing_ids_among(&self, ids: &BTreeSet<CustomerId>)
        -> Result<BTreeSet<CustomerId>>;

    /// Insert a single record
    ///
    /// # Errors
    ///
    /// Returns `DuplicateKey` if the identifier is already present. Existing
    /// rows are never overwritten.
    async fn insert(&self, client: &Client) -> Result<Client>;

    /// Insert a batch of records atomically
    ///
    /// Either every record is persisted or none is. On success the returned
    /// count equals `clients.len()`.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateKey` if any identifier collides (the whole batch is
    /// rolled back), or `Database` for any other failure.
    async fn insert_many(&self, clients: &[Client]) -> Result<usize>;

    /// Replace the mutable fields of a record; the identifier is unchanged
    ///
    /// Returns `Ok(None)` if no record has this identifier.
    async fn update(&self, id: CustomerId, fields: &ClientFields) -> Result<Option<Client>>;

    /// Delete a record
    ///
    /// Returns `true` iff a row was removed.
    async fn delete(&self, id: CustomerId) -> Result<bool>;

    /// Backend name, for logs
    fn database_name(&self) -> &str;
}
