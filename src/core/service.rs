//! Record service - single-client CRUD on top of the store
//!
//! Field rules run through [`ClientFields::validated`], the same path the
//! import engine uses, so both entry points accept and reject identically.

use crate::adapters::database::traits::ClientStore;
use crate::domain::{Client, ClientFields, ClientbookError, CustomerId, NewClient, Result};
use std::sync::Arc;

/// Client record service
#[derive(Clone)]
pub struct ClientService {
    store: Arc<dyn ClientStore + Send + Sync>,
}

impl ClientService {
    /// Create a new service over a store
    pub fn new(store: Arc<dyn ClientStore + Send + Sync>) -> Self {
        Self { store }
    }

    /// All clients ordered by identifier
    pub async fn get_all(&self) -> Result<Vec<Client>> {
        self.store.get_all().await
    }

    /// A single client, if present
    pub async fn get_by_id(&self, id: CustomerId) -> Result<Option<Client>> {
        self.store.get_by_id(id).await
    }

    /// Validate and store a new client
    ///
    /// # Errors
    ///
    /// - `Validation` if any field rule fails
    /// - `DuplicateKey` if the identifier is taken, whether detected by the
    ///   pre-check or by the store at insert time
    pub async fn create(&self, new_client: NewClient) -> Result<Client> {
        let client = new_client.into_client()?;

        if self.store.exists(client.customer_id).await? {
            return Err(ClientbookError::DuplicateKey(client.customer_id));
        }

        let stored = self.store.insert(&client).await?;
        tracing::info!(customer_id = %stored.customer_id, "Client created");
        Ok(stored)
    }

    /// Replace the mutable fields of an existing client
    ///
    /// Returns `Ok(None)` if the client does not exist.
    ///
    /// # Errors
    ///
    /// Returns `Validation` if any field rule fails.
    pub async fn update(&self, id: CustomerId, fields: ClientFields) -> Result<Option<Client>> {
        let fields = fields.validated()?;

        if !self.store.exists(id).await? {
            return Ok(None);
        }

        let updated = self.store.update(id, &fields).await?;
        if updated.is_some() {
            tracing::info!(customer_id = %id, "Client updated");
        }
        Ok(updated)
    }

    /// Remove a client, returning whether it existed
    pub async fn delete(&self, id: CustomerId) -> Result<bool> {
        let deleted = self.store.delete(id).await?;
        if deleted {
            tracing::info!(customer_id = %id, "Client deleted");
        }
        Ok(deleted)
    }
}
