//! PostgreSQL adapter implementing the client store trait
//!
//! Uniqueness of `customer_id` is delegated to the table's primary key: a
//! unique violation raised by PostgreSQL surfaces as `DuplicateKey`.

use crate::adapters::database::traits::ClientStore;
use crate::adapters::postgresql::client::PostgreSQLClient;
use crate::adapters::postgresql::models::{PostgreSQLClientRow, CLIENT_SELECT_COLUMNS};
use crate::domain::{Client, ClientFields, ClientbookError, CustomerId, Result};
use async_trait::async_trait;
use std::collections::BTreeSet;
use std::sync::Arc;
use tokio_postgres::error::SqlState;

const INSERT_CLIENT: &str = r#"
    INSERT INTO clients (customer_id, name, email, country, age)
    VALUES ($1, $2, $3, $4, $5)
"#;

/// PostgreSQL implementation of [`ClientStore`]
pub struct PostgreSQLAdapter {
    client: Arc<PostgreSQLClient>,
}

impl PostgreSQLAdapter {
    /// Create a new PostgreSQL adapter
    pub fn new(client: PostgreSQLClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

/// Map an insert failure, turning unique violations into `DuplicateKey`
fn map_insert_error(err: tokio_postgres::Error, id: CustomerId) -> ClientbookError {
    if err.code() == Some(&SqlState::UNIQUE_VIOLATION) {
        ClientbookError::DuplicateKey(id)
    } else {
        ClientbookError::Database(format!("Insert of customer_id={id} failed: {err}"))
    }
}

#[async_trait]
impl ClientStore for PostgreSQLAdapter {
    async fn test_connection(&self) -> Result<()> {
        self.client.test_connection().await
    }

    async fn ensure_schema(&self) -> Result<()> {
        self.client.apply_migrations().await
    }

    async fn get_all(&self) -> Result<Vec<Client>> {
        let query = format!("SELECT {CLIENT_SELECT_COLUMNS} FROM clients ORDER BY customer_id");
        let rows = self.client.query(&query, &[]).await?;

        let clients = rows
            .iter()
            .map(|row| PostgreSQLClientRow::from_row(row).map(PostgreSQLClientRow::to_domain))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(count = clients.len(), "Loaded clients from PostgreSQL");
        Ok(clients)
    }

    async fn get_by_id(&self, id: CustomerId) -> Result<Option<Client>> {
        let query = format!("SELECT {CLIENT_SELECT_COLUMNS} FROM clients WHERE customer_id = $1");
        let row = self.client.query_opt(&query, &[&id.value()]).await?;

        row.map(|row| PostgreSQLClientRow::from_row(&row).map(PostgreSQLClientRow::to_domain))
            .transpose()
    }

    async fn exists(&self, id: CustomerId) -> Result<bool> {
        let query = "SELECT EXISTS(SELECT 1 FROM clients WHERE customer_id = $1)";
        let rows = self.client.query(query, &[&id.value()]).await?;

        if let Some(row) = rows.first() {
            let exists: bool = row.get(0);
            Ok(exists)
        } else {
            Ok(false)
        }
    }

    async fn existing_ids_among(
        &self,
        ids: &BTreeSet<CustomerId>,
    ) -> Result<BTreeSet<CustomerId>> {
        if ids.is_empty() {
            return Ok(BTreeSet::new());
        }

        let candidates: Vec<i64> = ids.iter().map(|id| id.value()).collect();
        let query = "SELECT customer_id FROM clients WHERE customer_id = ANY($1)";
        let rows = self.client.query(query, &[&candidates]).await?;

        let existing = rows
            .iter()
            .map(|row| row.get::<_, i64>(0))
            .map(CustomerId::new)
            .collect::<BTreeSet<_>>();

        tracing::debug!(
            candidates = candidates.len(),
            existing = existing.len(),
            "Checked candidate ids against PostgreSQL"
        );
        Ok(existing)
    }

    async fn insert(&self, client: &Client) -> Result<Client> {
        let pg_row = PostgreSQLClientRow::from_domain(client);
        let query = format!(
            "INSERT INTO clients (customer_id, name, email, country, age) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {CLIENT_SELECT_COLUMNS}"
        );

        let conn = self.client.get_connection().await?;
        let row = conn
            .query_one(query.as_str(), &pg_row.insert_params())
            .await
            .map_err(|e| map_insert_error(e, client.customer_id))?;

        let stored = PostgreSQLClientRow::from_row(&row)?.to_domain();
        tracing::debug!(customer_id = %stored.customer_id, "Client inserted into PostgreSQL");
        Ok(stored)
    }

    async fn insert_many(&self, clients: &[Client]) -> Result<usize> {
        if clients.is_empty() {
            return Ok(0);
        }

        let mut conn = self.client.get_connection().await?;

        // Dropping the transaction without commit rolls the whole batch back
        let tx = conn
            .transaction()
            .await
            .map_err(|e| ClientbookError::Database(format!("Failed to begin transaction: {e}")))?;

        let statement = tx
            .prepare(INSERT_CLIENT)
            .await
            .map_err(|e| ClientbookError::Database(format!("Failed to prepare insert: {e}")))?;

        for client in clients {
            let pg_row = PostgreSQLClientRow::from_domain(client);
            tx.execute(&statement, &pg_row.insert_params())
                .await
                .map_err(|e| map_insert_error(e, client.customer_id))?;
        }

        tx.commit()
            .await
            .map_err(|e| ClientbookError::Database(format!("Failed to commit batch: {e}")))?;

        tracing::debug!(count = clients.len(), "Batch inserted into PostgreSQL");
        Ok(clients.len())
    }

    async fn update(&self, id: CustomerId, fields: &ClientFields) -> Result<Option<Client>> {
        let query = format!(
            "UPDATE clients SET name = $1, email = $2, country = $3, age = $4 \
             WHERE customer_id = $5 RETURNING {CLIENT_SELECT_COLUMNS}"
        );

        let row = self
            .client
            .query_opt(
                &query,
                &[
                    &fields.name,
                    &fields.email,
                    &fields.country,
                    &fields.age,
                    &id.value(),
                ],
            )
            .await?;

        row.map(|row| PostgreSQLClientRow::from_row(&row).map(PostgreSQLClientRow::to_domain))
            .transpose()
    }

    async fn delete(&self, id: CustomerId) -> Result<bool> {
        let affected = self
            .client
            .execute("DELETE FROM clients WHERE customer_id = $1", &[&id.value()])
            .await?;
        Ok(affected > 0)
    }

    fn database_name(&self) -> &str {
        "postgresql"
    }
}
