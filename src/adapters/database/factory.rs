//! Client store factory
//!
//! Builds the configured store and prepares its schema.

use crate::adapters::database::traits::ClientStore;
use crate::adapters::postgresql::adapter::PostgreSQLAdapter;
use crate::adapters::postgresql::client::PostgreSQLClient;
use crate::config::schema::ClientbookConfig;
use crate::domain::Result;
use std::sync::Arc;

/// Create the client store described by the configuration
///
/// The connection is tested and the `clients` table is created if absent, so
/// the returned store is ready to serve requests.
///
/// # Errors
///
/// Returns an error if the pool cannot be built, the database is unreachable,
/// or the schema cannot be created.
pub async fn create_client_store(
    config: &ClientbookConfig,
) -> Result<Arc<dyn ClientStore + Send + Sync>> {
    tracing::info!("Creating PostgreSQL client store");
    let client = PostgreSQLClient::new(config.postgresql.clone()).await?;
    tracing::info!(
        target_db = %client.connection_string_safe(),
        max_size = client.pool_status().max_size,
        "PostgreSQL pool created"
    );

    let adapter = PostgreSQLAdapter::new(client);
    adapter.test_connection().await?;
    adapter.ensure_schema().await?;

    Ok(Arc::new(adapter) as Arc<dyn ClientStore + Send + Sync>)
}
