//! HTTP API
//!
//! axum router over the record service and the import engine.

use crate::adapters::database::ClientStore;
use crate::config::ImportConfig;
use crate::core::{ClientService, ImportEngine};
use crate::domain::Result;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tokio::sync::watch;
use tower_http::trace::TraceLayer;

pub mod error;
pub mod handlers;

pub use error::ApiError;

/// Room for multipart boundaries and part headers on top of the file itself
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: ClientService,
    pub importer: Arc<ImportEngine>,
    pub max_upload_bytes: usize,
}

impl AppState {
    /// Wire the service and import engine over one store
    pub fn new(store: Arc<dyn ClientStore + Send + Sync>, import: &ImportConfig) -> Self {
        Self {
            service: ClientService::new(store.clone()),
            importer: Arc::new(ImportEngine::new(store, import)),
            max_upload_bytes: import.max_file_size_bytes(),
        }
    }
}

/// Create the API router with all endpoints
pub fn create_router(state: AppState) -> Router {
    let body_limit = state.max_upload_bytes + MULTIPART_OVERHEAD_BYTES;

    Router::new()
        .route("/", get(handlers::root))
        .route(
            "/clients",
            get(handlers::list_clients).post(handlers::create_client),
        )
        .route("/clients/import", post(handlers::import_clients))
        .route(
            "/clients/:customer_id",
            get(handlers::get_client)
                .put(handlers::update_client)
                .delete(handlers::delete_client),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the API server
///
/// Runs until `shutdown` flips to `true` (or its sender is dropped), then
/// drains in-flight requests.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
pub async fn serve(router: Router, addr: &str, mut shutdown: watch::Receiver<bool>) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(address = %addr, "REST API server listening");

    let shutdown_signal = async move {
        while !*shutdown.borrow() {
            if shutdown.changed().await.is_err() {
                break;
            }
        }
        tracing::info!("Shutdown signal received, draining connections");
    };

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    tracing::info!("Server shut down gracefully");
    Ok(())
}
