//! Serve command implementation
//!
//! Starts the HTTP API against the configured PostgreSQL database.

use crate::adapters::database::create_client_store;
use crate::api::{create_router, serve, AppState};
use crate::config::load_config;
use clap::Args;
use tokio::sync::watch;

/// Arguments for the serve command
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Override the bind host
    #[arg(long)]
    pub host: Option<String>,

    /// Override the listen port
    #[arg(short, long)]
    pub port: Option<u16>,
}

impl ServeArgs {
    /// Execute the serve command
    pub async fn execute(
        &self,
        config_path: &str,
        shutdown_signal: watch::Receiver<bool>,
    ) -> anyhow::Result<i32> {
        tracing::info!("Starting serve command");

        let mut config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Configuration error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        if let Some(host) = &self.host {
            tracing::info!(host = %host, "Overriding host from CLI");
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            tracing::info!(port, "Overriding port from CLI");
            config.server.port = port;
        }

        let store = create_client_store(&config).await?;
        let state = AppState::new(store, &config.import);
        let router = create_router(state);

        serve(router, &config.server.bind_address(), shutdown_signal).await?;
        Ok(0)
    }
}
