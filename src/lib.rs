// Clientbook - Client Records Service with Spreadsheet Import
// Copyright (c) 2025 Clientbook Contributors
// Licensed under the MIT License

//! # Clientbook - Client Records Service
//!
//! Clientbook stores client records in PostgreSQL and exposes them over a
//! small HTTP API, including bulk import from an Excel workbook.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Managing** individual client records (create, read, update, delete)
//! - **Importing** clients in bulk from a spreadsheet, with every row error
//!   reported instead of failing on the first one
//! - **Serving** both over HTTP with axum
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`api`] - HTTP routes, handlers and error responses
//! - [`core`] - Record service and import engine
//! - [`adapters`] - Storage contract and PostgreSQL implementation
//! - [`domain`] - Core domain types, validation rules and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use clientbook::adapters::database::create_client_store;
//! use clientbook::api::{create_router, serve, AppState};
//! use clientbook::config::load_config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("clientbook.toml")?;
//!     let store = create_client_store(&config).await?;
//!
//!     let router = create_router(AppState::new(store, &config.import));
//!     let (_shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
//!     serve(router, &config.server.bind_address(), shutdown_rx).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Import Rules
//!
//! The workbook must contain a sheet named `Clientes` whose header is exactly
//! `customer_id, name, email, country, age` (any order, any case). Rows are
//! checked independently and only rows without errors are inserted, in a
//! single transaction.
//!
//! ## Error Handling
//!
//! Clientbook uses the [`domain::ClientbookError`] type for all errors:
//!
//! ```rust,no_run
//! use clientbook::domain::ClientbookError;
//!
//! fn example() -> Result<(), ClientbookError> {
//!     let config = clientbook::config::load_config("clientbook.toml")?;
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
