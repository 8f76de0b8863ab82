//! PostgreSQL database integration
//!
//! This module provides the PostgreSQL-backed client store.

pub mod adapter;
pub mod client;
pub mod models;

pub use adapter::PostgreSQLAdapter;
pub use client::PostgreSQLClient;
pub use models::PostgreSQLClientRow;
