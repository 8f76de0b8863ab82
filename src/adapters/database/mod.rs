//! Storage abstraction layer
//!
//! Trait-based contract for the client-record store, plus the factory that
//! builds the configured implementation.

pub mod factory;
pub mod traits;

pub use factory::create_client_store;
pub use traits::ClientStore;
