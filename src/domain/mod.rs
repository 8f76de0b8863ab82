//! Domain models and types for Clientbook.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Identifier type** ([`CustomerId`])
//! - **Record model** ([`Client`], [`ClientFields`], [`NewClient`])
//! - **Validation rules** ([`validation`]) shared by CRUD and import
//! - **Error types** ([`ClientbookError`]) and the [`Result`] alias
//!
//! # Validated construction
//!
//! ```rust
//! use clientbook::domain::{Client, ClientFields, CustomerId};
//!
//! # fn example() -> clientbook::domain::Result<()> {
//! let client = Client::new(
//!     CustomerId::new(1),
//!     ClientFields {
//!         name: " Ana ".to_string(),
//!         email: "ana@example.com".to_string(),
//!         country: "AR".to_string(),
//!         age: Some(31),
//!     },
//! )?;
//! assert_eq!(client.name, "Ana");
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod errors;
pub mod ids;
pub mod result;
pub mod validation;

// Re-export commonly used types for convenience
pub use client::{Client, ClientFields, NewClient, CLIENT_COLUMNS};
pub use errors::ClientbookError;
pub use ids::CustomerId;
pub use result::Result;
pub use validation::FieldViolation;
