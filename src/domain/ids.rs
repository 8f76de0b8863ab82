//! Domain identifier types
//!
//! Newtype wrapper for the caller-supplied client identifier.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Client identifier newtype wrapper
///
/// Caller-supplied, unique across stored records and immutable once set.
/// Any 64-bit integer is accepted, including zero and negative values.
///
/// # Examples
///
/// ```
/// use clientbook::domain::ids::CustomerId;
/// use std::str::FromStr;
///
/// let id = CustomerId::from_str(" 42 ").unwrap();
/// assert_eq!(id.value(), 42);
/// assert_eq!(id.to_string(), "42");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CustomerId(i64);

impl CustomerId {
    /// Creates a new CustomerId
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw integer value
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CustomerId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("customer_id cannot be empty".to_string());
        }
        trimmed
            .parse::<i64>()
            .map(Self)
            .map_err(|_| format!("customer_id must be an integer, got '{trimmed}'"))
    }
}
