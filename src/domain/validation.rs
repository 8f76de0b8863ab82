//! Field validation rules for client records
//!
//! Pure, side-effect-free checks shared by single-record create/update and by
//! the spreadsheet import, so both paths accept and reject exactly the same
//! values.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Minimum accepted age
pub const MIN_AGE: i32 = 18;

/// A single failed field rule
///
/// Renders as `<field>: <message>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    /// Field the rule applies to
    pub field: String,

    /// Human-readable reason
    pub message: String,
}

impl FieldViolation {
    /// Creates a new violation for `field`
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is a valid regex")
    })
}

/// Name must contain something other than whitespace
pub fn validate_name(name: &str) -> Result<(), FieldViolation> {
    if name.trim().is_empty() {
        return Err(FieldViolation::new("name", "must not be empty"));
    }
    Ok(())
}

/// Email must look like `local@domain.tld` with no whitespace and a single `@`
pub fn validate_email(email: &str) -> Result<(), FieldViolation> {
    if !email_pattern().is_match(email) {
        return Err(FieldViolation::new(
            "email",
            "must be a valid email address (local@domain.tld)",
        ));
    }
    Ok(())
}

/// Country is required; no other constraint
pub fn validate_country(country: &str) -> Result<(), FieldViolation> {
    if country.trim().is_empty() {
        return Err(FieldViolation::new("country", "is required"));
    }
    Ok(())
}

/// Age is optional; when present it must be at least [`MIN_AGE`]
pub fn validate_age(age: Option<i32>) -> Result<(), FieldViolation> {
    match age {
        Some(age) if age < MIN_AGE => {
            Err(FieldViolation::new("age", format!("must be ≥ {MIN_AGE}")))
        }
        _ => Ok(()),
    }
}

/// Runs every field rule and returns all failures, in field order
pub fn validate_fields(
    name: &str,
    email: &str,
    country: &str,
    age: Option<i32>,
) -> Vec<FieldViolation> {
    [
        validate_name(name),
        validate_email(email),
        validate_country(country),
        validate_age(age),
    ]
    .into_iter()
    .filter_map(Result::err)
    .collect()
}
