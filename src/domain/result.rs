//! Result type alias for Clientbook
//!
//! Convenience alias that uses [`ClientbookError`] as the error type.

use super::errors::ClientbookError;

/// Result type alias for Clientbook operations
///
/// # Examples
///
/// ```
/// use clientbook::domain::result::Result;
/// use clientbook::domain::errors::ClientbookError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(ClientbookError::InvalidInput("bad request".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, ClientbookError>;
