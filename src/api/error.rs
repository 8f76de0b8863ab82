//! HTTP error responses
//!
//! Every failure is rendered as `{"detail": "<message>"}`. Storage and other
//! internal failures are logged and answered with a generic 500 so driver
//! messages never reach the caller.

use crate::domain::ClientbookError;
use crate::log_error_with_context;
use axum::extract::multipart::MultipartError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

const INTERNAL_DETAIL: &str = "Internal server error";

/// Error returned by every handler
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl ApiError {
    /// Build an error with an explicit status
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    /// 400 with the given detail
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, detail)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }
}

/// Status code for a domain error
pub fn status_for(error: &ClientbookError) -> StatusCode {
    match error {
        ClientbookError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        ClientbookError::UnreadableFile(_)
        | ClientbookError::SchemaMismatch { .. }
        | ClientbookError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ClientbookError::DuplicateKey(_) => StatusCode::CONFLICT,
        ClientbookError::NotFound(_) => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<ClientbookError> for ApiError {
    fn from(error: ClientbookError) -> Self {
        let status = status_for(&error);
        if status.is_server_error() {
            log_error_with_context!(&error, "Request failed");
            return Self::new(status, INTERNAL_DETAIL);
        }

        let detail = match &error {
            ClientbookError::InvalidInput(message) | ClientbookError::UnreadableFile(message) => {
                message.clone()
            }
            other => other.to_string(),
        };
        Self::new(status, detail)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<MultipartError> for ApiError {
    fn from(error: MultipartError) -> Self {
        Self::new(error.status(), error.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "detail": self.detail }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CustomerId, FieldViolation};
    use test_case::test_case;

    #[test_case(ClientbookError::InvalidInput("x".into()), StatusCode::BAD_REQUEST ; "invalid input")]
    #[test_case(ClientbookError::UnreadableFile("x".into()), StatusCode::UNPROCESSABLE_ENTITY ; "unreadable")]
    #[test_case(ClientbookError::SchemaMismatch { missing: vec!["country".into()], unexpected: vec![] }, StatusCode::UNPROCESSABLE_ENTITY ; "schema")]
    #[test_case(ClientbookError::Validation(vec![FieldViolation::new("name", "must not be empty")]), StatusCode::UNPROCESSABLE_ENTITY ; "validation")]
    #[test_case(ClientbookError::DuplicateKey(CustomerId::new(1)), StatusCode::CONFLICT ; "duplicate")]
    #[test_case(ClientbookError::NotFound(CustomerId::new(1)), StatusCode::NOT_FOUND ; "not found")]
    #[test_case(ClientbookError::Database("down".into()), StatusCode::INTERNAL_SERVER_ERROR ; "database")]
    #[test_case(ClientbookError::Other("x".into()), StatusCode::INTERNAL_SERVER_ERROR ; "other")]
    fn test_status_mapping(error: ClientbookError, expected: StatusCode) {
        assert_eq!(status_for(&error), expected);
    }

    #[test]
    fn test_database_detail_is_generic() {
        let error = ApiError::from(ClientbookError::Database("password=hunter2".into()));
        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.detail(), INTERNAL_DETAIL);
    }

    #[test]
    fn test_client_error_detail_is_message() {
        let error = ApiError::from(ClientbookError::NotFound(CustomerId::new(9)));
        assert_eq!(error.detail(), "Client with customer_id=9 not found");
    }
}
