//! # Centralized Error Handling
//!
//! This module defines the application-wide error type [`AppError`] used by
//! every API handler. It follows the `thiserror` pattern for ergonomic error handling.
//!
//! ## Error Categories
//!
//! 1. **Client Errors** (4xx) - User/input issues
//!    - [`InvalidInput`](AppError::InvalidInput) → 400 Bad Request
//!    - [`NotFound`](AppError::NotFound) → 404 Not Found
//!    - [`Validation`](AppError::Validation) → 422 Unprocessable Entity, with per-field errors
//!
//! 2. **Server Errors** (5xx) - Internal/system issues
//!    - [`Config`](AppError::Config) → 500 Internal Server Error
//!    - [`Internal`](AppError::Internal) → 500 Internal Server Error
//!
//! Every error renders as a [`shared::ErrorResponse`] body whose `code` is
//! the variant name.
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_core::error::{AppError, Result};
//!
//! fn parse_section(id: &str) -> Result<String> {
//!     if id.is_empty() {
//!         return Err(AppError::InvalidInput("Section id must not be empty".to_string()));
//!     }
//!     Ok(id.to_string())
//! }
//! ```
//!
//! ## Error Conversion
//!
//! - `From<anyhow::Error>` - Convert anyhow errors to AppError
//! - `From<serde_json::Error>` - Convert JSON errors to AppError
//! - `From<ContactFormErrors>` - Convert contact form validation failures to AppError

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shared::{ContactFormErrors, ErrorResponse};
use thiserror::Error;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Application-wide error type covering all error scenarios.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error during startup or environment loading.
    ///
    /// **HTTP Status**: 500 Internal Server Error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed request (unreadable body, wrong content type).
    ///
    /// **HTTP Status**: 400 Bad Request
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// One or more form fields failed validation.
    ///
    /// **HTTP Status**: 422 Unprocessable Entity
    #[error("Validation failed: {0}")]
    Validation(ContactFormErrors),

    /// Internal server error (unexpected failures).
    ///
    /// **HTTP Status**: 500 Internal Server Error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Requested resource not found.
    ///
    /// **HTTP Status**: 404 Not Found
    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Config(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get a user-friendly error message.
    ///
    /// For internal errors, returns a generic message to avoid exposing implementation details.
    pub fn user_message(&self) -> String {
        match self {
            AppError::InvalidInput(msg) => msg.clone(),
            AppError::NotFound(msg) => msg.clone(),
            AppError::Validation(_) => "Please correct the highlighted fields".to_string(),
            AppError::Config(_) | AppError::Internal(_) => "An internal error occurred".to_string(),
        }
    }

    /// Variant name, sent as the `code` of the error body.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Config(_) => "Config",
            AppError::InvalidInput(_) => "InvalidInput",
            AppError::Validation(_) => "Validation",
            AppError::Internal(_) => "Internal",
            AppError::NotFound(_) => "NotFound",
        }
    }

    /// Body sent to the client.
    pub fn to_body(&self) -> ErrorResponse {
        let fields = match self {
            AppError::Validation(errors) => errors.0.clone(),
            _ => Vec::new(),
        };
        ErrorResponse {
            error: self.user_message(),
            code: self.code().to_string(),
            fields,
        }
    }
}

/// Implement Axum's `IntoResponse` for automatic error handling.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Full error message for server logs
        if status.is_server_error() {
            tracing::error!("Server error: {}", self);
        } else {
            tracing::debug!("Client error: {}", self);
        }

        (status, Json(self.to_body())).into_response()
    }
}

/// Convert `anyhow::Error` to `AppError`.
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

/// Convert `serde_json::Error` to `AppError`.
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidInput(format!("JSON error: {}", err))
    }
}

impl From<ContactFormErrors> for AppError {
    fn from(errors: ContactFormErrors) -> Self {
        AppError::Validation(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{ContactField, FieldError, FieldErrorKind};

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::InvalidInput("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::NotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Validation(ContactFormErrors(Vec::new())).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::Config("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_details_are_hidden() {
        let err = AppError::Internal("disk quota exceeded on /var".into());

        let body = err.to_body();

        assert_eq!(body.error, "An internal error occurred");
        assert_eq!(body.code, "Internal");
        assert!(body.fields.is_empty());
    }

    #[test]
    fn test_validation_body_carries_fields() {
        // Arrange
        let errors = ContactFormErrors(vec![FieldError::new(
            ContactField::Email,
            FieldErrorKind::InvalidEmail,
        )]);

        // Act
        let body = AppError::from(errors).to_body();

        // Assert
        assert_eq!(body.code, "Validation");
        assert_eq!(body.fields.len(), 1);
        assert_eq!(body.fields[0].key, "contact.errors.email");
    }

    #[tokio::test]
    async fn test_into_response_status() {
        let response = AppError::NotFound("No such page".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_json_error_is_client_error() {
        let err: AppError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert_eq!(err.code(), "InvalidInput");
    }
}
