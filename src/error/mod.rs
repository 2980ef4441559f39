//! Error handling module.
//!
//! This module provides unified error handling with proper HTTP status code mapping
//! and standardized API error responses.

pub mod codes;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

pub use codes::{ErrorCategory, ErrorCode};

/// Application-level error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// No phone numbers or no handles were supplied.
    #[error("Empty input: no {0} supplied")]
    EmptyInput(String),

    /// Invalid request parameters.
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Handle already present in the catalog or the custom list.
    #[error("Handle already exists: {0}")]
    HandleExists(String),

    /// Missing or unknown session token.
    #[error("Authentication failed")]
    Unauthorized,

    /// Session token was valid but the session has been idle too long.
    #[error("Session expired")]
    SessionExpired,

    /// Resource not found.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Session capacity exhausted.
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Export serialization error.
    #[error("Export failed: {0}")]
    Export(#[from] ExportError),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get the error code for this error.
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::EmptyInput(_) => ErrorCode::EMPTY_INPUT,
            Self::BadRequest(_) => ErrorCode::BAD_REQUEST,
            Self::HandleExists(_) => ErrorCode::HANDLE_EXISTS,
            Self::Unauthorized => ErrorCode::UNAUTHORIZED,
            Self::SessionExpired => ErrorCode::SESSION_EXPIRED,
            Self::NotFound(_) => ErrorCode::NOT_FOUND,
            Self::RateLimited => ErrorCode::RATE_LIMITED,
            Self::Export(_) => ErrorCode::EXPORT_FAILED,
            Self::Internal(_) => ErrorCode::INTERNAL_ERROR,
        }
    }

    /// Get the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::EmptyInput(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::HandleExists(_) => StatusCode::CONFLICT,
            Self::Unauthorized | Self::SessionExpired => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            Self::Export(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code();
        let code = error_code.as_i32();
        let category = error_code.category();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!(
                error_code = code,
                category = %category,
                status = %status,
                message = %message,
                "Request failed"
            );
        } else {
            tracing::warn!(
                error_code = code,
                category = %category,
                status = %status,
                message = %message,
                "Request rejected"
            );
        }

        let body = Json(json!({
            "code": code,
            "message": message,
            "data": null
        }));

        (status, body).into_response()
    }
}

/// Export-specific error type.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Delimited text writer failure.
    #[error("CSV error: {0}")]
    Csv(String),

    /// Spreadsheet writer failure.
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(String),

    /// JSON serialization/deserialization failure.
    #[error("JSON error: {0}")]
    Json(String),
}

impl From<csv::Error> for ExportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for ExportError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        Self::Spreadsheet(err.to_string())
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias using `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Result type alias using `ExportError`.
pub type ExportResult<T> = std::result::Result<T, ExportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AppError::EmptyInput("handles".to_string()).error_code(),
            ErrorCode::EMPTY_INPUT
        );
        assert_eq!(AppError::Unauthorized.error_code(), ErrorCode::UNAUTHORIZED);
        assert_eq!(
            AppError::Export(ExportError::Csv("boom".to_string())).error_code(),
            ErrorCode::EXPORT_FAILED
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::EmptyInput("phone numbers".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::HandleExists("paytm".to_string()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::SessionExpired.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::RateLimited.status_code(),
            StatusCode::TOO_MANY_REQUESTS
        );
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(
            AppError::HandleExists("paytm".to_string()).error_code().category(),
            ErrorCategory::Catalog
        );
        assert_eq!(
            AppError::SessionExpired.error_code().category(),
            ErrorCategory::Session
        );
        assert_eq!(
            AppError::EmptyInput("handles".to_string()).error_code().category(),
            ErrorCategory::Validation
        );
        assert_eq!(
            AppError::Internal("boom".to_string()).error_code().category(),
            ErrorCategory::Internal
        );
        assert_eq!(ErrorCategory::Resource.to_string(), "resource");
    }

    #[tokio::test]
    async fn test_into_response_envelope() {
        let response = AppError::NotFound("custom handle #3".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["code"], 4001);
        assert!(value["data"].is_null());
    }

    #[test]
    fn test_empty_input_message() {
        let err = AppError::EmptyInput("handles".to_string());
        assert_eq!(err.to_string(), "Empty input: no handles supplied");
    }
}
