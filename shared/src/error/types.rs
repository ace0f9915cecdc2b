//! Error types and API response structures

use super::codes::ErrorCode;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// This is the primary error type of the service, providing:
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable messages
/// - Optional structured details for debugging
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (ids, offending values, context)
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    // ==================== Convenience constructors ====================

    /// Create a not found error
    pub fn not_found(resource: impl Into<String>) -> Self {
        let r = resource.into();
        Self::with_message(ErrorCode::NotFound, format!("{} not found", r))
            .with_detail("resource", r)
    }

    /// Employee with the given id does not exist
    pub fn employee_not_found(id: i64) -> Self {
        Self::with_message(
            ErrorCode::EmployeeNotFound,
            format!("Employee {} not found", id),
        )
        .with_detail("employee_id", id)
    }

    /// Employee exists but has no performance review
    pub fn performance_not_found(employee_id: i64) -> Self {
        Self::with_message(
            ErrorCode::PerformanceNotFound,
            format!("No performance record found for employee {}", employee_id),
        )
        .with_detail("employee_id", employee_id)
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }

    /// Create a database error
    pub fn database(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::DatabaseError, msg)
    }

    /// Create an invalid request error
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidRequest, msg)
    }

    /// Create a conflict error
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::AlreadyExists, msg)
    }

    /// Create a data integrity error
    pub fn data_integrity(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::DataIntegrity, msg)
    }

    /// Create a rate limited error
    pub fn rate_limited() -> Self {
        Self::new(ErrorCode::RateLimited)
    }
}

/// Unified error response body
///
/// Data endpoints return plain JSON; every failure renders as:
/// - `code`: Error code
/// - `message`: Human-readable message
/// - `details`: Additional error details (optional)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    /// Non-zero error code
    pub code: u16,
    /// Human-readable message
    pub message: String,
    /// Additional error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl ApiResponse {
    /// Create an error response from an AppError
    pub fn error(err: &AppError) -> Self {
        Self {
            code: err.code.code(),
            message: err.message.clone(),
            details: err.details.clone(),
        }
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

// ===== Axum Integration =====

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = self.http_status();
        let body = ApiResponse::error(&self);

        // Log system errors
        if matches!(self.code.category(), super::category::ErrorCategory::System) {
            tracing::error!(
                code = %self.code,
                message = %self.message,
                "System error occurred"
            );
        }

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_new() {
        let err = AppError::new(ErrorCode::NotFound);
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Resource not found");
        assert!(err.details.is_none());
    }

    #[test]
    fn test_app_error_with_detail() {
        let err = AppError::invalid_request("Bad employee id")
            .with_detail("field", "employee_id")
            .with_detail("value", 7);

        assert_eq!(err.code, ErrorCode::InvalidRequest);
        let details = err.details.unwrap();
        assert_eq!(details.get("field").unwrap(), "employee_id");
        assert_eq!(details.get("value").unwrap(), 7);
    }

    #[test]
    fn test_domain_constructors() {
        let err = AppError::employee_not_found(42);
        assert_eq!(err.code, ErrorCode::EmployeeNotFound);
        assert_eq!(err.message, "Employee 42 not found");
        assert_eq!(err.http_status(), StatusCode::NOT_FOUND);

        let err = AppError::performance_not_found(7);
        assert_eq!(err.code, ErrorCode::PerformanceNotFound);
        assert_eq!(
            err.details.as_ref().unwrap().get("employee_id").unwrap(),
            7
        );

        let err = AppError::data_integrity("salary 3 has no employee");
        assert_eq!(err.http_status(), StatusCode::INTERNAL_SERVER_ERROR);

        let err = AppError::rate_limited();
        assert_eq!(err.http_status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::not_found("Department");
        assert_eq!(format!("{}", err), "Department not found");
    }

    #[test]
    fn test_api_response_error() {
        let err = AppError::employee_not_found(9);
        let response = ApiResponse::error(&err);

        assert_eq!(response.code, 2001);
        assert_eq!(response.message, "Employee 9 not found");
        assert!(response.details.is_some());
    }

    #[test]
    fn test_api_response_serialize() {
        let response = ApiResponse::error(&AppError::rate_limited());
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"code\":6"));
        assert!(json.contains("\"message\":\"Too many requests, try again later\""));
        assert!(!json.contains("details"));
        assert!(!json.contains("data"));
    }
}
