//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound
            | Self::EmployeeNotFound
            | Self::PerformanceNotFound => StatusCode::NOT_FOUND,

            // 409 Conflict
            Self::AlreadyExists | Self::DepartmentNameExists | Self::EmployeeEmailExists => {
                StatusCode::CONFLICT
            }

            // 429 Too Many Requests
            Self::RateLimited => StatusCode::TOO_MANY_REQUESTS,

            // 500 Internal Server Error
            Self::InternalError
            | Self::DatabaseError
            | Self::GeneratorFailed
            | Self::DataIntegrity => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request
            Self::InvalidRequest => StatusCode::BAD_REQUEST,
        }
    }
}
