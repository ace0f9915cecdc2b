//! Unified error codes for the HR records service
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Department errors
//! - 2xxx: Employee errors
//! - 3xxx: Record errors (attendance, performance, salary)
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so clients can match on
/// them without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Too many requests from one client
    RateLimited = 6,

    // ==================== 1xxx: Department ====================
    /// Department name already exists
    DepartmentNameExists = 1002,

    // ==================== 2xxx: Employee ====================
    /// Employee not found
    EmployeeNotFound = 2001,
    /// Employee email already exists
    EmployeeEmailExists = 2002,

    // ==================== 3xxx: Records ====================
    /// No performance review for the employee
    PerformanceNotFound = 3001,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Synthetic data generation failed
    GeneratorFailed = 9004,
    /// Stored data violates an integrity expectation
    DataIntegrity = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::RateLimited => "Too many requests, try again later",

            // Department
            ErrorCode::DepartmentNameExists => "Department name already exists",

            // Employee
            ErrorCode::EmployeeNotFound => "Employee not found",
            ErrorCode::EmployeeEmailExists => "Employee email already exists",

            // Records
            ErrorCode::PerformanceNotFound => "No performance record found",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::GeneratorFailed => "Synthetic data generation failed",
            ErrorCode::DataIntegrity => "Stored data failed an integrity check",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::RateLimited),

            // Department
            1002 => Ok(ErrorCode::DepartmentNameExists),

            // Employee
            2001 => Ok(ErrorCode::EmployeeNotFound),
            2002 => Ok(ErrorCode::EmployeeEmailExists),

            // Records
            3001 => Ok(ErrorCode::PerformanceNotFound),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9004 => Ok(ErrorCode::GeneratorFailed),
            9005 => Ok(ErrorCode::DataIntegrity),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: &[ErrorCode] = &[
        ErrorCode::Success,
        ErrorCode::NotFound,
        ErrorCode::AlreadyExists,
        ErrorCode::InvalidRequest,
        ErrorCode::RateLimited,
        ErrorCode::DepartmentNameExists,
        ErrorCode::EmployeeNotFound,
        ErrorCode::EmployeeEmailExists,
        ErrorCode::PerformanceNotFound,
        ErrorCode::InternalError,
        ErrorCode::DatabaseError,
        ErrorCode::GeneratorFailed,
        ErrorCode::DataIntegrity,
    ];

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::RateLimited.code(), 6);
        assert_eq!(ErrorCode::DepartmentNameExists.code(), 1002);
        assert_eq!(ErrorCode::EmployeeNotFound.code(), 2001);
        assert_eq!(ErrorCode::PerformanceNotFound.code(), 3001);
        assert_eq!(ErrorCode::InternalError.code(), 9001);
        assert_eq!(ErrorCode::DataIntegrity.code(), 9005);
    }

    #[test]
    fn test_is_success() {
        assert!(ErrorCode::Success.is_success());
        assert!(!ErrorCode::NotFound.is_success());
        assert!(!ErrorCode::InternalError.is_success());
    }

    #[test]
    fn test_try_from_covers_every_code() {
        for code in ALL {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(*code));
        }
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(2), Err(InvalidErrorCode(2)));
        assert_eq!(ErrorCode::try_from(4001), Err(InvalidErrorCode(4001)));
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&ErrorCode::EmployeeNotFound).unwrap();
        assert_eq!(json, "2001");
    }

    #[test]
    fn test_deserialize_invalid() {
        let result: Result<ErrorCode, _> = serde_json::from_str("12345");
        assert!(result.is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ErrorCode::DatabaseError), "9002");
        assert_eq!(
            format!("{}", InvalidErrorCode(42)),
            "invalid error code: 42"
        );
    }

    #[test]
    fn test_message() {
        assert_eq!(ErrorCode::EmployeeNotFound.message(), "Employee not found");
        assert_eq!(
            ErrorCode::RateLimited.message(),
            "Too many requests, try again later"
        );
    }
}
