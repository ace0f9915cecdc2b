//! Unified error system for the HR records service
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ApiResponse`]: Unified error response body
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Department errors
//! - 2xxx: Employee errors
//! - 3xxx: Record errors (attendance, performance, salary)
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ApiResponse};
//!
//! let err = AppError::new(ErrorCode::NotFound);
//!
//! let err = AppError::employee_not_found(42).with_detail("hint", "regenerate data");
//! assert_eq!(err.code, ErrorCode::EmployeeNotFound);
//!
//! let response = ApiResponse::error(&err);
//! assert_eq!(response.code, 2001);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
