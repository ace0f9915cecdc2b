//! Shared types for the HR records service
//!
//! Row and report types, the unified error system and small utilities used by
//! the server and by its tests.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use serde::{Deserialize, Serialize};
