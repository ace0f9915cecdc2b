//! Data models
//!
//! Row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod attendance;
pub mod department;
pub mod employee;
pub mod performance;
pub mod report;
pub mod salary;

// Re-exports
pub use attendance::*;
pub use department::*;
pub use employee::*;
pub use performance::*;
pub use report::*;
pub use salary::*;
