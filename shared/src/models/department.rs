//! Department Model

use serde::{Deserialize, Serialize};

/// Department entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Department {
    pub id: i64,
    /// Unique across the table
    pub name: String,
    pub location: Option<String>,
    /// Manager display name
    pub manager: Option<String>,
    /// Unix millis, set by the database
    pub created_at: i64,
}

/// Create department payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentCreate {
    pub name: String,
    pub location: Option<String>,
    pub manager: Option<String>,
}
