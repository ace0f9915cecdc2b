//! Report Models
//!
//! Read-side shapes returned by the aggregation endpoints.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One row of the paginated employee listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct EmployeeSummary {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Department name, empty when unassigned
    pub department: String,
}

/// Paginated employee listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeePage {
    /// Rows matching the filter, ignoring pagination
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub data: Vec<EmployeeSummary>,
}

/// Department listing row
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct DepartmentInfo {
    pub id: i64,
    pub name: String,
    pub location: Option<String>,
    pub manager: Option<String>,
}

/// Present / absent tallies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceCounts {
    pub present: i64,
    pub absent: i64,
}

impl AttendanceCounts {
    pub fn total(&self) -> i64 {
        self.present + self.absent
    }
}

/// Salary figures rounded to 2 decimals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    pub base_salary: f64,
    pub bonus: f64,
    pub deductions: f64,
}

/// Cross-entity summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemSummary {
    pub total_employees: i64,
    /// Department name -> employee count (zero-count departments included)
    pub departments: BTreeMap<String, i64>,
    /// Mean rating rounded to 2 decimals, 0 without reviews
    pub average_performance_rating: f64,
    pub attendance: AttendanceCounts,
}

/// Confirmation returned by the generator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResult {
    pub status: String,
    pub message: String,
}

impl GenerateResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: "success".to_string(),
            message: message.into(),
        }
    }
}
