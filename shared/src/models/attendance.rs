//! Attendance Model

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Attendance status, stored as `Present` / `Absent`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "PascalCase"))]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl AttendanceStatus {
    pub const ALL: [AttendanceStatus; 2] = [AttendanceStatus::Present, AttendanceStatus::Absent];
}

/// Attendance entity
///
/// No uniqueness on (employee_id, date): the same day may be recorded twice.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Attendance {
    pub id: i64,
    pub employee_id: Option<i64>,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub check_in_time: Option<NaiveTime>,
    pub check_out_time: Option<NaiveTime>,
    pub remarks: Option<String>,
    pub created_at: i64,
}

/// Create attendance payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceCreate {
    pub employee_id: i64,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub check_in_time: Option<NaiveTime>,
    pub check_out_time: Option<NaiveTime>,
    pub remarks: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serde_names() {
        assert_eq!(
            serde_json::to_string(&AttendanceStatus::Present).unwrap(),
            "\"Present\""
        );
        let status: AttendanceStatus = serde_json::from_str("\"Absent\"").unwrap();
        assert_eq!(status, AttendanceStatus::Absent);
    }
}
