//! Attendance Repository

use super::RepoResult;
use shared::models::{AttendanceCounts, AttendanceCreate, AttendanceStatus};
use sqlx::{Executor, Sqlite, SqlitePool};

/// Per-employee present/absent tallies
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct EmployeeAttendance {
    pub employee_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub present: i64,
    pub absent: i64,
}

pub async fn count(pool: &SqlitePool) -> RepoResult<i64> {
    let n = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM attendance")
        .fetch_one(pool)
        .await?;
    Ok(n)
}

/// Every employee with their present/absent counts, zero when they have no rows
pub async fn counts_by_employee(pool: &SqlitePool) -> RepoResult<Vec<EmployeeAttendance>> {
    let rows = sqlx::query_as::<_, EmployeeAttendance>(
        "SELECT e.id AS employee_id, e.first_name, e.last_name, \
            COALESCE(SUM(CASE WHEN a.status = ?1 THEN 1 ELSE 0 END), 0) AS present, \
            COALESCE(SUM(CASE WHEN a.status = ?2 THEN 1 ELSE 0 END), 0) AS absent \
         FROM employee e LEFT JOIN attendance a ON a.employee_id = e.id \
         GROUP BY e.id, e.first_name, e.last_name ORDER BY e.id",
    )
    .bind(AttendanceStatus::Present)
    .bind(AttendanceStatus::Absent)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Present/absent totals across all employees
pub async fn status_totals(pool: &SqlitePool) -> RepoResult<AttendanceCounts> {
    let rows = sqlx::query_as::<_, (AttendanceStatus, i64)>(
        "SELECT status, COUNT(*) FROM attendance WHERE status IN (?1, ?2) GROUP BY status",
    )
    .bind(AttendanceStatus::Present)
    .bind(AttendanceStatus::Absent)
    .fetch_all(pool)
    .await?;

    let mut totals = AttendanceCounts::default();
    for (status, n) in rows {
        match status {
            AttendanceStatus::Present => totals.present = n,
            AttendanceStatus::Absent => totals.absent = n,
        }
    }
    Ok(totals)
}

pub async fn insert<'e, E>(executor: E, data: &AttendanceCreate) -> RepoResult<i64>
where
    E: Executor<'e, Database = Sqlite>,
{
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO attendance (employee_id, date, status, check_in_time, check_out_time, remarks) \
         VALUES (?, ?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(data.employee_id)
    .bind(data.date)
    .bind(data.status)
    .bind(data.check_in_time)
    .bind(data.check_out_time)
    .bind(&data.remarks)
    .fetch_one(executor)
    .await?;
    Ok(id)
}

pub async fn purge<'e, E>(executor: E) -> RepoResult<u64>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query("DELETE FROM attendance").execute(executor).await?;
    Ok(result.rows_affected())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::test_support;
    use chrono::{NaiveDate, NaiveTime};

    async fn employee(pool: &SqlitePool, email: &str) -> i64 {
        sqlx::query_scalar("INSERT INTO employee (first_name, last_name, email) VALUES ('Sam', 'Lee', ?) RETURNING id")
            .bind(email)
            .fetch_one(pool)
            .await
            .unwrap()
    }

    fn row(employee_id: i64, day: u32, status: AttendanceStatus) -> AttendanceCreate {
        AttendanceCreate {
            employee_id,
            date: NaiveDate::from_ymd_opt(2024, 5, day).unwrap(),
            status,
            check_in_time: NaiveTime::from_hms_opt(9, 0, 0),
            check_out_time: NaiveTime::from_hms_opt(17, 30, 0),
            remarks: None,
        }
    }

    #[tokio::test]
    async fn test_insert_and_read_back() {
        let pool = test_support::pool().await;
        let emp = employee(&pool, "sam@example.com").await;
        insert(&pool, &row(emp, 1, AttendanceStatus::Present)).await.unwrap();

        let rows = test_support::attendance_for(&pool, emp).await;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].status, AttendanceStatus::Present);
        assert_eq!(rows[0].check_out_time, NaiveTime::from_hms_opt(17, 30, 0));
    }

    #[tokio::test]
    async fn test_counts_by_employee_includes_zero_rows() {
        let pool = test_support::pool().await;
        let a = employee(&pool, "a@example.com").await;
        let b = employee(&pool, "b@example.com").await;
        insert(&pool, &row(a, 1, AttendanceStatus::Present)).await.unwrap();
        insert(&pool, &row(a, 2, AttendanceStatus::Absent)).await.unwrap();
        // duplicate day is allowed
        insert(&pool, &row(a, 2, AttendanceStatus::Present)).await.unwrap();

        let counts = counts_by_employee(&pool).await.unwrap();
        assert_eq!(counts.len(), 2);
        assert_eq!((counts[0].employee_id, counts[0].present, counts[0].absent), (a, 2, 1));
        assert_eq!((counts[1].employee_id, counts[1].present, counts[1].absent), (b, 0, 0));

        let totals = status_totals(&pool).await.unwrap();
        assert_eq!(totals, AttendanceCounts { present: 2, absent: 1 });
        assert_eq!(totals.total(), count(&pool).await.unwrap());
    }
}
