//! Department Repository

use super::RepoResult;
use shared::models::{DepartmentCreate, DepartmentInfo};
use sqlx::{Executor, Sqlite, SqlitePool};

/// Listing without timestamps, ordered by id
pub async fn list_info(pool: &SqlitePool) -> RepoResult<Vec<DepartmentInfo>> {
    let departments = sqlx::query_as::<_, DepartmentInfo>(
        "SELECT id, name, location, manager FROM department ORDER BY id",
    )
    .fetch_all(pool)
    .await?;
    Ok(departments)
}

pub async fn count(pool: &SqlitePool) -> RepoResult<i64> {
    let n = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM department")
        .fetch_one(pool)
        .await?;
    Ok(n)
}

/// `(id, name, employee count)` for every department, zero counts included
pub async fn employee_counts(pool: &SqlitePool) -> RepoResult<Vec<(i64, String, i64)>> {
    let rows = sqlx::query_as::<_, (i64, String, i64)>(
        "SELECT d.id, d.name, COUNT(e.id) FROM department d \
         LEFT JOIN employee e ON e.department_id = d.id \
         GROUP BY d.id, d.name ORDER BY d.id",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Insert a department and return its id
pub async fn insert<'e, E>(executor: E, data: &DepartmentCreate) -> RepoResult<i64>
where
    E: Executor<'e, Database = Sqlite>,
{
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO department (name, location, manager) VALUES (?, ?, ?) RETURNING id",
    )
    .bind(&data.name)
    .bind(&data.location)
    .bind(&data.manager)
    .fetch_one(executor)
    .await?;
    Ok(id)
}

/// Delete every department
pub async fn purge<'e, E>(executor: E) -> RepoResult<u64>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query("DELETE FROM department").execute(executor).await?;
    Ok(result.rows_affected())
}
