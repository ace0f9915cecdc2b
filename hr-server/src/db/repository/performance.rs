//! Performance Repository

use super::RepoResult;
use shared::models::{Performance, PerformanceCreate};
use sqlx::{Executor, Sqlite, SqlitePool};

/// Most recent review for an employee (latest review date, then highest id)
pub async fn find_latest_for_employee(
    pool: &SqlitePool,
    employee_id: i64,
) -> RepoResult<Option<Performance>> {
    let review = sqlx::query_as::<_, Performance>(
        "SELECT id, employee_id, review_date, reviewer, rating, comments, created_at \
         FROM performance WHERE employee_id = ? \
         ORDER BY review_date DESC, id DESC LIMIT 1",
    )
    .bind(employee_id)
    .fetch_optional(pool)
    .await?;
    Ok(review)
}

/// `(row id, rating)` for every review, ordered by id
pub async fn all_ratings(pool: &SqlitePool) -> RepoResult<Vec<(i64, i64)>> {
    let rows = sqlx::query_as::<_, (i64, i64)>("SELECT id, rating FROM performance ORDER BY id")
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn count(pool: &SqlitePool) -> RepoResult<i64> {
    let n = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM performance")
        .fetch_one(pool)
        .await?;
    Ok(n)
}

pub async fn insert<'e, E>(executor: E, data: &PerformanceCreate) -> RepoResult<i64>
where
    E: Executor<'e, Database = Sqlite>,
{
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO performance (employee_id, review_date, reviewer, rating, comments) \
         VALUES (?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(data.employee_id)
    .bind(data.review_date)
    .bind(&data.reviewer)
    .bind(data.rating)
    .bind(&data.comments)
    .fetch_one(executor)
    .await?;
    Ok(id)
}

pub async fn purge<'e, E>(executor: E) -> RepoResult<u64>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query("DELETE FROM performance").execute(executor).await?;
    Ok(result.rows_affected())
}
