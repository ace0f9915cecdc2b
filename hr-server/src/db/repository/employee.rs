//! Employee Repository

use super::RepoResult;
use shared::models::{EmployeeCreate, EmployeeSummary};
use sqlx::{Executor, Sqlite, SqlitePool};

pub async fn exists(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let found = sqlx::query_scalar::<_, i64>("SELECT 1 FROM employee WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(found.is_some())
}

pub async fn count(pool: &SqlitePool) -> RepoResult<i64> {
    let n = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM employee")
        .fetch_one(pool)
        .await?;
    Ok(n)
}

/// Count employees, optionally restricted to one department
pub async fn count_filtered(pool: &SqlitePool, department_id: Option<i64>) -> RepoResult<i64> {
    let n = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM employee WHERE (?1 IS NULL OR department_id = ?1)",
    )
    .bind(department_id)
    .fetch_one(pool)
    .await?;
    Ok(n)
}

/// One page of employee summaries ordered by id
///
/// `department` is the joined department name, empty when unassigned.
pub async fn find_page(
    pool: &SqlitePool,
    department_id: Option<i64>,
    limit: i64,
    offset: i64,
) -> RepoResult<Vec<EmployeeSummary>> {
    let rows = sqlx::query_as::<_, EmployeeSummary>(
        "SELECT e.id, e.first_name, e.last_name, e.email, COALESCE(d.name, '') AS department \
         FROM employee e LEFT JOIN department d ON d.id = e.department_id \
         WHERE (?1 IS NULL OR e.department_id = ?1) \
         ORDER BY e.id LIMIT ?2 OFFSET ?3",
    )
    .bind(department_id)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Insert an employee and return its id
pub async fn insert<'e, E>(executor: E, data: &EmployeeCreate) -> RepoResult<i64>
where
    E: Executor<'e, Database = Sqlite>,
{
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO employee (first_name, last_name, email, phone, date_of_birth, date_joined, department_id) \
         VALUES (?, ?, ?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(&data.first_name)
    .bind(&data.last_name)
    .bind(&data.email)
    .bind(&data.phone)
    .bind(data.date_of_birth)
    .bind(data.date_joined)
    .bind(data.department_id)
    .fetch_one(executor)
    .await?;
    Ok(id)
}

/// Delete every employee
pub async fn purge<'e, E>(executor: E) -> RepoResult<u64>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query("DELETE FROM employee").execute(executor).await?;
    Ok(result.rows_affected())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::{RepoError, department, test_support};
    use chrono::NaiveDate;
    use shared::models::DepartmentCreate;

    fn create(first: &str, email: &str, department_id: Option<i64>) -> EmployeeCreate {
        EmployeeCreate {
            first_name: first.into(),
            last_name: "Smith".into(),
            email: email.into(),
            phone: Some("555-0100".into()),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 31),
            date_joined: NaiveDate::from_ymd_opt(2022, 6, 1),
            department_id,
        }
    }

    async fn dept(pool: &SqlitePool, name: &str) -> i64 {
        department::insert(
            pool,
            &DepartmentCreate {
                name: name.into(),
                location: None,
                manager: None,
            },
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_insert_round_trips_dates() {
        let pool = test_support::pool().await;
        let hr = dept(&pool, "HR").await;
        let id = insert(&pool, &create("Jane", "jane@example.com", Some(hr)))
            .await
            .unwrap();

        let e = test_support::employee(&pool, id).await.unwrap();
        assert_eq!(e.full_name(), "Jane Smith");
        assert_eq!(e.date_of_birth, NaiveDate::from_ymd_opt(1990, 1, 31));
        assert_eq!(e.department_id, Some(hr));
        assert!(exists(&pool, id).await.unwrap());
        assert!(!exists(&pool, id + 1).await.unwrap());
    }

    #[tokio::test]
    async fn test_duplicate_email() {
        let pool = test_support::pool().await;
        insert(&pool, &create("Jane", "jane@example.com", None))
            .await
            .unwrap();
        let err = insert(&pool, &create("Joan", "jane@example.com", None))
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)));
    }

    #[tokio::test]
    async fn test_page_and_filter() {
        let pool = test_support::pool().await;
        let hr = dept(&pool, "HR").await;
        let it = dept(&pool, "IT").await;
        insert(&pool, &create("A", "a@example.com", Some(hr))).await.unwrap();
        insert(&pool, &create("B", "b@example.com", Some(it))).await.unwrap();
        insert(&pool, &create("C", "c@example.com", None)).await.unwrap();

        assert_eq!(count_filtered(&pool, None).await.unwrap(), 3);
        assert_eq!(count_filtered(&pool, Some(it)).await.unwrap(), 1);

        let page = find_page(&pool, None, 2, 0).await.unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].first_name, "A");
        assert_eq!(page[0].department, "HR");

        let page = find_page(&pool, None, 2, 2).await.unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].department, "");

        let page = find_page(&pool, Some(it), 10, 0).await.unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].email, "b@example.com");

        assert!(find_page(&pool, None, 10, 30).await.unwrap().is_empty());
    }
}
