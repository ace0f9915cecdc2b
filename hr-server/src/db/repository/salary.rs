//! Salary Repository

use super::RepoResult;
use shared::models::{PaymentMethod, SalaryCreate};
use sqlx::{Executor, Sqlite, SqlitePool};

/// Salary row with the owning employee's name, when it resolves
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SalaryWithEmployee {
    pub id: i64,
    pub employee_id: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub base_salary: f64,
    pub bonus: f64,
    pub deductions: f64,
    pub payment_method: PaymentMethod,
}

impl SalaryWithEmployee {
    /// Owner's full name; `None` for an orphaned row
    pub fn employee_name(&self) -> Option<String> {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => Some(format!("{first} {last}")),
            _ => None,
        }
    }
}

/// Every salary row left-joined to its employee, ordered by id
pub async fn all_with_employee(pool: &SqlitePool) -> RepoResult<Vec<SalaryWithEmployee>> {
    let rows = sqlx::query_as::<_, SalaryWithEmployee>(
        "SELECT s.id, s.employee_id, e.first_name, e.last_name, \
            s.base_salary, s.bonus, s.deductions, s.payment_method \
         FROM salary s LEFT JOIN employee e ON e.id = s.employee_id \
         ORDER BY s.id",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn count(pool: &SqlitePool) -> RepoResult<i64> {
    let n = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM salary")
        .fetch_one(pool)
        .await?;
    Ok(n)
}

pub async fn insert<'e, E>(executor: E, data: &SalaryCreate) -> RepoResult<i64>
where
    E: Executor<'e, Database = Sqlite>,
{
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO salary (employee_id, base_salary, bonus, deductions, payment_date, payment_method) \
         VALUES (?, ?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(data.employee_id)
    .bind(data.base_salary)
    .bind(data.bonus)
    .bind(data.deductions)
    .bind(data.payment_date)
    .bind(data.payment_method)
    .fetch_one(executor)
    .await?;
    Ok(id)
}

pub async fn purge<'e, E>(executor: E) -> RepoResult<u64>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query("DELETE FROM salary").execute(executor).await?;
    Ok(result.rows_affected())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::test_support;
    use chrono::NaiveDate;

    #[tokio::test]
    async fn test_payment_method_round_trip_and_orphans() {
        let pool = test_support::pool().await;
        let emp: i64 = sqlx::query_scalar(
            "INSERT INTO employee (first_name, last_name, email) VALUES ('Ana', 'Diaz', 'ana@example.com') RETURNING id",
        )
        .fetch_one(&pool)
        .await
        .unwrap();

        insert(
            &pool,
            &SalaryCreate {
                employee_id: emp,
                base_salary: 61234.567,
                bonus: 7000.0,
                deductions: 1500.25,
                payment_date: NaiveDate::from_ymd_opt(2024, 5, 28).unwrap(),
                payment_method: PaymentMethod::BankTransfer,
            },
        )
        .await
        .unwrap();

        let stored: String = sqlx::query_scalar("SELECT payment_method FROM salary")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(stored, "Bank Transfer");

        let rows = test_support::salaries_for(&pool, emp).await;
        assert_eq!(rows[0].payment_method, PaymentMethod::BankTransfer);

        // NULL employee reference
        sqlx::query("INSERT INTO salary (employee_id, base_salary, bonus, deductions, payment_date, payment_method) VALUES (NULL, 1, 1, 1, '2024-05-01', 'Cheque')")
            .execute(&pool)
            .await
            .unwrap();

        let joined = all_with_employee(&pool).await.unwrap();
        assert_eq!(joined.len(), 2);
        assert_eq!(joined[0].employee_name().as_deref(), Some("Ana Diaz"));
        assert_eq!(joined[1].employee_name(), None);
        assert_eq!(joined[1].payment_method, PaymentMethod::Cheque);
        assert_eq!(count(&pool).await.unwrap(), 2);
    }
}
