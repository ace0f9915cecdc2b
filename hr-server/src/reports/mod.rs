//! Report Service - read-only aggregations over the HR records
//!
//! Every operation is a pure read. Rows that break expectations the schema
//! does not enforce are handled by [`IntegrityPolicies`].

mod pagination;
mod policy;

pub use pagination::{DEFAULT_LIMIT, DEFAULT_PAGE, EmployeeQuery, MAX_LIMIT, PageRequest};
pub use policy::{IntegrityPolicies, IntegrityPolicy, UnknownPolicy};

use crate::db::repository::{attendance, department, employee, performance, salary};
use crate::utils::{AppError, AppResult};
use shared::models::{
    AttendanceCounts, DepartmentInfo, EmployeePage, MAX_RATING, MIN_RATING, Performance,
    SalaryBreakdown, SystemSummary, is_valid_rating,
};
use shared::util::round2;
use sqlx::SqlitePool;
use std::collections::BTreeMap;

/// Insert under `key`, or under `"key #<row_id>"` when `key` is taken
fn insert_unique<V>(map: &mut BTreeMap<String, V>, key: String, row_id: i64, value: V) {
    if map.contains_key(&key) {
        map.insert(format!("{key} #{row_id}"), value);
    } else {
        map.insert(key, value);
    }
}

#[derive(Clone)]
pub struct ReportService {
    pool: SqlitePool,
    policies: IntegrityPolicies,
}

impl ReportService {
    pub fn new(pool: SqlitePool, policies: IntegrityPolicies) -> Self {
        Self { pool, policies }
    }

    /// Paginated employee listing, optionally filtered by department
    pub async fn list_employees(&self, query: &EmployeeQuery) -> AppResult<EmployeePage> {
        let req = PageRequest::from(query);
        let total = employee::count_filtered(&self.pool, req.department_id).await?;
        let data =
            employee::find_page(&self.pool, req.department_id, req.limit, req.offset()).await?;

        Ok(EmployeePage {
            total,
            page: req.page,
            limit: req.limit,
            data,
        })
    }

    pub async fn list_departments(&self) -> AppResult<Vec<DepartmentInfo>> {
        Ok(department::list_info(&self.pool).await?)
    }

    /// Present/absent counts keyed by employee full name
    pub async fn attendance_rate(&self) -> AppResult<BTreeMap<String, AttendanceCounts>> {
        let rows = attendance::counts_by_employee(&self.pool).await?;
        let mut rates = BTreeMap::new();
        for row in rows {
            insert_unique(
                &mut rates,
                format!("{} {}", row.first_name, row.last_name),
                row.employee_id,
                AttendanceCounts {
                    present: row.present,
                    absent: row.absent,
                },
            );
        }
        Ok(rates)
    }

    /// Salary figures keyed by the owning employee's full name
    pub async fn salary_summary(&self) -> AppResult<BTreeMap<String, SalaryBreakdown>> {
        let rows = salary::all_with_employee(&self.pool).await?;
        let mut summary = BTreeMap::new();
        for row in rows {
            let Some(name) = row.employee_name() else {
                if self.policies.orphan.is_strict() {
                    return Err(AppError::data_integrity(format!(
                        "Salary record {} references no existing employee",
                        row.id
                    ))
                    .with_detail("salary_id", row.id)
                    .with_detail("employee_id", row.employee_id));
                }
                tracing::warn!(
                    salary_id = row.id,
                    employee_id = ?row.employee_id,
                    "Skipping orphaned salary record"
                );
                continue;
            };

            insert_unique(
                &mut summary,
                name,
                row.id,
                SalaryBreakdown {
                    base_salary: round2(row.base_salary),
                    bonus: round2(row.bonus),
                    deductions: round2(row.deductions),
                },
            );
        }
        Ok(summary)
    }

    /// Ratings accepted by the rating policy
    async fn accepted_ratings(&self) -> AppResult<Vec<i64>> {
        let rows = performance::all_ratings(&self.pool).await?;
        let mut accepted = Vec::with_capacity(rows.len());
        for (id, rating) in rows {
            if is_valid_rating(rating) {
                accepted.push(rating);
            } else if self.policies.rating.is_strict() {
                return Err(AppError::data_integrity(format!(
                    "Performance record {id} has rating {rating} outside [{MIN_RATING}, {MAX_RATING}]"
                ))
                .with_detail("performance_id", id)
                .with_detail("rating", rating));
            } else {
                tracing::debug!(performance_id = id, rating, "Ignoring out-of-range rating");
            }
        }
        Ok(accepted)
    }

    /// Histogram of ratings 1..=5, every bucket present
    pub async fn performance_distribution(&self) -> AppResult<BTreeMap<i64, i64>> {
        let mut distribution: BTreeMap<i64, i64> =
            (MIN_RATING..=MAX_RATING).map(|r| (r, 0)).collect();
        for rating in self.accepted_ratings().await? {
            *distribution.entry(rating).or_insert(0) += 1;
        }
        Ok(distribution)
    }

    pub async fn system_summary(&self) -> AppResult<SystemSummary> {
        let total_employees = employee::count(&self.pool).await?;

        let mut departments = BTreeMap::new();
        for (id, name, n) in department::employee_counts(&self.pool).await? {
            insert_unique(&mut departments, name, id, n);
        }

        let ratings = self.accepted_ratings().await?;
        let average_performance_rating = if ratings.is_empty() {
            0.0
        } else {
            round2(ratings.iter().sum::<i64>() as f64 / ratings.len() as f64)
        };

        let attendance = attendance::status_totals(&self.pool).await?;

        Ok(SystemSummary {
            total_employees,
            departments,
            average_performance_rating,
            attendance,
        })
    }

    /// Most recent performance review of one employee
    pub async fn employee_performance(&self, employee_id: i64) -> AppResult<Performance> {
        if !employee::exists(&self.pool, employee_id).await? {
            return Err(AppError::employee_not_found(employee_id));
        }
        performance::find_latest_for_employee(&self.pool, employee_id)
            .await?
            .ok_or_else(|| AppError::performance_not_found(employee_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::test_support;
    use shared::error::ErrorCode;

    async fn seed(pool: &SqlitePool) -> (i64, i64) {
        let dept: i64 = sqlx::query_scalar(
            "INSERT INTO department (name, location, manager) VALUES ('Engineering', 'Berlin', 'Lin Wu') RETURNING id",
        )
        .fetch_one(pool)
        .await
        .unwrap();
        sqlx::query("INSERT INTO department (name) VALUES ('Legal')")
            .execute(pool)
            .await
            .unwrap();

        let a: i64 = sqlx::query_scalar(
            "INSERT INTO employee (first_name, last_name, email, department_id) VALUES ('Jo', 'Ng', 'jo@example.com', ?) RETURNING id",
        )
        .bind(dept)
        .fetch_one(pool)
        .await
        .unwrap();
        let b: i64 = sqlx::query_scalar(
            "INSERT INTO employee (first_name, last_name, email, department_id) VALUES ('Jo', 'Ng', 'jo2@example.com', ?) RETURNING id",
        )
        .bind(dept)
        .fetch_one(pool)
        .await
        .unwrap();

        for (emp, status) in [(a, "Present"), (a, "Absent"), (a, "Present"), (b, "Absent")] {
            sqlx::query("INSERT INTO attendance (employee_id, date, status) VALUES (?, '2024-05-01', ?)")
                .bind(emp)
                .bind(status)
                .execute(pool)
                .await
                .unwrap();
        }
        (a, b)
    }

    async fn add_review(pool: &SqlitePool, emp: i64, date: &str, rating: i64) {
        sqlx::query("INSERT INTO performance (employee_id, review_date, reviewer, rating) VALUES (?, ?, 'Rev', ?)")
            .bind(emp)
            .bind(date)
            .bind(rating)
            .execute(pool)
            .await
            .unwrap();
    }

    fn service(pool: SqlitePool, rating: IntegrityPolicy, orphan: IntegrityPolicy) -> ReportService {
        ReportService::new(pool, IntegrityPolicies { rating, orphan })
    }

    #[tokio::test]
    async fn test_list_employees_pagination() {
        let pool = test_support::pool().await;
        seed(&pool).await;
        let svc = ReportService::new(pool, IntegrityPolicies::default());

        let page = svc
            .list_employees(&EmployeeQuery {
                limit: Some("1".into()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!((page.total, page.page, page.limit, page.data.len()), (2, 1, 1, 1));
        assert_eq!(page.data[0].department, "Engineering");

        let page = svc
            .list_employees(&EmployeeQuery {
                page: Some("9".into()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(page.total, 2);
        assert!(page.data.is_empty());

        let page = svc
            .list_employees(&EmployeeQuery {
                department_id: Some("999".into()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(page.total, 0);
    }

    #[tokio::test]
    async fn test_attendance_rate_keeps_homonyms() {
        let pool = test_support::pool().await;
        let (_, b) = seed(&pool).await;
        let svc = ReportService::new(pool, IntegrityPolicies::default());

        let rates = svc.attendance_rate().await.unwrap();
        assert_eq!(rates.len(), 2);
        assert_eq!(rates["Jo Ng"], AttendanceCounts { present: 2, absent: 1 });
        assert_eq!(rates[&format!("Jo Ng #{b}")], AttendanceCounts { present: 0, absent: 1 });
    }

    #[tokio::test]
    async fn test_distribution_and_summary_tolerant() {
        let pool = test_support::pool().await;
        let (a, b) = seed(&pool).await;
        add_review(&pool, a, "2024-01-01", 4).await;
        add_review(&pool, b, "2024-01-01", 3).await;
        add_review(&pool, b, "2024-02-01", 9).await;
        let svc = service(pool, IntegrityPolicy::Tolerant, IntegrityPolicy::Strict);

        let dist = svc.performance_distribution().await.unwrap();
        assert_eq!(dist.keys().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
        assert_eq!(dist.values().sum::<i64>(), 2);
        assert_eq!(dist[&4], 1);

        let summary = svc.system_summary().await.unwrap();
        assert_eq!(summary.total_employees, 2);
        assert_eq!(summary.departments["Engineering"], 2);
        assert_eq!(summary.departments["Legal"], 0);
        assert_eq!(summary.average_performance_rating, 3.5);
        assert_eq!(summary.attendance, AttendanceCounts { present: 2, absent: 2 });
    }

    #[tokio::test]
    async fn test_strict_rating_policy_fails() {
        let pool = test_support::pool().await;
        let (a, _) = seed(&pool).await;
        add_review(&pool, a, "2024-01-01", 0).await;
        let svc = service(pool, IntegrityPolicy::Strict, IntegrityPolicy::Strict);

        let err = svc.performance_distribution().await.unwrap_err();
        assert_eq!(err.code, ErrorCode::DataIntegrity);
        assert_eq!(svc.system_summary().await.unwrap_err().code, ErrorCode::DataIntegrity);
    }

    #[tokio::test]
    async fn test_summary_without_reviews() {
        let pool = test_support::pool().await;
        let svc = ReportService::new(pool, IntegrityPolicies::default());
        let summary = svc.system_summary().await.unwrap();
        assert_eq!(summary.total_employees, 0);
        assert_eq!(summary.average_performance_rating, 0.0);
        assert!(summary.departments.is_empty());
    }

    #[tokio::test]
    async fn test_salary_summary_orphan_policies() {
        let pool = test_support::pool().await;
        let (a, _) = seed(&pool).await;
        sqlx::query("INSERT INTO salary (employee_id, base_salary, bonus, deductions, payment_date, payment_method) VALUES (?, 70000.456, 8000.004, 2500.5, '2024-05-01', 'Cheque')")
            .bind(a)
            .execute(&pool)
            .await
            .unwrap();
        sqlx::query("INSERT INTO salary (employee_id, base_salary, bonus, deductions, payment_date, payment_method) VALUES (NULL, 1, 1, 1, '2024-05-01', 'Cheque')")
            .execute(&pool)
            .await
            .unwrap();

        let strict = service(pool.clone(), IntegrityPolicy::Tolerant, IntegrityPolicy::Strict);
        let err = strict.salary_summary().await.unwrap_err();
        assert_eq!(err.code, ErrorCode::DataIntegrity);

        let tolerant = service(pool, IntegrityPolicy::Tolerant, IntegrityPolicy::Tolerant);
        let summary = tolerant.salary_summary().await.unwrap();
        assert_eq!(summary.len(), 1);
        assert_eq!(
            summary["Jo Ng"],
            SalaryBreakdown {
                base_salary: 70000.46,
                bonus: 8000.0,
                deductions: 2500.5
            }
        );
    }

    #[tokio::test]
    async fn test_employee_performance() {
        let pool = test_support::pool().await;
        let (a, b) = seed(&pool).await;
        add_review(&pool, a, "2024-01-01", 2).await;
        add_review(&pool, a, "2024-06-01", 5).await;
        let svc = ReportService::new(pool, IntegrityPolicies::default());

        let review = svc.employee_performance(a).await.unwrap();
        assert_eq!(review.rating, 5);
        assert_eq!(review.employee_id, Some(a));

        let err = svc.employee_performance(b).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::PerformanceNotFound);

        let err = svc.employee_performance(4242).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::EmployeeNotFound);
    }
}
