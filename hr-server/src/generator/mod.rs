//! Synthetic dataset generator
//!
//! [`plan::DatasetPlan`] draws the random values, [`write_plan`] persists
//! them. The write runs in one transaction and runs are serialized by the
//! caller-provided lock, so readers see either the old or the new dataset.

pub mod plan;

pub use plan::DatasetPlan;

use crate::db::repository::{RepoError, attendance, department, employee, performance, salary};
use crate::utils::{AppError, AppResult, ErrorCode};
use sqlx::SqlitePool;
use tokio::sync::Mutex;

/// Whether existing rows are purged before inserting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateMode {
    /// Insert on top of the current data
    Append,
    /// Delete everything first (child tables before parents)
    Replace,
}

impl GenerateMode {
    pub fn from_reset(reset: bool) -> Self {
        if reset { Self::Replace } else { Self::Append }
    }
}

/// Rows written by one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateStats {
    pub purged: u64,
    pub departments: usize,
    pub employees: usize,
    pub attendance: usize,
    pub performance: usize,
    pub salary: usize,
}

/// Map a unique violation to a domain code, everything else to `GeneratorFailed`
fn generator_error(duplicate_code: ErrorCode) -> impl Fn(RepoError) -> AppError {
    move |err| match err {
        RepoError::Duplicate(msg) => AppError::with_message(duplicate_code, msg),
        other => AppError::with_message(
            ErrorCode::GeneratorFailed,
            format!("Data generation failed: {other}"),
        ),
    }
}

/// Plan a fresh dataset for today and write it
pub async fn generate(
    pool: &SqlitePool,
    lock: &Mutex<()>,
    mode: GenerateMode,
) -> AppResult<GenerateStats> {
    let plan = {
        let mut rng = rand::thread_rng();
        DatasetPlan::build(&mut rng, chrono::Local::now().date_naive())
    };
    write_plan(pool, lock, &plan, mode).await
}

/// Persist a plan atomically
///
/// Departments go in first and their ids are captured, then employees, then
/// the attendance/performance/salary rows that reference them.
pub async fn write_plan(
    pool: &SqlitePool,
    lock: &Mutex<()>,
    plan: &DatasetPlan,
    mode: GenerateMode,
) -> AppResult<GenerateStats> {
    let _guard = lock.lock().await;
    let failed = generator_error(ErrorCode::InternalError);

    let mut tx = pool.begin().await.map_err(|e| failed(e.into()))?;
    let mut stats = GenerateStats::default();

    if mode == GenerateMode::Replace {
        stats.purged += salary::purge(&mut *tx).await.map_err(&failed)?;
        stats.purged += attendance::purge(&mut *tx).await.map_err(&failed)?;
        stats.purged += performance::purge(&mut *tx).await.map_err(&failed)?;
        stats.purged += employee::purge(&mut *tx).await.map_err(&failed)?;
        stats.purged += department::purge(&mut *tx).await.map_err(&failed)?;
        tracing::debug!(rows = stats.purged, "Existing records purged");
    }

    let mut department_ids = Vec::with_capacity(plan.departments.len());
    for dept in &plan.departments {
        let id = department::insert(&mut *tx, dept)
            .await
            .map_err(generator_error(ErrorCode::DepartmentNameExists))?;
        department_ids.push(id);
    }
    stats.departments = department_ids.len();

    for planned in &plan.employees {
        let department_id = department_ids
            .get(planned.department_index)
            .copied()
            .ok_or_else(|| {
                AppError::internal(format!(
                    "Planned department index {} out of range",
                    planned.department_index
                ))
            })?;

        let employee_id = employee::insert(&mut *tx, &planned.to_create(department_id))
            .await
            .map_err(generator_error(ErrorCode::EmployeeEmailExists))?;
        stats.employees += 1;

        for day in &planned.attendance {
            attendance::insert(&mut *tx, &day.to_create(employee_id))
                .await
                .map_err(&failed)?;
            stats.attendance += 1;
        }

        performance::insert(&mut *tx, &planned.review.to_create(employee_id))
            .await
            .map_err(&failed)?;
        stats.performance += 1;

        salary::insert(&mut *tx, &planned.salary.to_create(employee_id))
            .await
            .map_err(&failed)?;
        stats.salary += 1;
    }

    tx.commit().await.map_err(|e| failed(e.into()))?;

    tracing::info!(
        mode = ?mode,
        departments = stats.departments,
        employees = stats.employees,
        attendance = stats.attendance,
        performance = stats.performance,
        salary = stats.salary,
        "Synthetic dataset generated"
    );
    Ok(stats)
}
