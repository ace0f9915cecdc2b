//! Reports API Handlers

use std::collections::BTreeMap;

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};
use shared::models::{AttendanceCounts, Performance, SalaryBreakdown, SystemSummary};

/// GET /attendance-rate
pub async fn attendance_rate(
    State(state): State<ServerState>,
) -> AppResult<Json<BTreeMap<String, AttendanceCounts>>> {
    Ok(Json(state.reports.attendance_rate().await?))
}

/// GET /salary-summary
pub async fn salary_summary(
    State(state): State<ServerState>,
) -> AppResult<Json<BTreeMap<String, SalaryBreakdown>>> {
    Ok(Json(state.reports.salary_summary().await?))
}

/// GET /performance-distribution
pub async fn performance_distribution(
    State(state): State<ServerState>,
) -> AppResult<Json<BTreeMap<i64, i64>>> {
    Ok(Json(state.reports.performance_distribution().await?))
}

/// GET /performance/{employee_id} - 最近一次绩效评估
pub async fn employee_performance(
    State(state): State<ServerState>,
    Path(employee_id): Path<String>,
) -> AppResult<Json<Performance>> {
    let id: i64 = employee_id.trim().parse().map_err(|_| {
        AppError::invalid_request(format!("Invalid employee id: {employee_id}"))
            .with_detail("employee_id", employee_id.clone())
    })?;
    Ok(Json(state.reports.employee_performance(id).await?))
}

/// GET /summary
pub async fn summary(State(state): State<ServerState>) -> AppResult<Json<SystemSummary>> {
    Ok(Json(state.reports.system_summary().await?))
}
