//! Department API Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::utils::AppResult;
use shared::models::DepartmentInfo;

/// GET /departments - 所有部门 (不分页)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<DepartmentInfo>>> {
    let departments = state.reports.list_departments().await?;
    Ok(Json(departments))
}
