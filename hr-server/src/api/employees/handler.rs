//! Employee API Handlers

use axum::{
    Json,
    extract::{Query, State},
};

use crate::core::ServerState;
use crate::reports::EmployeeQuery;
use crate::utils::AppResult;
use shared::models::EmployeePage;

/// GET /employees - 分页员工列表
///
/// 非法的 page / limit / department_id 回退为默认值
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<EmployeeQuery>,
) -> AppResult<Json<EmployeePage>> {
    let page = state.reports.list_employees(&query).await?;
    Ok(Json(page))
}
