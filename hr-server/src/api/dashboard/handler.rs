//! Dashboard handler - 服务端渲染的 HTML 概览

use axum::{extract::State, response::Html};
use serde::Serialize;

use crate::core::ServerState;
use crate::core::state::DASHBOARD_TEMPLATE;
use crate::utils::{AppError, AppResult};

#[derive(Serialize)]
struct DepartmentRow {
    name: String,
    location: String,
    manager: String,
    employees: i64,
}

#[derive(Serialize)]
struct RatingBar {
    rating: i64,
    count: i64,
    /// Bar width relative to the largest bucket, 0-100
    percent: i64,
}

/// GET /dashboard
pub async fn dashboard(State(state): State<ServerState>) -> AppResult<Html<String>> {
    let summary = state.reports.system_summary().await?;
    let departments = state.reports.list_departments().await?;
    let distribution = state.reports.performance_distribution().await?;

    let rows: Vec<DepartmentRow> = departments
        .into_iter()
        .map(|d| DepartmentRow {
            employees: summary.departments.get(&d.name).copied().unwrap_or(0),
            name: d.name,
            location: d.location.unwrap_or_default(),
            manager: d.manager.unwrap_or_default(),
        })
        .collect();

    let max = distribution.values().copied().max().unwrap_or(0).max(1);
    let ratings: Vec<RatingBar> = distribution
        .iter()
        .map(|(&rating, &count)| RatingBar {
            rating,
            count,
            percent: count * 100 / max,
        })
        .collect();

    let mut context = tera::Context::new();
    context.insert("summary", &summary);
    context.insert("departments", &rows);
    context.insert("ratings", &ratings);

    let html = state
        .templates
        .render(DASHBOARD_TEMPLATE, &context)
        .map_err(|e| AppError::internal(format!("Failed to render dashboard: {e}")))?;
    Ok(Html(html))
}
