//! Reports API 模块 (聚合统计)

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/attendance-rate", get(handler::attendance_rate))
        .route("/salary-summary", get(handler::salary_summary))
        .route(
            "/performance-distribution",
            get(handler::performance_distribution),
        )
        .route("/performance/{employee_id}", get(handler::employee_performance))
        .route("/summary", get(handler::summary))
}
