//! 健康检查路由
//!
//! # 路由列表
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | / | GET | 健康检查 |
//! | /health | GET | 健康检查 |
//!
//! 数据库不可用时仍返回 200，状态在响应体中体现：
//!
//! ```json
//! { "status": "db error", "database": "down (pool timed out)" }
//! ```

use axum::{Json, Router, extract::State, routing::get};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::db;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", get(health))
        .route("/health", get(health))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// ok | db error
    pub status: String,
    /// up | down (<reason>)
    pub database: String,
}

pub async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    let response = match db::ping(&state.pool).await {
        Ok(()) => HealthResponse {
            status: "ok".into(),
            database: "up".into(),
        },
        Err(e) => {
            tracing::warn!(error = %e, "Database health probe failed");
            HealthResponse {
                status: "db error".into(),
                database: format!("down ({e})"),
            }
        }
    };
    Json(response)
}
