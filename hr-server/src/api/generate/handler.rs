//! Synthetic data handler

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::core::config::parse_flag;
use crate::generator::{self, GenerateMode};
use crate::utils::AppResult;
use shared::models::GenerateResult;

#[derive(Debug, Default, Deserialize)]
pub struct GenerateQuery {
    /// true/false/1/0/yes/no, anything else falls back to the configured default
    pub reset: Option<String>,
}

/// GET /generate-data - (重新) 生成合成数据集
pub async fn generate_data(
    State(state): State<ServerState>,
    Query(query): Query<GenerateQuery>,
) -> AppResult<Json<GenerateResult>> {
    let reset = query
        .reset
        .as_deref()
        .and_then(parse_flag)
        .unwrap_or(state.config.generator_reset);

    generator::generate(
        &state.pool,
        &state.generator_lock,
        GenerateMode::from_reset(reset),
    )
    .await?;

    Ok(Json(GenerateResult::success(
        "Synthetic data generated successfully!",
    )))
}
