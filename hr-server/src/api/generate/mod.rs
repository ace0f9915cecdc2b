//! Synthetic data API Module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/generate-data", get(handler::generate_data))
}
