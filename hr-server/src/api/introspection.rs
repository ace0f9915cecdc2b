//! Route introspection
//!
//! [`ENDPOINTS`] is the single list of public endpoints. `/routes` serves it
//! and the integration tests check the router against it.

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::core::ServerState;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Endpoint {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
}

const fn get_endpoint(path: &'static str, description: &'static str) -> Endpoint {
    Endpoint {
        method: "GET",
        path,
        description,
    }
}

pub const ENDPOINTS: &[Endpoint] = &[
    get_endpoint("/", "Liveness and database connectivity check"),
    get_endpoint("/health", "Liveness and database connectivity check"),
    get_endpoint("/routes", "List registered endpoints"),
    get_endpoint(
        "/generate-data",
        "Populate the synthetic dataset (reset=true|false)",
    ),
    get_endpoint(
        "/employees",
        "Paginated employee listing (page, limit, department_id)",
    ),
    get_endpoint("/departments", "All departments"),
    get_endpoint("/attendance-rate", "Present/absent counts per employee"),
    get_endpoint("/salary-summary", "Salary breakdown per employee"),
    get_endpoint("/performance-distribution", "Rating histogram 1-5"),
    get_endpoint(
        "/performance/{employee_id}",
        "Most recent performance review of an employee",
    ),
    get_endpoint("/summary", "Cross-entity summary"),
    get_endpoint("/dashboard", "HTML dashboard"),
];

pub fn router() -> Router<ServerState> {
    Router::new().route("/routes", get(list_routes))
}

pub async fn list_routes() -> Json<&'static [Endpoint]> {
    Json(ENDPOINTS)
}
