//! HR records service
//!
//! REST endpoints over a five-table SQLite schema (departments, employees,
//! attendance, performance, salary) plus a synthetic-data generator.
//!
//! # 模块结构
//!
//! - [`core`] - 配置、状态、服务器
//! - [`db`] - 连接池与仓储
//! - [`generator`] - 合成数据
//! - [`reports`] - 聚合查询
//! - [`api`] / [`routes`] - HTTP 层
//! - [`middleware`] - 请求日志、限流
//! - [`utils`] - 错误类型、日志

pub mod api;
pub mod core;
pub mod db;
pub mod generator;
pub mod middleware;
pub mod reports;
pub mod routes;
pub mod utils;

pub use crate::core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};
