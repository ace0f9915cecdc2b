//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查 (`/`, `/health`)
//! - [`introspection`] - 路由列表 (`/routes`)
//! - [`generate`] - 合成数据生成 (`/generate-data`)
//! - [`employees`] - 员工分页列表
//! - [`departments`] - 部门列表
//! - [`reports`] - 出勤率、薪资、绩效、汇总
//! - [`dashboard`] - HTML 仪表盘

pub mod dashboard;
pub mod departments;
pub mod employees;
pub mod generate;
pub mod health;
pub mod introspection;
pub mod reports;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};
