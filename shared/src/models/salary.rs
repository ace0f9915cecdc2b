//! Salary Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Payment method, stored as `Bank Transfer` / `Cheque`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
pub enum PaymentMethod {
    #[serde(rename = "Bank Transfer")]
    #[cfg_attr(feature = "db", sqlx(rename = "Bank Transfer"))]
    BankTransfer,
    Cheque,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 2] = [PaymentMethod::BankTransfer, PaymentMethod::Cheque];
}

/// Salary payment entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Salary {
    pub id: i64,
    pub employee_id: Option<i64>,
    pub base_salary: f64,
    pub bonus: f64,
    pub deductions: f64,
    pub payment_date: NaiveDate,
    pub payment_method: PaymentMethod,
    pub created_at: i64,
}

/// Create salary payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryCreate {
    pub employee_id: i64,
    pub base_salary: f64,
    pub bonus: f64,
    pub deductions: f64,
    pub payment_date: NaiveDate,
    pub payment_method: PaymentMethod,
}
