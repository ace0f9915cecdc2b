//! Performance Review Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lowest valid rating
pub const MIN_RATING: i64 = 1;
/// Highest valid rating
pub const MAX_RATING: i64 = 5;

/// Performance review entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Performance {
    pub id: i64,
    pub employee_id: Option<i64>,
    pub review_date: NaiveDate,
    pub reviewer: Option<String>,
    /// Expected in [1, 5]; not enforced by the schema
    pub rating: i64,
    pub comments: Option<String>,
    pub created_at: i64,
}

pub fn is_valid_rating(rating: i64) -> bool {
    (MIN_RATING..=MAX_RATING).contains(&rating)
}

/// Create performance payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceCreate {
    pub employee_id: i64,
    pub review_date: NaiveDate,
    pub reviewer: Option<String>,
    pub rating: i64,
    pub comments: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bounds() {
        assert!(!is_valid_rating(0));
        assert!(is_valid_rating(1));
        assert!(is_valid_rating(5));
        assert!(!is_valid_rating(6));
        assert!(!is_valid_rating(-3));
    }
}
