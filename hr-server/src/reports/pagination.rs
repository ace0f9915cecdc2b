//! Query-string coercion for the employee listing
//!
//! Malformed values fall back to defaults instead of failing the request.

use serde::Deserialize;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;
pub const MAX_LIMIT: i64 = 100;

/// Raw `/employees` query parameters
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeeQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub department_id: Option<String>,
}

/// Coerced pagination window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub limit: i64,
    pub department_id: Option<i64>,
}

impl PageRequest {
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

fn positive(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|v| v.trim().parse::<i64>().ok()).filter(|v| *v >= 1)
}

impl From<&EmployeeQuery> for PageRequest {
    fn from(q: &EmployeeQuery) -> Self {
        Self {
            page: positive(q.page.as_deref()).unwrap_or(DEFAULT_PAGE),
            limit: positive(q.limit.as_deref())
                .unwrap_or(DEFAULT_LIMIT)
                .min(MAX_LIMIT),
            department_id: q
                .department_id
                .as_deref()
                .and_then(|v| v.trim().parse().ok()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(page: Option<&str>, limit: Option<&str>, dept: Option<&str>) -> PageRequest {
        PageRequest::from(&EmployeeQuery {
            page: page.map(Into::into),
            limit: limit.map(Into::into),
            department_id: dept.map(Into::into),
        })
    }

    #[test]
    fn test_defaults() {
        let req = query(None, None, None);
        assert_eq!(req, PageRequest { page: 1, limit: 10, department_id: None });
        assert_eq!(req.offset(), 0);
    }

    #[test]
    fn test_malformed_values_fall_back() {
        assert_eq!(query(Some("abc"), Some("x"), Some("hr")), query(None, None, None));
        assert_eq!(query(Some("0"), Some("-5"), None), query(None, None, None));
    }

    #[test]
    fn test_limit_cap_and_offset() {
        let req = query(Some("3"), Some("500"), Some(" 2 "));
        assert_eq!(req.limit, MAX_LIMIT);
        assert_eq!(req.department_id, Some(2));
        assert_eq!(req.offset(), 200);
    }

    #[test]
    fn test_huge_page_does_not_overflow() {
        let req = query(Some(&i64::MAX.to_string()), Some("100"), None);
        assert_eq!(req.offset(), i64::MAX);
    }
}
