//! Integrity policies for the aggregation layer
//!
//! Stored data may break expectations the schema does not enforce (ratings
//! outside [1, 5], salary rows whose employee reference does not resolve).
//! Each case is handled by an explicit, configurable policy.

use std::fmt;
use std::str::FromStr;

/// How the aggregation layer treats a row that violates an expectation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntegrityPolicy {
    /// Skip the offending row and keep going
    #[default]
    Tolerant,
    /// Fail the whole request with `DataIntegrity`
    Strict,
}

impl IntegrityPolicy {
    pub fn is_strict(&self) -> bool {
        matches!(self, Self::Strict)
    }
}

impl fmt::Display for IntegrityPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tolerant => write!(f, "tolerant"),
            Self::Strict => write!(f, "strict"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPolicy(pub String);

impl fmt::Display for UnknownPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown integrity policy: {}", self.0)
    }
}

impl std::error::Error for UnknownPolicy {}

impl FromStr for IntegrityPolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tolerant" | "skip" | "lenient" => Ok(Self::Tolerant),
            "strict" | "error" => Ok(Self::Strict),
            other => Err(UnknownPolicy(other.to_string())),
        }
    }
}

/// Policy per kind of integrity violation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegrityPolicies {
    /// Ratings outside [1, 5]
    pub rating: IntegrityPolicy,
    /// Salary rows without a resolvable employee
    pub orphan: IntegrityPolicy,
}

impl Default for IntegrityPolicies {
    fn default() -> Self {
        Self {
            rating: IntegrityPolicy::Tolerant,
            orphan: IntegrityPolicy::Strict,
        }
    }
}
