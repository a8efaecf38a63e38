//! Salary range - min/max salary attached to an advertisement

use crate::error::DomainError;
use crate::value_objects::Snowflake;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SalaryRange {
    pub id: Snowflake,
    pub min: f64,
    pub max: f64,
}

impl SalaryRange {
    /// Create a range, checking `0 <= min <= max`
    pub fn new(id: Snowflake, min: f64, max: f64) -> Result<Self, DomainError> {
        Self::check(min, max)?;
        Ok(Self { id, min, max })
    }

    pub fn check(min: f64, max: f64) -> Result<(), DomainError> {
        if !min.is_finite() || !max.is_finite() || min < 0.0 {
            return Err(DomainError::ValidationError(
                "salary must be a non-negative number".to_string(),
            ));
        }
        if min > max {
            return Err(DomainError::InvalidSalaryRange);
        }
        Ok(())
    }

    #[inline]
    pub fn contains(&self, salary: f64) -> bool {
        salary >= self.min && salary <= self.max
    }
}
