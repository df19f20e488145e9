//! Growth rate input
//!
//! The growth rate is the single editable input of the model. The workbook
//! attaches a decimal constraint of [0, 1] to its cell; the same bounds are
//! checked here for the initial value written at generation time.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{FinModelError, FinModelResult};

/// Annual growth rate applied to every projected metric
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GrowthRate(f64);

impl GrowthRate {
    /// Lower bound accepted by the input cell
    pub const MIN: f64 = 0.0;

    /// Upper bound accepted by the input cell
    pub const MAX: f64 = 1.0;

    /// Create a growth rate, rejecting values outside [0, 1]
    pub fn new(value: f64) -> FinModelResult<Self> {
        if !Self::accepts(value) {
            return Err(FinModelError::Validation(format!(
                "growth rate {} must be between {} and {}",
                value,
                Self::MIN,
                Self::MAX
            )));
        }
        Ok(Self(value))
    }

    /// Whether `value` satisfies the input cell's constraint (inclusive bounds)
    pub fn accepts(value: f64) -> bool {
        value.is_finite() && (Self::MIN..=Self::MAX).contains(&value)
    }

    /// The raw rate (0.05 = 5%)
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Multiplier applied to the prior year (1 + rate)
    pub fn factor(&self) -> f64 {
        1.0 + self.0
    }
}

impl fmt::Display for GrowthRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}%", self.0 * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(GrowthRate::new(0.0).is_ok());
        assert!(GrowthRate::new(1.0).is_ok());
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert!(GrowthRate::new(-0.0001).unwrap_err().is_validation());
        assert!(GrowthRate::new(1.0001).unwrap_err().is_validation());
        assert!(GrowthRate::new(f64::NAN).is_err());
    }

    #[test]
    fn test_factor_and_display() {
        let rate = GrowthRate::new(0.05).unwrap();
        assert!((rate.factor() - 1.05).abs() < 1e-12);
        assert_eq!(rate.to_string(), "5.00%");
    }
}
