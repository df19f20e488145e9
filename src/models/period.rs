//! Fiscal year columns
//!
//! A model spans a historical period (years with literal values) followed by
//! a projection period (years computed from the prior year by formula).

use serde::{Deserialize, Serialize};

use crate::error::{FinModelError, FinModelResult};
use crate::models::MAX_COLUMNS;

/// Generate `count` consecutive years immediately following `last_historical`
///
/// # Errors
///
/// Returns a range error when `count` does not fit a year offset, and a
/// validation error when a generated year would pass `i32::MAX`.
pub fn projection_years(last_historical: i32, count: usize) -> FinModelResult<Vec<i32>> {
    let count = i32::try_from(count).map_err(|_| {
        FinModelError::column_out_of_range(
            u64::try_from(count).unwrap_or(u64::MAX),
            u64::from(MAX_COLUMNS),
        )
    })?;

    (1..=count)
        .map(|offset| {
            last_historical.checked_add(offset).ok_or_else(|| {
                FinModelError::Validation(format!(
                    "projection year {} after {} is out of range",
                    offset, last_historical
                ))
            })
        })
        .collect()
}

/// Which period a year column belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodKind {
    Historical,
    Projection,
}

/// The ordered list of year columns shared by every statement table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearColumns {
    historical: Vec<i32>,
    projection: Vec<i32>,
}

impl YearColumns {
    /// Build the column list from historical years plus `num_projection` generated years
    ///
    /// An empty historical list yields no projection years, since there is
    /// no prior year to project from.
    pub fn new(historical: Vec<i32>, num_projection: usize) -> FinModelResult<Self> {
        let projection = match historical.last() {
            Some(&last) => projection_years(last, num_projection)?,
            None => Vec::new(),
        };
        Ok(Self {
            historical,
            projection,
        })
    }

    /// Historical years in order
    pub fn historical(&self) -> &[i32] {
        &self.historical
    }

    /// Projection years in order
    pub fn projection(&self) -> &[i32] {
        &self.projection
    }

    /// Number of historical columns
    pub fn historical_len(&self) -> usize {
        self.historical.len()
    }

    /// Total number of year columns
    pub fn len(&self) -> usize {
        self.historical.len() + self.projection.len()
    }

    /// Check whether there are no year columns at all
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All years, historical then projection
    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.historical.iter().chain(self.projection.iter()).copied()
    }

    /// Period of the year column at `index`
    pub fn kind(&self, index: usize) -> PeriodKind {
        if index < self.historical.len() {
            PeriodKind::Historical
        } else {
            PeriodKind::Projection
        }
    }
}
