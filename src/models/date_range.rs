//! Inclusive calendar date ranges.
//!
//! This module contains the [`DateRange`] type used to bound payroll
//! aggregation and attendance queries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{HrError, HrResult};

/// An inclusive range of calendar dates.
///
/// Both the start and end dates belong to the range. A validated range
/// always has `start_date <= end_date`.
///
/// # Example
///
/// ```
/// use hr_payroll::models::DateRange;
/// use chrono::NaiveDate;
///
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
/// )
/// .unwrap();
///
/// assert!(range.contains_date(NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()));
/// assert_eq!(range.day_count(), 31);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// The first date of the range (inclusive).
    pub start_date: NaiveDate,
    /// The last date of the range (inclusive).
    pub end_date: NaiveDate,
}

impl DateRange {
    /// Creates a validated range.
    ///
    /// Returns [`HrError::InvalidDateRange`] when `start_date` is after `end_date`.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> HrResult<Self> {
        if start_date > end_date {
            return Err(HrError::InvalidDateRange {
                start: start_date,
                end: end_date,
            });
        }
        Ok(Self {
            start_date,
            end_date,
        })
    }

    /// Checks if a given date falls within this range, inclusive of both ends.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Returns the number of calendar days covered by the range.
    pub fn day_count(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}
