//! Date range model.
//!
//! A [`DateRange`] defines the inclusive window an aggregation pass covers.
//! The range end doubles as the snapshot date for cross-tabulated counts.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// An inclusive date range.
///
/// # Example
///
/// ```
/// use attendance_engine::models::DateRange;
/// use chrono::NaiveDate;
///
/// let range = DateRange {
///     start: NaiveDate::from_ymd_opt(2026, 1, 13).unwrap(),
///     end: NaiveDate::from_ymd_opt(2026, 1, 19).unwrap(),
/// };
///
/// assert!(range.contains(NaiveDate::from_ymd_opt(2026, 1, 13).unwrap()));
/// assert!(range.contains(NaiveDate::from_ymd_opt(2026, 1, 19).unwrap()));
/// assert!(!range.contains(NaiveDate::from_ymd_opt(2026, 1, 20).unwrap()));
/// assert_eq!(range.days().len(), 7);
/// assert_eq!(range.snapshot_date(), range.end);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// The start date (inclusive).
    pub start: NaiveDate,
    /// The end date (inclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a range after validating that `end` is not before `start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> EngineResult<Self> {
        if end < start {
            return Err(EngineError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Checks if a date falls within this range (inclusive on both ends).
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Returns every calendar day in the range, in order.
    pub fn days(&self) -> Vec<NaiveDate> {
        let mut days = Vec::new();
        let mut current = self.start;
        while current <= self.end {
            days.push(current);
            current = match current.checked_add_days(Days::new(1)) {
                Some(next) => next,
                None => break,
            };
        }
        days
    }

    /// The snapshot date used for cross-tabulated counts: the range end.
    pub fn snapshot_date(&self) -> NaiveDate {
        self.end
    }

    /// Returns true when the range covers a single calendar day.
    pub fn is_single_day(&self) -> bool {
        self.start == self.end
    }

    /// Validates that the range is not inverted.
    pub fn validate(&self) -> EngineResult<()> {
        if self.end < self.start {
            return Err(EngineError::InvalidRange {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }
}
