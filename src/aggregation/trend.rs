//! Absence trend series over a date range.
//!
//! For every day in the range the trend reports how many eligible employees
//! were present, how many were absent, and the absence percentage. Days
//! with no countable employees report zeros; the percentage division is
//! guarded so an empty day never produces a NaN.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::PolicyConfig;
use crate::models::{DateRange, Employee};
use crate::resolution::{is_scheduled_day_off, resolve_day_status};

use super::batch::{AttendanceIndex, LeaveIndex};

/// One day of the absence trend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// The day the point covers.
    pub date: NaiveDate,
    /// Employees counted present.
    pub present: u32,
    /// Employees counted absent.
    pub absent: u32,
    /// absent / (absent + present) × 100, rounded to two decimals.
    pub absent_percentage: Decimal,
}

/// Computes absent / (absent + present) × 100, rounded to two decimals.
///
/// A zero denominator yields 0 rather than an error or NaN.
///
/// # Example
///
/// ```
/// use attendance_engine::aggregation::absence_percentage;
/// use rust_decimal::Decimal;
///
/// assert_eq!(absence_percentage(3, 1), Decimal::new(2500, 2)); // 25.00
/// assert_eq!(absence_percentage(0, 0), Decimal::ZERO);
/// ```
pub fn absence_percentage(present: u32, absent: u32) -> Decimal {
    let total = present + absent;
    if total == 0 {
        return Decimal::ZERO;
    }
    (Decimal::from(absent) * Decimal::from(100u32) / Decimal::from(total)).round_dp(2)
}

/// Builds the day-by-day trend for an eligible population.
///
/// The day-off exclusion applies day-by-day: an employee whose schedule
/// rests a given date is not counted on that date. Employees terminated on
/// or before a date are skipped for that date onward. Statuses that are
/// neither presences nor countable absences (deny-listed labels, day-offs
/// resolved from the record precedence) count towards neither side.
pub fn compute_trend(
    population: &[&Employee],
    attendance: &AttendanceIndex<'_>,
    leaves: &LeaveIndex<'_>,
    range: &DateRange,
    config: &PolicyConfig,
) -> Vec<TrendPoint> {
    range
        .days()
        .into_iter()
        .map(|date| {
            let mut present = 0u32;
            let mut absent = 0u32;

            for employee in population {
                if employee.is_terminated_on(date) {
                    continue;
                }
                let day_off = employee
                    .schedule_code()
                    .is_some_and(|code| is_scheduled_day_off(date, code, config));
                if day_off {
                    continue;
                }

                let status = resolve_day_status(
                    employee,
                    date,
                    attendance.rows_for(&employee.id, date),
                    leaves.episodes_for(&employee.id),
                    false,
                    config,
                );

                if status.is_presence() {
                    present += 1;
                } else if status.counts_as_absence(config) {
                    absent += 1;
                }
            }

            TrendPoint {
                date,
                present,
                absent,
                absent_percentage: absence_percentage(present, absent),
            }
        })
        .collect()
}
