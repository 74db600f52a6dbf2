//! Scheduled day-off resolution.
//!
//! Each rotating-schedule code maps to a fixed pair of weekdays that are the
//! scheduled rest days for that code. The table is business policy loaded
//! from configuration; unknown or blank codes resolve to "not a day-off" so
//! an unmapped employee is never hidden from the dashboards.

use chrono::{Datelike, NaiveDate};

use crate::config::PolicyConfig;

/// Decides whether a calendar date is a scheduled day-off for a schedule code.
///
/// Day-of-week is indexed 0=Sunday..6=Saturday to match the policy table.
/// Lookup fails open: an unknown or blank code returns `false`.
///
/// # Arguments
///
/// * `date` - The calendar date to check
/// * `schedule_code` - The employee's schedule code (e.g., "A")
/// * `config` - The attendance policy carrying the day-off table
///
/// # Example
///
/// ```
/// use attendance_engine::config::PolicyConfig;
/// use attendance_engine::resolution::is_scheduled_day_off;
/// use chrono::NaiveDate;
///
/// let config = PolicyConfig::default();
///
/// // 2026-01-14 is a Wednesday: a day-off for schedule "A".
/// let wednesday = NaiveDate::from_ymd_opt(2026, 1, 14).unwrap();
/// assert!(is_scheduled_day_off(wednesday, "A", &config));
/// assert!(!is_scheduled_day_off(wednesday, "B", &config));
/// assert!(!is_scheduled_day_off(wednesday, "unknown", &config));
/// ```
pub fn is_scheduled_day_off(date: NaiveDate, schedule_code: &str, config: &PolicyConfig) -> bool {
    let code = schedule_code.trim().to_uppercase();
    if code.is_empty() {
        return false;
    }

    let weekday = date.weekday().num_days_from_sunday();
    config
        .day_off_weekdays()
        .get(&code)
        .is_some_and(|days| days.contains(&weekday))
}
