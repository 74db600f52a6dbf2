//! Late-arrival classification.
//!
//! Compares an actual clock-in against the employee's scheduled shift start
//! under a tolerance window. A late arrival is still a presence for
//! headcount purposes; it is tallied separately by the aggregator.

use chrono::{NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Whether a clock-in was on time or late.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Punctuality {
    /// Clock-in at or within tolerance of the scheduled start.
    Present,
    /// Clock-in past the scheduled start plus tolerance.
    Late,
}

/// Classifies a clock-in as on time or late.
///
/// Late iff the actual minute-of-day exceeds the scheduled minute-of-day
/// plus the tolerance. A missing scheduled time or missing clock-in
/// defaults to [`Punctuality::Present`]: lateness cannot be classified
/// without both sides.
///
/// # Arguments
///
/// * `scheduled_start` - The employee's scheduled shift-start time of day
/// * `clock_in` - The actual clock-in timestamp
/// * `tolerance_minutes` - Minutes of grace past the scheduled start
///
/// # Example
///
/// ```
/// use attendance_engine::resolution::{classify_arrival, Punctuality};
/// use chrono::{NaiveDateTime, NaiveTime};
///
/// let scheduled = NaiveTime::from_hms_opt(5, 25, 0);
/// let on_time = NaiveDateTime::parse_from_str("2026-01-14 05:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let late = NaiveDateTime::parse_from_str("2026-01-14 05:31:00", "%Y-%m-%d %H:%M:%S").unwrap();
///
/// assert_eq!(classify_arrival(scheduled, Some(on_time), 5), Punctuality::Present);
/// assert_eq!(classify_arrival(scheduled, Some(late), 5), Punctuality::Late);
/// ```
pub fn classify_arrival(
    scheduled_start: Option<NaiveTime>,
    clock_in: Option<NaiveDateTime>,
    tolerance_minutes: i64,
) -> Punctuality {
    let (scheduled, actual) = match (scheduled_start, clock_in) {
        (Some(s), Some(a)) => (s, a),
        _ => return Punctuality::Present,
    };

    let scheduled_minute = i64::from(scheduled.hour() * 60 + scheduled.minute());
    let actual_minute = i64::from(actual.hour() * 60 + actual.minute());

    if actual_minute > scheduled_minute + tolerance_minutes {
        Punctuality::Late
    } else {
        Punctuality::Present
    }
}
