//! Operational clock: shift resolution and day rollover.
//!
//! This module converts a wall-clock timestamp into a shift slot and the
//! "operational day" the observation is recorded against. The third shift
//! spans midnight, so early-morning punches belong to the shift window that
//! began the previous calendar day.

use chrono::{Days, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::config::ShiftPolicy;

/// One of the three shifts partitioning the 24-hour clock.
///
/// # Example
///
/// ```
/// use attendance_engine::resolution::ShiftSlot;
///
/// assert_eq!(ShiftSlot::Third.label(), "Shift 3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftSlot {
    /// The shift starting at 05:25.
    First,
    /// The shift starting at 13:20.
    Second,
    /// The shift starting at 21:00, spanning midnight.
    Third,
}

impl ShiftSlot {
    /// Returns the display label used as a cross-tabulation key.
    pub fn label(&self) -> &'static str {
        match self {
            ShiftSlot::First => "Shift 1",
            ShiftSlot::Second => "Shift 2",
            ShiftSlot::Third => "Shift 3",
        }
    }
}

impl std::fmt::Display for ShiftSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The result of bucketing a timestamp: its shift and operational day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationalStamp {
    /// The shift the timestamp falls into.
    pub shift: ShiftSlot,
    /// The date bucket the observation is recorded against.
    pub operational_day: NaiveDate,
}

/// Resolves a timestamp to its shift slot and operational day.
///
/// The operational day equals the calendar date of the timestamp, except
/// when the clock time is before the first shift's start: that window still
/// belongs to the third shift that began the previous calendar day, so the
/// operational day is the previous date. No other shift rolls over.
///
/// # Arguments
///
/// * `timestamp` - A wall-clock timestamp in the organization's local time zone
/// * `shifts` - The configured shift start thresholds
///
/// # Example
///
/// ```
/// use attendance_engine::config::PolicyConfig;
/// use attendance_engine::resolution::{resolve_operational_day, ShiftSlot};
/// use chrono::{NaiveDate, NaiveDateTime};
///
/// let config = PolicyConfig::default();
///
/// // A third-shift worker punching in past midnight is bucketed on the
/// // previous operational day.
/// let punch = NaiveDateTime::parse_from_str("2026-01-15 00:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let stamp = resolve_operational_day(punch, config.shifts());
/// assert_eq!(stamp.shift, ShiftSlot::Third);
/// assert_eq!(stamp.operational_day, NaiveDate::from_ymd_opt(2026, 1, 14).unwrap());
/// ```
pub fn resolve_operational_day(timestamp: NaiveDateTime, shifts: &ShiftPolicy) -> OperationalStamp {
    let minute_of_day = timestamp.hour() * 60 + timestamp.minute();

    if minute_of_day >= shifts.third_start_minute {
        return OperationalStamp {
            shift: ShiftSlot::Third,
            operational_day: timestamp.date(),
        };
    }
    if minute_of_day >= shifts.second_start_minute {
        return OperationalStamp {
            shift: ShiftSlot::Second,
            operational_day: timestamp.date(),
        };
    }
    if minute_of_day >= shifts.first_start_minute {
        return OperationalStamp {
            shift: ShiftSlot::First,
            operational_day: timestamp.date(),
        };
    }

    // Past midnight but before the first shift boundary: the observation
    // belongs to the third-shift window opened the previous calendar day.
    OperationalStamp {
        shift: ShiftSlot::Third,
        operational_day: timestamp
            .date()
            .checked_sub_days(Days::new(1))
            .unwrap_or_else(|| timestamp.date()),
    }
}
