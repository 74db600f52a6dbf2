//! Attendance record model and related types.
//!
//! One *logical* record exists per (employee, operational day), but the
//! underlying store appends a new row on every manual correction instead of
//! updating in place. The status resolver picks exactly one row per pair
//! using the `sequence` tie-break.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Absence-type reference carried by an attendance record.
///
/// Used purely as a label: the `description` is free text and is what the
/// resolver categorizes by keyword match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbsenceType {
    /// Enumerated short code (e.g., "present", "absent").
    pub code: String,
    /// Human description; the resolver's status label.
    pub description: String,
}

impl AbsenceType {
    /// Returns the label the resolver should carry: the description when
    /// present, otherwise the code.
    pub fn label(&self) -> &str {
        if self.description.trim().is_empty() {
            &self.code
        } else {
            &self.description
        }
    }
}

/// A raw attendance row for one employee and one operational day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The employee the row belongs to.
    pub employee_id: String,
    /// The operational day the row is recorded against.
    pub day: NaiveDate,
    /// Clock-in timestamp, if punched.
    #[serde(default)]
    pub clock_in: Option<NaiveDateTime>,
    /// Clock-out timestamp, if punched.
    #[serde(default)]
    pub clock_out: Option<NaiveDateTime>,
    /// Absence-type reference, if the row carries one.
    #[serde(default)]
    pub absence_type: Option<AbsenceType>,
    /// True when the row is a human-entered correction.
    #[serde(default)]
    pub manual: bool,
    /// True when the row has been validated.
    #[serde(default)]
    pub validated: bool,
    /// Identity that recorded the row.
    #[serde(default)]
    pub recorded_by: Option<String>,
    /// Monotonic creation sequence number, used as the merge tie-break.
    pub sequence: u64,
}

impl AttendanceRecord {
    /// Calculates the worked hours for this row.
    ///
    /// Worked hours are (clock-out minus clock-in) in hours rounded to two
    /// decimals, and 0 when either timestamp is missing. A clock-out before
    /// the clock-in also yields 0 rather than a negative duration.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::models::AttendanceRecord;
    /// use chrono::NaiveDateTime;
    /// use rust_decimal::Decimal;
    ///
    /// let record = AttendanceRecord {
    ///     employee_id: "emp_001".to_string(),
    ///     day: NaiveDateTime::parse_from_str("2026-01-14 05:25:00", "%Y-%m-%d %H:%M:%S").unwrap().date(),
    ///     clock_in: Some(NaiveDateTime::parse_from_str("2026-01-14 05:25:00", "%Y-%m-%d %H:%M:%S").unwrap()),
    ///     clock_out: Some(NaiveDateTime::parse_from_str("2026-01-14 13:40:00", "%Y-%m-%d %H:%M:%S").unwrap()),
    ///     absence_type: None,
    ///     manual: false,
    ///     validated: true,
    ///     recorded_by: None,
    ///     sequence: 1,
    /// };
    /// assert_eq!(record.worked_hours(), Decimal::new(825, 2)); // 8.25
    /// ```
    pub fn worked_hours(&self) -> Decimal {
        let (clock_in, clock_out) = match (self.clock_in, self.clock_out) {
            (Some(i), Some(o)) => (i, o),
            _ => return Decimal::ZERO,
        };

        let worked_minutes = (clock_out - clock_in).num_minutes();
        if worked_minutes <= 0 {
            return Decimal::ZERO;
        }

        (Decimal::new(worked_minutes, 0) / Decimal::new(60, 0)).round_dp(2)
    }

    /// Returns true when the row has a clock-in punch.
    pub fn has_clock_in(&self) -> bool {
        self.clock_in.is_some()
    }
}
