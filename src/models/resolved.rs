//! Resolved per-day status model.
//!
//! A [`ResolvedDayStatus`] is the single canonical answer for one employee
//! and one operational day. It is derived, never persisted: every
//! aggregation pass builds its own instances and never mutates them
//! afterwards.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::PolicyConfig;

/// Which data source produced a resolved status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusOrigin {
    /// A human-entered attendance correction won the merge.
    ManualOverride,
    /// A medical-leave episode covered the day.
    MedicalLeave,
    /// A disciplinary or generic leave episode covered the day.
    OtherLeave,
    /// A system-generated attendance row supplied the status.
    AttendanceRecord,
    /// The schedule code marked the day as a day-off.
    ComputedDayOff,
    /// No data source touched the day at all.
    ImplicitAbsence,
}

/// Broad category of a resolved status, derived from the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusCategory {
    /// Employee was at work (on time or late).
    Presence,
    /// Plain absence.
    Absence,
    /// Medical reason.
    Medical,
    /// Disciplinary reason.
    Disciplinary,
    /// Workplace accident.
    Accident,
    /// Vacation or generic paid leave.
    Vacation,
    /// Scheduled rest day.
    DayOff,
}

impl std::fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusCategory::Presence => write!(f, "presence"),
            StatusCategory::Absence => write!(f, "absence"),
            StatusCategory::Medical => write!(f, "medical"),
            StatusCategory::Disciplinary => write!(f, "disciplinary"),
            StatusCategory::Accident => write!(f, "accident"),
            StatusCategory::Vacation => write!(f, "vacation"),
            StatusCategory::DayOff => write!(f, "day_off"),
        }
    }
}

/// How urgently a resolved status needs human attention.
///
/// An unexplained absence is always high; disciplinary statuses are medium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criticality {
    /// Routine status.
    Low,
    /// Needs review.
    Medium,
    /// Needs immediate attention.
    High,
}

/// The canonical status of one employee on one operational day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedDayStatus {
    /// The employee the status belongs to.
    pub employee_id: String,
    /// The operational day resolved.
    pub day: NaiveDate,
    /// Status label (free text, categorized by keyword match).
    pub label: String,
    /// Which data source won the precedence chain.
    pub origin: StatusOrigin,
    /// Broad category derived from the label and origin.
    pub category: StatusCategory,
    /// Attention level.
    pub criticality: Criticality,
    /// True when a presence was reclassified as a late arrival.
    pub late: bool,
    /// Clock-in carried through from the winning attendance row.
    #[serde(default)]
    pub clock_in: Option<NaiveDateTime>,
    /// Clock-out carried through from the winning attendance row.
    #[serde(default)]
    pub clock_out: Option<NaiveDateTime>,
}

impl ResolvedDayStatus {
    /// Returns true when the status counts as a presence.
    ///
    /// Late arrivals are presences; they are tagged via [`Self::late`]
    /// rather than excluded.
    pub fn is_presence(&self) -> bool {
        self.category == StatusCategory::Presence
    }

    /// Returns true when the status counts towards absence tallies.
    ///
    /// Presences and day-offs never count, and neither does any label on
    /// the policy deny-list (rest-day variants, time bank, training).
    pub fn counts_as_absence(&self, config: &PolicyConfig) -> bool {
        if self.is_presence() || self.category == StatusCategory::DayOff {
            return false;
        }
        !config.is_absence_excluded(&self.label)
    }

    /// Worked hours for the day from the carried punches.
    ///
    /// (clock-out minus clock-in) in hours rounded to two decimals; 0 when
    /// either timestamp is missing or the punches are inverted.
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
}
