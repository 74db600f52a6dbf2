//! Per-employee roster rows for the detailed dashboard.
//!
//! Each row pairs an employee's display data with the resolved snapshot-day
//! status and the computed fields the table shows: age as of range end,
//! tenure bucket, and worked hours for the snapshot day.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Employee, Gender, ResolvedDayStatus};

/// Tenure bucket computed from hire date to range end.
///
/// A future hire date (negative tenure) or a missing hire date reports
/// [`TenureBucket::Unknown`] rather than a negative number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TenureBucket {
    /// Less than 30 days of tenure.
    Under30Days,
    /// 30 to 89 days of tenure.
    From30To89Days,
    /// 90 days of tenure or more.
    NinetyPlusDays,
    /// Hire date missing or in the future.
    Unknown,
}

impl std::fmt::Display for TenureBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TenureBucket::Under30Days => write!(f, "<30 days"),
            TenureBucket::From30To89Days => write!(f, "30-89 days"),
            TenureBucket::NinetyPlusDays => write!(f, ">=90 days"),
            TenureBucket::Unknown => write!(f, "unknown"),
        }
    }
}

/// Buckets an employee's tenure as of a reference date.
///
/// # Example
///
/// ```
/// use attendance_engine::aggregation::{tenure_bucket, TenureBucket};
/// use chrono::NaiveDate;
///
/// let as_of = NaiveDate::from_ymd_opt(2026, 1, 14).unwrap();
/// let hired = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
/// assert_eq!(tenure_bucket(Some(hired), as_of), TenureBucket::Under30Days);
/// assert_eq!(tenure_bucket(None, as_of), TenureBucket::Unknown);
/// ```
pub fn tenure_bucket(hire_date: Option<NaiveDate>, as_of: NaiveDate) -> TenureBucket {
    let Some(hired) = hire_date else {
        return TenureBucket::Unknown;
    };

    let days = (as_of - hired).num_days();
    if days < 0 {
        TenureBucket::Unknown
    } else if days < 30 {
        TenureBucket::Under30Days
    } else if days < 90 {
        TenureBucket::From30To89Days
    } else {
        TenureBucket::NinetyPlusDays
    }
}

/// Computes an employee's age in whole years as of a reference date.
///
/// Returns `None` when the birth date is missing or in the future.
pub fn age_on(birth_date: Option<NaiveDate>, as_of: NaiveDate) -> Option<u32> {
    birth_date.and_then(|born| as_of.years_since(born))
}

/// One row of the per-employee dashboard table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeDayRow {
    /// The employee's stable id.
    pub employee_id: String,
    /// Display name.
    pub name: String,
    /// Recorded gender.
    pub gender: Gender,
    /// Sector display name (with fallback).
    pub sector: String,
    /// Company display name (with fallback).
    pub company: String,
    /// Role display name (with fallback).
    pub role: String,
    /// Assigned shift display name, or "no shift".
    pub shift: String,
    /// Schedule code, or "unscheduled".
    pub schedule: String,
    /// Resolved snapshot-day status label.
    pub status: String,
    /// True when the presence was past the late tolerance.
    pub late: bool,
    /// Age in whole years as of range end, when the birth date is known.
    pub age: Option<u32>,
    /// Tenure bucket as of range end.
    pub tenure: TenureBucket,
    /// Worked hours for the snapshot day (0 when punches are incomplete).
    pub worked_hours: Decimal,
    /// True when the employee is terminated on or before the snapshot date.
    pub terminated: bool,
}

/// Builds the roster row for one employee from the snapshot-day status.
pub fn build_row(
    employee: &Employee,
    status: &ResolvedDayStatus,
    snapshot_date: NaiveDate,
) -> EmployeeDayRow {
    EmployeeDayRow {
        employee_id: employee.id.clone(),
        name: employee.name.clone(),
        gender: employee.gender,
        sector: employee.sector_label().to_string(),
        company: employee.company_label().to_string(),
        role: employee.role_label().to_string(),
        shift: employee.shift_label().unwrap_or("no shift").to_string(),
        schedule: employee.schedule_label().to_string(),
        status: status.label.clone(),
        late: status.late,
        age: age_on(employee.birth_date, snapshot_date),
        tenure: tenure_bucket(employee.hire_date, snapshot_date),
        worked_hours: status.worked_hours(),
        terminated: employee.is_terminated_on(snapshot_date),
    }
}
