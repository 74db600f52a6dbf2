//! Employee model and related types.
//!
//! Employees are created by the surrounding HR CRUD layer and are read-only
//! to this engine. Related display names (sector, company, role, shift) may
//! be missing; accessors resolve them to explicit fallback labels so partial
//! data never aborts a batch computation.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Gender recorded for an employee, used by the gender cross-tabulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Female.
    Female,
    /// Male.
    Male,
    /// Not recorded.
    #[default]
    Unspecified,
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Female => write!(f, "female"),
            Gender::Male => write!(f, "male"),
            Gender::Unspecified => write!(f, "unspecified"),
        }
    }
}

/// Represents an employee subject to attendance resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Opaque stable identifier for the employee.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Recorded gender.
    #[serde(default)]
    pub gender: Gender,
    /// Date of birth, if recorded.
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    /// Hire date, if recorded.
    #[serde(default)]
    pub hire_date: Option<NaiveDate>,
    /// Termination date; `None` for active employees.
    #[serde(default)]
    pub termination_date: Option<NaiveDate>,
    /// Scheduled shift-start time of day, used for late classification.
    #[serde(default)]
    pub shift_start: Option<NaiveTime>,
    /// Assigned rotating-schedule code (e.g., "A", "B", "C").
    #[serde(default)]
    pub schedule: Option<String>,
    /// Assigned sector display name.
    #[serde(default)]
    pub sector: Option<String>,
    /// Company display name.
    #[serde(default)]
    pub company: Option<String>,
    /// Role display name; drives dashboard eligibility.
    #[serde(default)]
    pub role: Option<String>,
    /// Assigned shift display name.
    #[serde(default)]
    pub shift: Option<String>,
    /// Supervisor reference (lookup only, no ownership).
    #[serde(default)]
    pub supervisor_id: Option<String>,
}

impl Employee {
    /// Returns true if the employee is terminated on or before the given date.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::models::{Employee, Gender};
    /// use chrono::NaiveDate;
    ///
    /// let mut employee = Employee {
    ///     id: "emp_001".to_string(),
    ///     name: "Test".to_string(),
    ///     gender: Gender::Unspecified,
    ///     birth_date: None,
    ///     hire_date: None,
    ///     termination_date: Some(NaiveDate::from_ymd_opt(2026, 1, 10).unwrap()),
    ///     shift_start: None,
    ///     schedule: None,
    ///     sector: None,
    ///     company: None,
    ///     role: None,
    ///     shift: None,
    ///     supervisor_id: None,
    /// };
    /// assert!(employee.is_terminated_on(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()));
    /// employee.termination_date = None;
    /// assert!(!employee.is_terminated_on(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()));
    /// ```
    pub fn is_terminated_on(&self, date: NaiveDate) -> bool {
        self.termination_date.is_some_and(|t| t <= date)
    }

    /// Returns the schedule code, or `None` when blank.
    pub fn schedule_code(&self) -> Option<&str> {
        self.schedule.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    /// Returns the sector display name or the "no sector" fallback.
    pub fn sector_label(&self) -> &str {
        self.sector.as_deref().unwrap_or("no sector")
    }

    /// Returns the company display name or the "no company" fallback.
    pub fn company_label(&self) -> &str {
        self.company.as_deref().unwrap_or("no company")
    }

    /// Returns the role display name or the "no role" fallback.
    pub fn role_label(&self) -> &str {
        self.role.as_deref().unwrap_or("no role")
    }

    /// Returns the assigned shift display name, if any.
    pub fn shift_label(&self) -> Option<&str> {
        self.shift.as_deref().filter(|s| !s.trim().is_empty())
    }

    /// Returns the schedule display label or the "unscheduled" fallback.
    pub fn schedule_label(&self) -> &str {
        self.schedule_code().unwrap_or("unscheduled")
    }
}
