//! Request types for the Attendance Engine API.
//!
//! This module defines the JSON request structures for the `/dashboard`
//! and `/operational-day` endpoints.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::aggregation::PopulationFilter;
use crate::models::{
    AbsenceType, AttendanceRecord, Employee, EpisodeStatus, Gender, LeaveEpisode, LeaveKind,
};

/// Request body for the `/dashboard` endpoint.
///
/// Carries the population snapshot, the pre-loaded attendance and leave
/// batches, the date range and the optional structural filters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardRequest {
    /// The population snapshot from the employee directory.
    pub employees: Vec<EmployeeRequest>,
    /// Attendance rows whose operational day falls within the range.
    #[serde(default)]
    pub attendance: Vec<AttendanceRecordRequest>,
    /// Leave episodes overlapping the range.
    #[serde(default)]
    pub leaves: Vec<LeaveEpisodeRequest>,
    /// The inclusive date range to aggregate.
    pub range: DateRangeRequest,
    /// Structural population filters.
    #[serde(default)]
    pub filters: Option<PopulationFilterRequest>,
}

/// Employee information in a dashboard request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Opaque stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Recorded gender.
    #[serde(default)]
    pub gender: Gender,
    /// Date of birth.
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    /// Hire date.
    #[serde(default)]
    pub hire_date: Option<NaiveDate>,
    /// Termination date, if any.
    #[serde(default)]
    pub termination_date: Option<NaiveDate>,
    /// Scheduled shift-start time of day.
    #[serde(default)]
    pub shift_start: Option<NaiveTime>,
    /// Rotating-schedule code.
    #[serde(default)]
    pub schedule: Option<String>,
    /// Sector display name.
    #[serde(default)]
    pub sector: Option<String>,
    /// Company display name.
    #[serde(default)]
    pub company: Option<String>,
    /// Role display name.
    #[serde(default)]
    pub role: Option<String>,
    /// Assigned shift display name.
    #[serde(default)]
    pub shift: Option<String>,
    /// Supervisor reference.
    #[serde(default)]
    pub supervisor_id: Option<String>,
}

/// Absence-type reference in a dashboard request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbsenceTypeRequest {
    /// Enumerated short code.
    pub code: String,
    /// Human description used as the status label.
    #[serde(default)]
    pub description: String,
}

/// Attendance row in a dashboard request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRecordRequest {
    /// The employee the row belongs to.
    pub employee_id: String,
    /// The operational day the row is recorded against.
    pub day: NaiveDate,
    /// Clock-in timestamp.
    #[serde(default)]
    pub clock_in: Option<NaiveDateTime>,
    /// Clock-out timestamp.
    #[serde(default)]
    pub clock_out: Option<NaiveDateTime>,
    /// Absence-type reference.
    #[serde(default)]
    pub absence_type: Option<AbsenceTypeRequest>,
    /// True for human-entered corrections.
    #[serde(default)]
    pub manual: bool,
    /// True when validated.
    #[serde(default)]
    pub validated: bool,
    /// Identity that recorded the row.
    #[serde(default)]
    pub recorded_by: Option<String>,
    /// Monotonic creation sequence number.
    pub sequence: u64,
}

/// Leave episode in a dashboard request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveEpisodeRequest {
    /// The employee the episode belongs to.
    pub employee_id: String,
    /// The kind of episode.
    pub kind: LeaveKind,
    /// Inclusive start date.
    pub start: NaiveDate,
    /// Inclusive end date.
    pub end: NaiveDate,
    /// Lifecycle status.
    #[serde(default = "default_episode_status")]
    pub status: EpisodeStatus,
    /// Optional type code.
    #[serde(default)]
    pub type_code: Option<String>,
}

fn default_episode_status() -> EpisodeStatus {
    EpisodeStatus::Active
}

/// Date range in a dashboard request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateRangeRequest {
    /// The start date (inclusive).
    pub start: NaiveDate,
    /// The end date (inclusive).
    pub end: NaiveDate,
}

/// Structural population filters in a dashboard request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PopulationFilterRequest {
    /// Sector display name to match.
    #[serde(default)]
    pub sector: Option<String>,
    /// Company display name to match.
    #[serde(default)]
    pub company: Option<String>,
    /// Shift display name to match.
    #[serde(default)]
    pub shift: Option<String>,
    /// Role display name to match.
    #[serde(default)]
    pub role: Option<String>,
    /// Schedule code to match.
    #[serde(default)]
    pub schedule: Option<String>,
    /// Free-text search over the display name.
    #[serde(default)]
    pub search: Option<String>,
}

/// Request body for the `/operational-day` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationalDayRequest {
    /// The wall-clock timestamp to bucket.
    pub timestamp: NaiveDateTime,
}

impl From<EmployeeRequest> for Employee {
    fn from(req: EmployeeRequest) -> Self {
        Employee {
            id: req.id,
            name: req.name,
            gender: req.gender,
            birth_date: req.birth_date,
            hire_date: req.hire_date,
            termination_date: req.termination_date,
            shift_start: req.shift_start,
            schedule: req.schedule,
            sector: req.sector,
            company: req.company,
            role: req.role,
            shift: req.shift,
            supervisor_id: req.supervisor_id,
        }
    }
}

impl From<AbsenceTypeRequest> for AbsenceType {
    fn from(req: AbsenceTypeRequest) -> Self {
        AbsenceType {
            code: req.code,
            description: req.description,
        }
    }
}

impl From<AttendanceRecordRequest> for AttendanceRecord {
    fn from(req: AttendanceRecordRequest) -> Self {
        AttendanceRecord {
            employee_id: req.employee_id,
            day: req.day,
            clock_in: req.clock_in,
            clock_out: req.clock_out,
            absence_type: req.absence_type.map(Into::into),
            manual: req.manual,
            validated: req.validated,
            recorded_by: req.recorded_by,
            sequence: req.sequence,
        }
    }
}

impl From<LeaveEpisodeRequest> for LeaveEpisode {
    fn from(req: LeaveEpisodeRequest) -> Self {
        LeaveEpisode {
            employee_id: req.employee_id,
            kind: req.kind,
            start: req.start,
            end: req.end,
            status: req.status,
            type_code: req.type_code,
        }
    }
}

impl From<PopulationFilterRequest> for PopulationFilter {
    fn from(req: PopulationFilterRequest) -> Self {
        PopulationFilter {
            sector: req.sector,
            company: req.company,
            shift: req.shift,
            role: req.role,
            schedule: req.schedule,
            search: req.search,
        }
    }
}
