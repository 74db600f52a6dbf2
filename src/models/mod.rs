//! Domain models for the Attendance Engine.
//!
//! This module contains the data structures the engine reads (employees,
//! attendance rows, leave episodes) and the derived types it produces
//! (resolved day statuses) plus the date range that scopes an aggregation.

mod attendance;
mod employee;
mod leave;
mod period;
mod resolved;

pub use attendance::{AbsenceType, AttendanceRecord};
pub use employee::{Employee, Gender};
pub use leave::{EpisodeStatus, LeaveEpisode, LeaveKind};
pub use period::DateRange;
pub use resolved::{Criticality, ResolvedDayStatus, StatusCategory, StatusOrigin};
