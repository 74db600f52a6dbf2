//! Leave episode model.
//!
//! Medical, disciplinary and generic absence episodes are structurally
//! identical for this engine: a date interval plus the capability of
//! covering an operational day with a status label.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The kind of leave episode, which decides its precedence and category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveKind {
    /// Medical leave; wins over other episode kinds.
    Medical,
    /// Disciplinary suspension or equivalent.
    Disciplinary,
    /// Any other recorded absence interval.
    Generic,
}

/// Lifecycle status of a leave episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EpisodeStatus {
    /// Episode is in force.
    Active,
    /// Episode ended and was signed off.
    Finalized,
    /// Episode was cancelled; it never covers a day.
    Cancelled,
}

/// A leave episode for one employee over an inclusive date interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveEpisode {
    /// The employee the episode belongs to.
    pub employee_id: String,
    /// The kind of episode.
    pub kind: LeaveKind,
    /// Inclusive start date.
    pub start: NaiveDate,
    /// Inclusive end date.
    pub end: NaiveDate,
    /// Lifecycle status.
    pub status: EpisodeStatus,
    /// Optional type code used as the status label for non-medical kinds.
    #[serde(default)]
    pub type_code: Option<String>,
}

impl LeaveEpisode {
    /// Returns true if the episode covers the given operational day.
    ///
    /// Coverage is inclusive on both ends; cancelled episodes never cover.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::models::{EpisodeStatus, LeaveEpisode, LeaveKind};
    /// use chrono::NaiveDate;
    ///
    /// let episode = LeaveEpisode {
    ///     employee_id: "emp_001".to_string(),
    ///     kind: LeaveKind::Medical,
    ///     start: NaiveDate::from_ymd_opt(2026, 1, 13).unwrap(),
    ///     end: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
    ///     status: EpisodeStatus::Active,
    ///     type_code: None,
    /// };
    /// assert!(episode.covers(NaiveDate::from_ymd_opt(2026, 1, 13).unwrap()));
    /// assert!(episode.covers(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()));
    /// assert!(!episode.covers(NaiveDate::from_ymd_opt(2026, 1, 16).unwrap()));
    /// ```
    pub fn covers(&self, day: NaiveDate) -> bool {
        self.status != EpisodeStatus::Cancelled && self.start <= day && day <= self.end
    }
}
