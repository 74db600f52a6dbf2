//! Batch indexing for aggregation passes.
//!
//! One pre-loaded batch of attendance rows and leave episodes covers the
//! whole date range; these indexes give the per-employee-day views the
//! status resolver consumes. The store may hold duplicate rows per
//! (employee, operational day) because manual corrections append rather
//! than update; the indexes keep all of them and leave the winning-row
//! choice to the resolver's precedence rules.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::{AttendanceRecord, LeaveEpisode};

/// Attendance rows indexed by employee and operational day.
pub struct AttendanceIndex<'a> {
    rows: HashMap<&'a str, HashMap<NaiveDate, Vec<&'a AttendanceRecord>>>,
}

impl<'a> AttendanceIndex<'a> {
    /// Builds the index from a pre-loaded batch.
    pub fn build(batch: &'a [AttendanceRecord]) -> Self {
        let mut rows: HashMap<&'a str, HashMap<NaiveDate, Vec<&'a AttendanceRecord>>> =
            HashMap::new();
        for record in batch {
            rows.entry(record.employee_id.as_str())
                .or_default()
                .entry(record.day)
                .or_default()
                .push(record);
        }
        Self { rows }
    }

    /// Returns every row stored for one (employee, operational day) pair.
    pub fn rows_for(&self, employee_id: &str, day: NaiveDate) -> &[&'a AttendanceRecord] {
        self.rows
            .get(employee_id)
            .and_then(|days| days.get(&day))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Returns true when the pair has at least one clock-in punch.
    pub fn has_clock_in(&self, employee_id: &str, day: NaiveDate) -> bool {
        self.rows_for(employee_id, day)
            .iter()
            .any(|r| r.has_clock_in())
    }
}

/// Leave episodes indexed by employee.
pub struct LeaveIndex<'a> {
    episodes: HashMap<&'a str, Vec<&'a LeaveEpisode>>,
}

impl<'a> LeaveIndex<'a> {
    /// Builds the index from a pre-loaded batch.
    pub fn build(batch: &'a [LeaveEpisode]) -> Self {
        let mut episodes: HashMap<&'a str, Vec<&'a LeaveEpisode>> = HashMap::new();
        for episode in batch {
            episodes
                .entry(episode.employee_id.as_str())
                .or_default()
                .push(episode);
        }
        Self { episodes }
    }

    /// Returns every episode recorded for one employee.
    pub fn episodes_for(&self, employee_id: &str) -> &[&'a LeaveEpisode] {
        self.episodes
            .get(employee_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EpisodeStatus, LeaveKind};
    use chrono::NaiveDateTime;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_record(employee_id: &str, day: &str, sequence: u64, clock_in: bool) -> AttendanceRecord {
        AttendanceRecord {
            employee_id: employee_id.to_string(),
            day: make_date(day),
            clock_in: clock_in.then(|| {
                NaiveDateTime::parse_from_str(
                    &format!("{} 05:25:00", day),
                    "%Y-%m-%d %H:%M:%S",
                )
                .unwrap()
            }),
            clock_out: None,
            absence_type: None,
            manual: false,
            validated: false,
            recorded_by: None,
            sequence,
        }
    }

    #[test]
    fn test_duplicate_rows_are_all_kept() {
        let batch = vec![
            make_record("emp_001", "2026-01-14", 1, false),
            make_record("emp_001", "2026-01-14", 2, true),
            make_record("emp_002", "2026-01-14", 3, true),
        ];
        let index = AttendanceIndex::build(&batch);

        assert_eq!(index.rows_for("emp_001", make_date("2026-01-14")).len(), 2);
        assert_eq!(index.rows_for("emp_002", make_date("2026-01-14")).len(), 1);
    }

    #[test]
    fn test_missing_pair_yields_empty_slice() {
        let batch = vec![make_record("emp_001", "2026-01-14", 1, true)];
        let index = AttendanceIndex::build(&batch);

        assert!(index.rows_for("emp_001", make_date("2026-01-15")).is_empty());
        assert!(index.rows_for("emp_404", make_date("2026-01-14")).is_empty());
    }

    #[test]
    fn test_has_clock_in_ignores_punchless_rows() {
        let batch = vec![
            make_record("emp_001", "2026-01-14", 1, false),
            make_record("emp_001", "2026-01-15", 2, true),
        ];
        let index = AttendanceIndex::build(&batch);

        assert!(!index.has_clock_in("emp_001", make_date("2026-01-14")));
        assert!(index.has_clock_in("emp_001", make_date("2026-01-15")));
    }

    #[test]
    fn test_leave_index_groups_by_employee() {
        let batch = vec![
            LeaveEpisode {
                employee_id: "emp_001".to_string(),
                kind: LeaveKind::Medical,
                start: make_date("2026-01-13"),
                end: make_date("2026-01-15"),
                status: EpisodeStatus::Active,
                type_code: None,
            },
            LeaveEpisode {
                employee_id: "emp_001".to_string(),
                kind: LeaveKind::Generic,
                start: make_date("2026-01-20"),
                end: make_date("2026-01-22"),
                status: EpisodeStatus::Active,
                type_code: None,
            },
        ];
        let index = LeaveIndex::build(&batch);

        assert_eq!(index.episodes_for("emp_001").len(), 2);
        assert!(index.episodes_for("emp_404").is_empty());
    }
}
