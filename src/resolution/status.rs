//! Per-day status resolution.
//!
//! This module merges every raw data source touching one employee-day
//! (manual corrections, leave episodes, system punches, the computed day-off
//! flag) into exactly one [`ResolvedDayStatus`], deterministically, using a
//! fixed precedence chain:
//!
//! 1. Manual override (highest creation sequence among manual rows)
//! 2. Medical-leave episode covering the day
//! 3. Other leave episode (disciplinary before generic)
//! 4. Non-manual attendance row (highest creation sequence)
//! 5. Computed day-off
//! 6. Implicit absence (no data at all)
//!
//! The first matching rule wins; later rules are not evaluated.

use chrono::NaiveDate;

use crate::config::PolicyConfig;
use crate::models::{
    AttendanceRecord, Criticality, Employee, LeaveEpisode, LeaveKind, ResolvedDayStatus,
    StatusCategory, StatusOrigin,
};

use super::late_arrival::{Punctuality, classify_arrival};

/// Resolves the canonical status for one employee and one operational day.
///
/// # Arguments
///
/// * `employee` - The employee being resolved
/// * `day` - The operational day
/// * `records` - All attendance rows stored for this (employee, day) pair
/// * `episodes` - Leave episodes applicable to the employee; only those
///   covering `day` are considered
/// * `day_off` - The computed day-off flag for `day` under the employee's
///   schedule code
/// * `config` - The attendance policy
///
/// # Example
///
/// ```
/// use attendance_engine::config::PolicyConfig;
/// use attendance_engine::models::StatusOrigin;
/// use attendance_engine::resolution::resolve_day_status;
/// use chrono::NaiveDate;
///
/// # fn employee() -> attendance_engine::models::Employee {
/// #     attendance_engine::models::Employee {
/// #         id: "emp_001".to_string(),
/// #         name: "Test".to_string(),
/// #         gender: Default::default(),
/// #         birth_date: None,
/// #         hire_date: None,
/// #         termination_date: None,
/// #         shift_start: None,
/// #         schedule: None,
/// #         sector: None,
/// #         company: None,
/// #         role: None,
/// #         shift: None,
/// #         supervisor_id: None,
/// #     }
/// # }
/// let config = PolicyConfig::default();
/// let day = NaiveDate::from_ymd_opt(2026, 1, 14).unwrap();
///
/// // No data at all resolves to the implicit-absence placeholder.
/// let status = resolve_day_status(&employee(), day, &[], &[], false, &config);
/// assert_eq!(status.origin, StatusOrigin::ImplicitAbsence);
/// assert_eq!(status.label, "-");
/// ```
pub fn resolve_day_status(
    employee: &Employee,
    day: NaiveDate,
    records: &[&AttendanceRecord],
    episodes: &[&LeaveEpisode],
    day_off: bool,
    config: &PolicyConfig,
) -> ResolvedDayStatus {
    // Rule 1: the last human correction wins over everything else.
    if let Some(manual) = records
        .iter()
        .filter(|r| r.manual)
        .max_by_key(|r| r.sequence)
    {
        return from_record(employee, day, manual, StatusOrigin::ManualOverride, config);
    }

    let covering: Vec<&LeaveEpisode> = episodes.iter().copied().filter(|e| e.covers(day)).collect();

    // Rule 2: medical leave.
    if covering.iter().any(|e| e.kind == LeaveKind::Medical) {
        return ResolvedDayStatus {
            employee_id: employee.id.clone(),
            day,
            label: config.labels().medical_leave.clone(),
            origin: StatusOrigin::MedicalLeave,
            category: StatusCategory::Medical,
            criticality: Criticality::Low,
            late: false,
            clock_in: None,
            clock_out: None,
        };
    }

    // Rule 3: other leave, disciplinary episodes before generic ones.
    let other = covering
        .iter()
        .find(|e| e.kind == LeaveKind::Disciplinary)
        .or_else(|| covering.iter().find(|e| e.kind == LeaveKind::Generic));
    if let Some(episode) = other {
        let label = episode
            .type_code
            .clone()
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| config.labels().generic_absence.clone());
        let category = match episode.kind {
            LeaveKind::Disciplinary => StatusCategory::Disciplinary,
            _ => categorize_label(&label, config),
        };
        return ResolvedDayStatus {
            employee_id: employee.id.clone(),
            day,
            criticality: derive_criticality(category, StatusOrigin::OtherLeave),
            label,
            origin: StatusOrigin::OtherLeave,
            category,
            late: false,
            clock_in: None,
            clock_out: None,
        };
    }

    // Rule 4: a system-generated attendance row exists for the pair.
    if let Some(record) = records.iter().max_by_key(|r| r.sequence) {
        return from_record(employee, day, record, StatusOrigin::AttendanceRecord, config);
    }

    // Rule 5: the schedule marks the day as a rest day.
    if day_off {
        return ResolvedDayStatus {
            employee_id: employee.id.clone(),
            day,
            label: config.labels().day_off.clone(),
            origin: StatusOrigin::ComputedDayOff,
            category: StatusCategory::DayOff,
            criticality: Criticality::Low,
            late: false,
            clock_in: None,
            clock_out: None,
        };
    }

    // Rule 6: nothing touched the day; an unexplained absence is always high.
    ResolvedDayStatus {
        employee_id: employee.id.clone(),
        day,
        label: config.labels().implicit_absence.clone(),
        origin: StatusOrigin::ImplicitAbsence,
        category: StatusCategory::Absence,
        criticality: Criticality::High,
        late: false,
        clock_in: None,
        clock_out: None,
    }
}

/// Builds a resolved status from the winning attendance row.
fn from_record(
    employee: &Employee,
    day: NaiveDate,
    record: &AttendanceRecord,
    origin: StatusOrigin,
    config: &PolicyConfig,
) -> ResolvedDayStatus {
    let label = match &record.absence_type {
        Some(absence) => absence.label().to_string(),
        None if record.has_clock_in() => config.labels().present.clone(),
        None => config.labels().implicit_absence.clone(),
    };

    let category = categorize_label(&label, config);
    let late = category == StatusCategory::Presence
        && classify_arrival(
            employee.shift_start,
            record.clock_in,
            config.late().tolerance_minutes,
        ) == Punctuality::Late;

    ResolvedDayStatus {
        employee_id: employee.id.clone(),
        day,
        criticality: derive_criticality(category, origin),
        label,
        origin,
        category,
        late,
        clock_in: record.clock_in,
        clock_out: record.clock_out,
    }
}

/// Categorizes a free-text status label by keyword match.
///
/// The match order is fixed: present, medical, accident, vacation,
/// disciplinary; anything else is a plain absence. Matching is
/// case-insensitive substring over the configured keyword lists.
fn categorize_label(label: &str, config: &PolicyConfig) -> StatusCategory {
    let needle = label.trim().to_lowercase();
    let keywords = config.keywords();

    let matches = |list: &[String]| list.iter().any(|k| needle.contains(&k.to_lowercase()));

    if needle.contains(&config.labels().present.to_lowercase()) {
        StatusCategory::Presence
    } else if matches(&keywords.medical) {
        StatusCategory::Medical
    } else if matches(&keywords.accident) {
        StatusCategory::Accident
    } else if matches(&keywords.vacation) {
        StatusCategory::Vacation
    } else if matches(&keywords.disciplinary) {
        StatusCategory::Disciplinary
    } else {
        StatusCategory::Absence
    }
}

/// Derives the attention level from category and origin.
fn derive_criticality(category: StatusCategory, origin: StatusOrigin) -> Criticality {
    if category == StatusCategory::Accident || origin == StatusOrigin::ImplicitAbsence {
        Criticality::High
    } else if category == StatusCategory::Disciplinary {
        Criticality::Medium
    } else {
        Criticality::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AbsenceType, EpisodeStatus, Gender};
    use chrono::{NaiveDateTime, NaiveTime};

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_employee() -> Employee {
        Employee {
            id: "emp_001".to_string(),
            name: "Alice Operator".to_string(),
            gender: Gender::Female,
            birth_date: None,
            hire_date: None,
            termination_date: None,
            shift_start: Some(NaiveTime::from_hms_opt(5, 25, 0).unwrap()),
            schedule: Some("A".to_string()),
            sector: Some("Assembly".to_string()),
            company: Some("Acme".to_string()),
            role: Some("Machine Operator".to_string()),
            shift: Some("Shift 1".to_string()),
            supervisor_id: None,
        }
    }

    fn make_record(sequence: u64, manual: bool, clock_in: Option<&str>) -> AttendanceRecord {
        AttendanceRecord {
            employee_id: "emp_001".to_string(),
            day: make_date("2026-01-14"),
            clock_in: clock_in.map(|t| make_datetime("2026-01-14", t)),
            clock_out: None,
            absence_type: None,
            manual,
            validated: false,
            recorded_by: None,
            sequence,
        }
    }

    fn make_episode(kind: LeaveKind, type_code: Option<&str>) -> LeaveEpisode {
        LeaveEpisode {
            employee_id: "emp_001".to_string(),
            kind,
            start: make_date("2026-01-13"),
            end: make_date("2026-01-15"),
            status: EpisodeStatus::Active,
            type_code: type_code.map(str::to_string),
        }
    }

    fn with_absence(mut record: AttendanceRecord, code: &str, description: &str) -> AttendanceRecord {
        record.absence_type = Some(AbsenceType {
            code: code.to_string(),
            description: description.to_string(),
        });
        record
    }

    // ==========================================================================
    // SR-001: manual override beats a medical episode covering the same day
    // ==========================================================================
    #[test]
    fn test_sr_001_manual_beats_medical_leave() {
        let config = PolicyConfig::default();
        let employee = make_employee();
        let record = with_absence(make_record(10, true, None), "X", "unjustified absence");
        let episode = make_episode(LeaveKind::Medical, None);

        let status = resolve_day_status(
            &employee,
            make_date("2026-01-14"),
            &[&record],
            &[&episode],
            false,
            &config,
        );

        assert_eq!(status.origin, StatusOrigin::ManualOverride);
        assert_eq!(status.label, "unjustified absence");
    }

    // ==========================================================================
    // SR-002: among manual duplicates the highest sequence wins
    // ==========================================================================
    #[test]
    fn test_sr_002_last_manual_correction_wins() {
        let config = PolicyConfig::default();
        let employee = make_employee();
        let older = with_absence(make_record(5, true, None), "A1", "first correction");
        let newer = with_absence(make_record(9, true, None), "A2", "second correction");
        let system = make_record(20, false, Some("05:25:00"));

        let status = resolve_day_status(
            &employee,
            make_date("2026-01-14"),
            &[&system, &older, &newer],
            &[],
            false,
            &config,
        );

        assert_eq!(status.origin, StatusOrigin::ManualOverride);
        assert_eq!(status.label, "second correction");
    }

    // ==========================================================================
    // SR-003: medical episode beats other episodes and raw punches
    // ==========================================================================
    #[test]
    fn test_sr_003_medical_beats_other_leave_and_punches() {
        let config = PolicyConfig::default();
        let employee = make_employee();
        let punch = make_record(1, false, Some("05:25:00"));
        let medical = make_episode(LeaveKind::Medical, None);
        let generic = make_episode(LeaveKind::Generic, Some("vacation"));

        let status = resolve_day_status(
            &employee,
            make_date("2026-01-14"),
            &[&punch],
            &[&generic, &medical],
            false,
            &config,
        );

        assert_eq!(status.origin, StatusOrigin::MedicalLeave);
        assert_eq!(status.label, "medical leave");
        assert_eq!(status.category, StatusCategory::Medical);
        assert_eq!(status.criticality, Criticality::Low);
    }

    #[test]
    fn test_episode_outside_day_is_ignored() {
        let config = PolicyConfig::default();
        let employee = make_employee();
        let medical = make_episode(LeaveKind::Medical, None);

        // 2026-01-16 is outside the 13th..15th episode window.
        let status = resolve_day_status(
            &employee,
            make_date("2026-01-16"),
            &[],
            &[&medical],
            false,
            &config,
        );

        assert_eq!(status.origin, StatusOrigin::ImplicitAbsence);
    }

    #[test]
    fn test_cancelled_episode_is_ignored() {
        let config = PolicyConfig::default();
        let employee = make_employee();
        let mut medical = make_episode(LeaveKind::Medical, None);
        medical.status = EpisodeStatus::Cancelled;

        let status = resolve_day_status(
            &employee,
            make_date("2026-01-14"),
            &[],
            &[&medical],
            false,
            &config,
        );

        assert_eq!(status.origin, StatusOrigin::ImplicitAbsence);
    }

    #[test]
    fn test_disciplinary_episode_is_medium_criticality() {
        let config = PolicyConfig::default();
        let employee = make_employee();
        let episode = make_episode(LeaveKind::Disciplinary, Some("suspension"));

        let status = resolve_day_status(
            &employee,
            make_date("2026-01-14"),
            &[],
            &[&episode],
            false,
            &config,
        );

        assert_eq!(status.origin, StatusOrigin::OtherLeave);
        assert_eq!(status.label, "suspension");
        assert_eq!(status.category, StatusCategory::Disciplinary);
        assert_eq!(status.criticality, Criticality::Medium);
    }

    #[test]
    fn test_disciplinary_episode_wins_over_generic() {
        let config = PolicyConfig::default();
        let employee = make_employee();
        let generic = make_episode(LeaveKind::Generic, Some("vacation"));
        let disciplinary = make_episode(LeaveKind::Disciplinary, Some("suspension"));

        let status = resolve_day_status(
            &employee,
            make_date("2026-01-14"),
            &[],
            &[&generic, &disciplinary],
            false,
            &config,
        );

        assert_eq!(status.label, "suspension");
        assert_eq!(status.category, StatusCategory::Disciplinary);
    }

    #[test]
    fn test_generic_episode_without_code_uses_generic_label() {
        let config = PolicyConfig::default();
        let employee = make_employee();
        let episode = make_episode(LeaveKind::Generic, None);

        let status = resolve_day_status(
            &employee,
            make_date("2026-01-14"),
            &[],
            &[&episode],
            false,
            &config,
        );

        assert_eq!(status.label, "absence");
        assert_eq!(status.category, StatusCategory::Absence);
    }

    #[test]
    fn test_punch_with_clock_in_resolves_present() {
        let config = PolicyConfig::default();
        let employee = make_employee();
        let mut punch = make_record(1, false, Some("05:25:00"));
        punch.clock_out = Some(make_datetime("2026-01-14", "13:40:00"));

        let status = resolve_day_status(
            &employee,
            make_date("2026-01-14"),
            &[&punch],
            &[],
            false,
            &config,
        );

        assert_eq!(status.origin, StatusOrigin::AttendanceRecord);
        assert_eq!(status.label, "present");
        assert_eq!(status.category, StatusCategory::Presence);
        assert!(!status.late);
        // Clock-in/out timestamps are carried through.
        assert_eq!(status.clock_in, punch.clock_in);
        assert_eq!(status.clock_out, punch.clock_out);
    }

    #[test]
    fn test_punch_past_tolerance_is_tagged_late_but_stays_present() {
        let config = PolicyConfig::default();
        let employee = make_employee();
        let punch = make_record(1, false, Some("05:35:00"));

        let status = resolve_day_status(
            &employee,
            make_date("2026-01-14"),
            &[&punch],
            &[],
            false,
            &config,
        );

        assert!(status.late);
        assert_eq!(status.label, "present");
        assert!(status.is_presence());
    }

    #[test]
    fn test_non_manual_duplicates_pick_highest_sequence() {
        let config = PolicyConfig::default();
        let employee = make_employee();
        let older = with_absence(make_record(3, false, None), "F1", "training");
        let newer = make_record(7, false, Some("05:25:00"));

        let status = resolve_day_status(
            &employee,
            make_date("2026-01-14"),
            &[&older, &newer],
            &[],
            false,
            &config,
        );

        assert_eq!(status.label, "present");
    }

    // ==========================================================================
    // SR-004: day-off flag applies only when no record or episode exists
    // ==========================================================================
    #[test]
    fn test_sr_004_day_off_resolution() {
        let config = PolicyConfig::default();
        let employee = make_employee();

        let status = resolve_day_status(
            &employee,
            make_date("2026-01-14"),
            &[],
            &[],
            true,
            &config,
        );

        assert_eq!(status.origin, StatusOrigin::ComputedDayOff);
        assert_eq!(status.label, "day off");
        assert_eq!(status.category, StatusCategory::DayOff);
        assert!(!status.counts_as_absence(&config));
    }

    #[test]
    fn test_record_beats_day_off_flag() {
        let config = PolicyConfig::default();
        let employee = make_employee();
        let punch = make_record(1, false, Some("05:25:00"));

        let status = resolve_day_status(
            &employee,
            make_date("2026-01-14"),
            &[&punch],
            &[],
            true,
            &config,
        );

        assert_eq!(status.origin, StatusOrigin::AttendanceRecord);
        assert_eq!(status.label, "present");
    }

    // ==========================================================================
    // SR-005: no data at all resolves to a high-criticality implicit absence
    // ==========================================================================
    #[test]
    fn test_sr_005_implicit_absence_is_high_criticality() {
        let config = PolicyConfig::default();
        let employee = make_employee();

        let status = resolve_day_status(
            &employee,
            make_date("2026-01-14"),
            &[],
            &[],
            false,
            &config,
        );

        assert_eq!(status.origin, StatusOrigin::ImplicitAbsence);
        assert_eq!(status.label, "-");
        assert_eq!(status.category, StatusCategory::Absence);
        assert_eq!(status.criticality, Criticality::High);
        assert!(status.counts_as_absence(&config));
    }

    #[test]
    fn test_accident_label_is_high_criticality() {
        let config = PolicyConfig::default();
        let employee = make_employee();
        let record = with_absence(make_record(1, false, None), "ACC", "workplace accident");

        let status = resolve_day_status(
            &employee,
            make_date("2026-01-14"),
            &[&record],
            &[],
            false,
            &config,
        );

        assert_eq!(status.category, StatusCategory::Accident);
        assert_eq!(status.criticality, Criticality::High);
    }

    #[test]
    fn test_categorize_label_keyword_order() {
        let config = PolicyConfig::default();
        // Medical wins over the vacation keyword "leave".
        assert_eq!(
            categorize_label("sick leave", &config),
            StatusCategory::Medical
        );
        assert_eq!(
            categorize_label("paternity leave", &config),
            StatusCategory::Vacation
        );
        assert_eq!(
            categorize_label("written warning", &config),
            StatusCategory::Disciplinary
        );
        assert_eq!(categorize_label("no-show", &config), StatusCategory::Absence);
        assert_eq!(
            categorize_label("Present", &config),
            StatusCategory::Presence
        );
    }

    #[test]
    fn test_manual_present_correction_is_late_classified() {
        let config = PolicyConfig::default();
        let employee = make_employee();
        // Manual row marking presence with a late punch keeps the late tag.
        let record = with_absence(make_record(2, true, Some("05:40:00")), "P", "present");

        let status = resolve_day_status(
            &employee,
            make_date("2026-01-14"),
            &[&record],
            &[],
            false,
            &config,
        );

        assert_eq!(status.origin, StatusOrigin::ManualOverride);
        assert!(status.late);
    }
}
