//! Configuration types for attendance policy.
//!
//! This module contains the strongly-typed business-policy structures that
//! are deserialized from YAML configuration files. The policy carries every
//! global business constant the core depends on (shift boundaries, day-off
//! weekday sets, late tolerance, eligible-role patterns, label keyword
//! lists) so the resolution and aggregation functions stay pure.

use serde::Deserialize;
use std::collections::HashMap;

/// Shift start thresholds in minutes since midnight.
///
/// The three shifts partition the 24-hour clock; each shift runs until the
/// next shift's start. Minutes before `first_start_minute` belong to the
/// third shift that began the previous calendar day.
#[derive(Debug, Clone, Deserialize)]
pub struct ShiftPolicy {
    /// Start of the first shift (05:25 = 325).
    pub first_start_minute: u32,
    /// Start of the second shift (13:20 = 800).
    pub second_start_minute: u32,
    /// Start of the third shift (21:00 = 1260).
    pub third_start_minute: u32,
}

/// Late-arrival classification policy.
#[derive(Debug, Clone, Deserialize)]
pub struct LatePolicy {
    /// Minutes past the scheduled start before a clock-in counts as late.
    pub tolerance_minutes: i64,
}

/// Canonical status labels emitted by the resolver.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusLabels {
    /// Label for a presence with a clock-in and no absence type.
    pub present: String,
    /// Fixed label for days covered by a medical-leave episode.
    pub medical_leave: String,
    /// Label for a scheduled day-off derived from the schedule code.
    pub day_off: String,
    /// Label for leave episodes that carry no type code of their own.
    pub generic_absence: String,
    /// Placeholder label when no data source touches the day.
    pub implicit_absence: String,
}

/// Keyword lists used to categorize free-text status labels.
///
/// Matching is case-insensitive substring, applied in the order of the
/// fields here: medical, accident, vacation, disciplinary. A label matching
/// none of them categorizes as a plain absence.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryKeywords {
    /// Keywords marking a medical status.
    pub medical: Vec<String>,
    /// Keywords marking a workplace-accident status.
    pub accident: Vec<String>,
    /// Keywords marking vacation or generic paid leave.
    pub vacation: Vec<String>,
    /// Keywords marking a disciplinary status.
    pub disciplinary: Vec<String>,
}

/// File structure of `policy.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct OperationalPolicyConfig {
    /// Shift start thresholds.
    pub shifts: ShiftPolicy,
    /// Late-arrival tolerance.
    pub late: LatePolicy,
    /// Canonical status labels.
    pub labels: StatusLabels,
}

/// File structure of `schedules.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct SchedulesConfig {
    /// Map of schedule code to its fixed day-off weekdays (0=Sunday..6=Saturday).
    pub day_off_weekdays: HashMap<String, Vec<u32>>,
}

/// File structure of `eligibility.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct EligibilityConfig {
    /// Role-name substrings that make an employee count towards dashboards.
    pub role_patterns: Vec<String>,
    /// Keyword lists for label categorization.
    pub keywords: CategoryKeywords,
    /// Labels never counted as an absence even though they are no presence.
    pub absence_exclusions: Vec<String>,
}

/// The complete attendance policy loaded from YAML files.
///
/// This struct aggregates all configuration loaded from the various
/// YAML files in a policy directory.
#[derive(Debug, Clone)]
pub struct PolicyConfig {
    /// Shift boundaries and rollover rule inputs.
    shifts: ShiftPolicy,
    /// Late-arrival tolerance.
    late: LatePolicy,
    /// Canonical status labels.
    labels: StatusLabels,
    /// Day-off weekday table per schedule code.
    day_off_weekdays: HashMap<String, Vec<u32>>,
    /// Eligible-role substrings.
    role_patterns: Vec<String>,
    /// Label categorization keywords.
    keywords: CategoryKeywords,
    /// Absence deny-list.
    absence_exclusions: Vec<String>,
}

impl PolicyConfig {
    /// Creates a new PolicyConfig from its component file structures.
    pub fn new(
        policy: OperationalPolicyConfig,
        schedules: SchedulesConfig,
        eligibility: EligibilityConfig,
    ) -> Self {
        Self {
            shifts: policy.shifts,
            late: policy.late,
            labels: policy.labels,
            day_off_weekdays: schedules.day_off_weekdays,
            role_patterns: eligibility.role_patterns,
            keywords: eligibility.keywords,
            absence_exclusions: eligibility.absence_exclusions,
        }
    }

    /// Returns the shift start thresholds.
    pub fn shifts(&self) -> &ShiftPolicy {
        &self.shifts
    }

    /// Returns the late-arrival policy.
    pub fn late(&self) -> &LatePolicy {
        &self.late
    }

    /// Returns the canonical status labels.
    pub fn labels(&self) -> &StatusLabels {
        &self.labels
    }

    /// Returns the day-off weekday table.
    pub fn day_off_weekdays(&self) -> &HashMap<String, Vec<u32>> {
        &self.day_off_weekdays
    }

    /// Returns the eligible-role substrings.
    pub fn role_patterns(&self) -> &[String] {
        &self.role_patterns
    }

    /// Returns the label categorization keywords.
    pub fn keywords(&self) -> &CategoryKeywords {
        &self.keywords
    }

    /// Returns true if the given label is on the absence deny-list.
    ///
    /// Deny-listed labels (present, rest-day variants, time bank, training)
    /// are excluded from absence tallies entirely.
    pub fn is_absence_excluded(&self, label: &str) -> bool {
        let needle = label.trim().to_lowercase();
        self.absence_exclusions
            .iter()
            .any(|excluded| needle.contains(&excluded.to_lowercase()))
    }
}

impl Default for PolicyConfig {
    /// Baseline policy matching the shipped `config/workforce` directory.
    fn default() -> Self {
        Self {
            shifts: ShiftPolicy {
                first_start_minute: 325,
                second_start_minute: 800,
                third_start_minute: 1260,
            },
            late: LatePolicy {
                tolerance_minutes: 5,
            },
            labels: StatusLabels {
                present: "present".to_string(),
                medical_leave: "medical leave".to_string(),
                day_off: "day off".to_string(),
                generic_absence: "absence".to_string(),
                implicit_absence: "-".to_string(),
            },
            day_off_weekdays: HashMap::from([
                ("A".to_string(), vec![0, 3]),
                ("B".to_string(), vec![1, 2]),
                ("C".to_string(), vec![4, 5]),
            ]),
            role_patterns: vec![
                "operator".to_string(),
                "technician".to_string(),
                "assistant".to_string(),
                "analyst".to_string(),
            ],
            keywords: CategoryKeywords {
                medical: vec!["medical".to_string(), "sick".to_string()],
                accident: vec!["accident".to_string(), "injury".to_string()],
                vacation: vec!["vacation".to_string(), "leave".to_string()],
                disciplinary: vec![
                    "suspension".to_string(),
                    "disciplinary".to_string(),
                    "warning".to_string(),
                ],
            },
            absence_exclusions: vec![
                "present".to_string(),
                "day off".to_string(),
                "rest day".to_string(),
                "time bank".to_string(),
                "training".to_string(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_shift_boundaries() {
        let config = PolicyConfig::default();
        assert_eq!(config.shifts().first_start_minute, 325);
        assert_eq!(config.shifts().second_start_minute, 800);
        assert_eq!(config.shifts().third_start_minute, 1260);
    }

    #[test]
    fn test_default_day_off_table() {
        let config = PolicyConfig::default();
        assert_eq!(config.day_off_weekdays()["A"], vec![0, 3]);
        assert_eq!(config.day_off_weekdays()["B"], vec![1, 2]);
        assert_eq!(config.day_off_weekdays()["C"], vec![4, 5]);
    }

    #[test]
    fn test_absence_exclusions_are_case_insensitive() {
        let config = PolicyConfig::default();
        assert!(config.is_absence_excluded("Present"));
        assert!(config.is_absence_excluded("TIME BANK"));
        assert!(config.is_absence_excluded("rest day (schedule)"));
        assert!(!config.is_absence_excluded("unjustified"));
    }

    #[test]
    fn test_policy_yaml_deserialization() {
        let yaml = r#"
shifts:
  first_start_minute: 325
  second_start_minute: 800
  third_start_minute: 1260
late:
  tolerance_minutes: 5
labels:
  present: "present"
  medical_leave: "medical leave"
  day_off: "day off"
  generic_absence: "absence"
  implicit_absence: "-"
"#;
        let policy: OperationalPolicyConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(policy.shifts.first_start_minute, 325);
        assert_eq!(policy.late.tolerance_minutes, 5);
        assert_eq!(policy.labels.implicit_absence, "-");
    }

    #[test]
    fn test_schedules_yaml_deserialization() {
        let yaml = r#"
day_off_weekdays:
  A: [0, 3]
  B: [1, 2]
"#;
        let schedules: SchedulesConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(schedules.day_off_weekdays["A"], vec![0, 3]);
        assert_eq!(schedules.day_off_weekdays.len(), 2);
    }
}
