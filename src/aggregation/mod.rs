//! Population × date-range aggregation.
//!
//! This module folds per-employee-day statuses over a population and an
//! inclusive date range into dashboard-ready metrics: snapshot counts and
//! cross-tabulations for the range end, a day-by-day absence trend, binary
//! presence/absence KPIs, and per-employee roster rows.
//!
//! The aggregation is a pure function of its inputs; every call owns its
//! accumulators, so concurrent calls need no locking.

mod batch;
mod roster;
mod snapshot;
mod trend;

pub use batch::{AttendanceIndex, LeaveIndex};
pub use roster::{EmployeeDayRow, TenureBucket, age_on, build_row, tenure_bucket};
pub use snapshot::{CrossTabs, SnapshotCounts, shift_key};
pub use trend::{TrendPoint, absence_percentage, compute_trend};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::PolicyConfig;
use crate::error::EngineResult;
use crate::models::{AttendanceRecord, DateRange, Employee, LeaveEpisode};
use crate::resolution::{is_scheduled_day_off, resolve_day_status};

/// Structural filters applied to the population before aggregation.
///
/// Mirrors the filters of the employee-directory lookup: every field is
/// optional and unset fields match everything. Label filters compare
/// case-insensitively; `search` is a substring match on the display name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopulationFilter {
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

impl PopulationFilter {
    /// Returns true when the employee passes every set filter.
    pub fn matches(&self, employee: &Employee) -> bool {
        let eq = |filter: &Option<String>, value: &str| {
            filter
                .as_deref()
                .is_none_or(|f| f.eq_ignore_ascii_case(value))
        };

        eq(&self.sector, employee.sector_label())
            && eq(&self.company, employee.company_label())
            && eq(&self.shift, employee.shift_label().unwrap_or("no shift"))
            && eq(&self.role, employee.role_label())
            && eq(&self.schedule, employee.schedule_label())
            && self.search.as_deref().is_none_or(|needle| {
                employee
                    .name
                    .to_lowercase()
                    .contains(&needle.to_lowercase())
            })
    }
}

/// Binary presence/absence KPIs for the whole range.
///
/// In single-day mode these mirror the snapshot tallies. In multi-day mode
/// they count employees fully present (clock-in on every scheduled working
/// day) and fully absent (no clock-in on any); partial attendance is
/// excluded from both sides and reported only in the roster rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeKpis {
    /// Employees counted present for the range.
    pub present: u32,
    /// Employees counted absent for the range.
    pub absent: u32,
    /// absent / (absent + present) × 100, rounded to two decimals.
    pub absent_percentage: Decimal,
}

/// The complete output of one aggregation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateResult {
    /// Headline tallies for the snapshot date.
    pub snapshot: SnapshotCounts,
    /// Binary presence/absence KPIs for the range.
    pub kpis: RangeKpis,
    /// Nested snapshot counts by shift and a second dimension.
    pub cross_tabs: CrossTabs,
    /// Day-by-day absence trend over the range.
    pub trend: Vec<TrendPoint>,
    /// Per-employee roster rows for the snapshot date.
    pub rows: Vec<EmployeeDayRow>,
}

/// Aggregates one pre-loaded batch over a population and date range.
///
/// # Arguments
///
/// * `employees` - The population snapshot from the employee directory
/// * `attendance` - All attendance rows whose operational day falls in the range
/// * `leaves` - All leave episodes overlapping the range
/// * `range` - The inclusive date range; the end doubles as snapshot date
/// * `filters` - Structural population filters
/// * `config` - The attendance policy
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidRange`] when the range end
/// precedes its start. Partial data never fails the pass: missing related
/// display names resolve to fallback labels and unknown schedule codes are
/// simply never a day-off.
pub fn aggregate(
    employees: &[Employee],
    attendance: &[AttendanceRecord],
    leaves: &[LeaveEpisode],
    range: DateRange,
    filters: &PopulationFilter,
    config: &PolicyConfig,
) -> EngineResult<AggregateResult> {
    range.validate()?;

    let attendance_index = AttendanceIndex::build(attendance);
    let leave_index = LeaveIndex::build(leaves);

    // Ineligible roles are silently excluded from aggregation entirely.
    let population: Vec<&Employee> = employees
        .iter()
        .filter(|e| filters.matches(e) && is_eligible(e, config))
        .collect();

    let snapshot_date = range.snapshot_date();
    let mut snapshot = SnapshotCounts::default();
    let mut cross_tabs = CrossTabs::default();
    let mut rows = Vec::with_capacity(population.len());

    for employee in &population {
        let day_off = employee
            .schedule_code()
            .is_some_and(|code| is_scheduled_day_off(snapshot_date, code, config));

        let status = resolve_day_status(
            employee,
            snapshot_date,
            attendance_index.rows_for(&employee.id, snapshot_date),
            leave_index.episodes_for(&employee.id),
            day_off,
            config,
        );

        rows.push(build_row(employee, &status, snapshot_date));

        if employee.is_terminated_on(snapshot_date) {
            snapshot.terminated += 1;
            continue;
        }
        if day_off {
            snapshot.day_off += 1;
            continue;
        }

        if status.is_presence() {
            snapshot.present += 1;
            if status.late {
                snapshot.late += 1;
            }
        } else if status.counts_as_absence(config) {
            snapshot.absent += 1;
        }
        cross_tabs.record(employee, &status, config);
    }

    let trend = compute_trend(&population, &attendance_index, &leave_index, &range, config);

    let kpis = if range.is_single_day() {
        RangeKpis {
            present: snapshot.present,
            absent: snapshot.absent,
            absent_percentage: absence_percentage(snapshot.present, snapshot.absent),
        }
    } else {
        range_kpis(&population, &attendance_index, &range, config)
    };

    Ok(AggregateResult {
        snapshot,
        kpis,
        cross_tabs,
        trend,
        rows,
    })
}

/// Returns true when the employee's role is counted by the dashboards.
///
/// Matching is a case-insensitive substring test against the configured
/// role patterns; employees with no role never match.
pub fn is_eligible(employee: &Employee, config: &PolicyConfig) -> bool {
    let Some(role) = employee.role.as_deref() else {
        return false;
    };
    let role = role.to_lowercase();
    config
        .role_patterns()
        .iter()
        .any(|pattern| role.contains(&pattern.to_lowercase()))
}

/// The calendar days in the range the employee is scheduled to work.
fn scheduled_working_days(
    employee: &Employee,
    range: &DateRange,
    config: &PolicyConfig,
) -> Vec<NaiveDate> {
    range
        .days()
        .into_iter()
        .filter(|date| {
            !employee
                .schedule_code()
                .is_some_and(|code| is_scheduled_day_off(*date, code, config))
        })
        .collect()
}

/// Multi-day binary KPI: fully-present vs fully-absent employees.
fn range_kpis(
    population: &[&Employee],
    attendance: &AttendanceIndex<'_>,
    range: &DateRange,
    config: &PolicyConfig,
) -> RangeKpis {
    let mut present = 0u32;
    let mut absent = 0u32;

    for employee in population {
        if employee.is_terminated_on(range.snapshot_date()) {
            continue;
        }
        let working_days = scheduled_working_days(employee, range, config);
        if working_days.is_empty() {
            continue;
        }

        let punched_days = working_days
            .iter()
            .filter(|day| attendance.has_clock_in(&employee.id, **day))
            .count();

        if punched_days == working_days.len() {
            present += 1;
        } else if punched_days == 0 {
            absent += 1;
        }
        // Partial attendance stays out of the binary KPI.
    }

    RangeKpis {
        present,
        absent,
        absent_percentage: absence_percentage(present, absent),
    }
}
