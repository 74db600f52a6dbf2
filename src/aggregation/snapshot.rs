//! Snapshot counts and cross-tabulations.
//!
//! The snapshot date (range end) gets a breakdown of the population's
//! current state: headline tallies plus nested counts keyed by shift and a
//! second dimension (sector, gender, status label, company). BTreeMaps keep
//! the output ordering deterministic.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::PolicyConfig;
use crate::models::{Employee, ResolvedDayStatus};
use crate::resolution::resolve_operational_day;

/// Headline tallies for the snapshot date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotCounts {
    /// Employees present (on time or late).
    pub present: u32,
    /// Employees present but past the late tolerance (subset of `present`).
    pub late: u32,
    /// Employees counted as absent (deny-listed labels excluded).
    pub absent: u32,
    /// Employees short-circuited because their schedule rests the snapshot date.
    pub day_off: u32,
    /// Employees terminated on or before the snapshot date.
    pub terminated: u32,
}

/// Nested snapshot counts: shift label → second dimension → count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossTabs {
    /// {shift → {sector → count}}.
    pub by_sector: BTreeMap<String, BTreeMap<String, u32>>,
    /// {shift → {gender → count}}.
    pub by_gender: BTreeMap<String, BTreeMap<String, u32>>,
    /// {shift → {status label → count}}.
    pub by_status: BTreeMap<String, BTreeMap<String, u32>>,
    /// {shift → {company → count}}.
    pub by_company: BTreeMap<String, BTreeMap<String, u32>>,
}

impl CrossTabs {
    /// Folds one employee's snapshot status into every tabulation.
    pub fn record(&mut self, employee: &Employee, status: &ResolvedDayStatus, config: &PolicyConfig) {
        let shift = shift_key(employee, status, config);

        bump(&mut self.by_sector, &shift, employee.sector_label());
        bump(&mut self.by_gender, &shift, &employee.gender.to_string());
        bump(&mut self.by_status, &shift, &status.label);
        bump(&mut self.by_company, &shift, employee.company_label());
    }
}

/// Increments one nested counter.
fn bump(tab: &mut BTreeMap<String, BTreeMap<String, u32>>, shift: &str, key: &str) {
    *tab.entry(shift.to_string())
        .or_default()
        .entry(key.to_string())
        .or_insert(0) += 1;
}

/// Chooses the shift key for an employee's snapshot status.
///
/// The assigned shift display name wins. When the assignment is missing but
/// the status carries a clock-in punch, the shift slot is derived from the
/// punch via the operational clock; otherwise the "no shift" fallback.
pub fn shift_key(employee: &Employee, status: &ResolvedDayStatus, config: &PolicyConfig) -> String {
    if let Some(label) = employee.shift_label() {
        return label.to_string();
    }
    if let Some(clock_in) = status.clock_in {
        return resolve_operational_day(clock_in, config.shifts())
            .shift
            .label()
            .to_string();
    }
    "no shift".to_string()
}
