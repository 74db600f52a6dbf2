//! Attendance policy configuration.
//!
//! This module handles loading and accessing the business-policy constants
//! (shift boundaries, day-off tables, late tolerance, eligibility patterns,
//! label keyword lists) from YAML configuration files.

mod loader;
mod types;

pub use loader::PolicyLoader;
pub use types::{
    CategoryKeywords, EligibilityConfig, LatePolicy, OperationalPolicyConfig, PolicyConfig,
    SchedulesConfig, ShiftPolicy, StatusLabels,
};
