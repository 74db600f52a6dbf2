//! Configuration loading functionality.
//!
//! This module provides the [`PolicyLoader`] type for loading attendance
//! policy from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{EligibilityConfig, OperationalPolicyConfig, PolicyConfig, SchedulesConfig};

/// Loads and provides access to the attendance policy.
///
/// The `PolicyLoader` reads YAML configuration files from a directory and
/// exposes the aggregated [`PolicyConfig`] consumed by the resolution and
/// aggregation functions.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/workforce/
/// ├── policy.yaml       # Shift boundaries, late tolerance, status labels
/// ├── schedules.yaml    # Day-off weekday table per schedule code
/// └── eligibility.yaml  # Eligible roles, category keywords, deny-list
/// ```
///
/// # Example
///
/// ```no_run
/// use attendance_engine::config::PolicyLoader;
///
/// let loader = PolicyLoader::load("./config/workforce").unwrap();
/// assert_eq!(loader.config().late().tolerance_minutes, 5);
/// ```
#[derive(Debug, Clone)]
pub struct PolicyLoader {
    config: PolicyConfig,
}

impl PolicyLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/workforce")
    ///
    /// # Returns
    ///
    /// Returns a `PolicyLoader` instance on success, or an error if any
    /// required file is missing or contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let policy_path = path.join("policy.yaml");
        let policy = Self::load_yaml::<OperationalPolicyConfig>(&policy_path)?;

        let schedules_path = path.join("schedules.yaml");
        let schedules = Self::load_yaml::<SchedulesConfig>(&schedules_path)?;

        let eligibility_path = path.join("eligibility.yaml");
        let eligibility = Self::load_yaml::<EligibilityConfig>(&eligibility_path)?;

        Ok(Self {
            config: PolicyConfig::new(policy, schedules, eligibility),
        })
    }

    /// Creates a loader carrying the compiled-in baseline policy.
    ///
    /// Useful for embedding the engine where no policy directory exists; the
    /// baseline matches the shipped `config/workforce` files.
    pub fn baseline() -> Self {
        Self {
            config: PolicyConfig::default(),
        }
    }

    /// Returns the loaded policy.
    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}
