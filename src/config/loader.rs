//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a payroll run
//! from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::calculation::{
    build_payroll_report, calculate_payroll_with, create_employee_records,
    find_employee_by_first_name, find_employee_by_first_name_mut, record_event,
};
use crate::error::{PayrollError, PayrollResult};
use crate::models::{EmployeeRecord, PayrollReport};

use super::types::{PayrollSettings, RosterConfig};

/// Loads a payroll run and provides access to its records.
///
/// # Directory Structure
///
/// ```text
/// config/sample/
/// ├── settings.yaml   # Date policy and currency label
/// └── roster.yaml     # Employee rows and clock punches
/// ```
///
/// # Example
///
/// ```no_run
/// use timecard_payroll::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/sample").unwrap();
/// println!("Payroll: {} {}", loader.calculate_payroll().unwrap(), loader.settings().currency);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    settings: PayrollSettings,
    records: Vec<EmployeeRecord>,
}

impl ConfigLoader {
    /// Loads `settings.yaml` and `roster.yaml` from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - Either file is missing (`ConfigNotFound`)
    /// - Either file contains invalid YAML (`ConfigParseError`)
    /// - An employee row or punch is malformed (`InvalidInput`, `InvalidFormat`)
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();

        let settings = Self::load_yaml::<PayrollSettings>(&path.join("settings.yaml"))?;
        let roster = Self::load_yaml::<RosterConfig>(&path.join("roster.yaml"))?;

        let loader = Self::from_parts(settings, roster)?;

        info!(
            path = %path.display(),
            employees = loader.records.len(),
            date_policy = ?loader.settings.date_policy,
            "Payroll configuration loaded"
        );

        Ok(loader)
    }

    /// Builds records from `roster` and applies its punches in order.
    ///
    /// A punch naming an unknown first name fails with `InvalidInput`.
    pub fn from_parts(settings: PayrollSettings, roster: RosterConfig) -> PayrollResult<Self> {
        let mut records = create_employee_records(&roster.employees)?;

        for (index, punch) in roster.punches.iter().enumerate() {
            let record = find_employee_by_first_name_mut(&mut records, &punch.first_name)
                .ok_or_else(|| PayrollError::InvalidInput {
                    field: format!("punches[{}].first_name", index),
                    message: format!("no employee named '{}'", punch.first_name),
                })?;
            record_event(record, punch.kind.into(), &punch.at)?;
        }

        Ok(Self { settings, records })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> PayrollResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| PayrollError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the run settings.
    pub fn settings(&self) -> &PayrollSettings {
        &self.settings
    }

    /// Returns the loaded records, in roster order.
    pub fn records(&self) -> &[EmployeeRecord] {
        &self.records
    }

    /// Consumes the loader, returning its records.
    pub fn into_records(self) -> Vec<EmployeeRecord> {
        self.records
    }

    /// Gets an employee by first name.
    pub fn get_employee(&self, first_name: &str) -> Option<&EmployeeRecord> {
        find_employee_by_first_name(&self.records, first_name)
    }

    /// Calculates the payroll total under the configured date policy.
    pub fn calculate_payroll(&self) -> PayrollResult<Decimal> {
        calculate_payroll_with(&self.records, self.settings.date_policy)
    }

    /// Builds an itemised report under the configured date policy.
    pub fn report(&self) -> PayrollResult<PayrollReport> {
        build_payroll_report(&self.records, self.settings.date_policy)
    }
}
