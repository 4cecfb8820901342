//! Configuration types for payroll runs.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

use crate::models::{DatePolicy, EventKind};

fn default_currency() -> String {
    "AUD".to_string()
}

/// Settings from `settings.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PayrollSettings {
    /// How employee wages enumerate dates.
    #[serde(default)]
    pub date_policy: DatePolicy,
    /// Currency label for display. No conversion is ever applied.
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for PayrollSettings {
    fn default() -> Self {
        Self {
            date_policy: DatePolicy::default(),
            currency: default_currency(),
        }
    }
}

/// Kind of a roster punch, spelled `time_in` / `time_out` in YAML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PunchKind {
    /// Clock in.
    TimeIn,
    /// Clock out.
    TimeOut,
}

impl From<PunchKind> for EventKind {
    fn from(kind: PunchKind) -> Self {
        match kind {
            PunchKind::TimeIn => EventKind::TimeIn,
            PunchKind::TimeOut => EventKind::TimeOut,
        }
    }
}

/// A clock punch for a named employee.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Punch {
    /// First name of the employee the punch belongs to.
    pub first_name: String,
    /// Whether this is a clock-in or clock-out.
    pub kind: PunchKind,
    /// The `YYYY-MM-DD HHMM` date-time.
    pub at: String,
}

/// Roster from `roster.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RosterConfig {
    /// Positional employee rows `[first_name, family_name, title, pay_per_hour]`.
    pub employees: Vec<Vec<String>>,
    /// Punches applied in file order.
    #[serde(default)]
    pub punches: Vec<Punch>,
}
