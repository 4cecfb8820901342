//! Configuration loading for payroll runs.
//!
//! This module loads run settings and a roster of employee rows and clock
//! punches from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use timecard_payroll::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/sample").unwrap();
//! println!("Loaded {} employees", config.records().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{PayrollSettings, Punch, PunchKind, RosterConfig};
