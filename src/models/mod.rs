//! Core data models for the payroll calculator.
//!
//! This module contains the employee record, clock events and the
//! payroll report types used throughout the crate.

mod date_policy;
mod employee;
mod event;
mod payroll_report;

pub use date_policy::DatePolicy;
pub use employee::EmployeeRecord;
pub use event::{Event, EventKind};
pub use payroll_report::{DailyWage, EmployeeWages, PayrollReport};
