//! Timecard payroll calculator
//!
//! This crate builds employee records from positional rows, records clock-in
//! and clock-out events, and derives hours, wages and payroll totals.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
