//! Calculation logic for the payroll calculator.
//!
//! This module contains the record builder, the clock event recorder,
//! per-date hours and wages, payroll aggregation, lookup by first name and
//! itemised payroll reports.

mod event_recorder;
mod lookup;
mod payroll;
mod record_builder;
mod report;
mod wages;

pub use event_recorder::{
    create_time_in_event, create_time_out_event, parse_date_time, record_event,
};
pub use lookup::{find_employee_by_first_name, find_employee_by_first_name_mut};
pub use payroll::{all_wages_for, all_wages_for_with, calculate_payroll, calculate_payroll_with};
pub use record_builder::{EMPLOYEE_ROW_FIELDS, create_employee_record, create_employee_records};
pub use report::{build_payroll_report, employee_wages};
pub use wages::{hours_worked_on_date, wages_earned_on_date};
