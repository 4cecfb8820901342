//! Itemised payroll reports.
//!
//! Builds a [`PayrollReport`] breaking the payroll total down per employee
//! and per date, using the same arithmetic as the aggregate functions.

use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;

use crate::error::PayrollResult;
use crate::models::{DailyWage, DatePolicy, EmployeeRecord, EmployeeWages, PayrollReport};

use super::wages::{add_wages, hours_worked_on_date, wages_for_hours};

/// Builds the per-date wage breakdown for one employee.
pub fn employee_wages(record: &EmployeeRecord, policy: DatePolicy) -> PayrollResult<EmployeeWages> {
    let mut days = Vec::new();
    let mut total = Decimal::ZERO;
    for date in policy.dates(record) {
        let hours = hours_worked_on_date(record, date)?;
        let amount = wages_for_hours(record, date, hours)?;
        total = add_wages(total, amount, &record.full_name())?;
        days.push(DailyWage {
            date: date.to_string(),
            hours,
            amount,
        });
    }

    Ok(EmployeeWages {
        first_name: record.first_name.clone(),
        family_name: record.family_name.clone(),
        pay_per_hour: record.pay_per_hour,
        days,
        total,
    })
}

/// Builds an itemised report for a payroll run.
///
/// The report total equals [`calculate_payroll_with`](super::calculate_payroll_with)
/// for the same records and policy.
///
/// # Errors
///
/// Propagates the first `MissingEvent` or `CalculationError`.
///
/// # Examples
///
/// ```
/// use timecard_payroll::calculation::{
///     build_payroll_report, create_employee_record, create_time_in_event, create_time_out_event,
/// };
/// use timecard_payroll::models::DatePolicy;
/// use rust_decimal::Decimal;
///
/// let mut record = create_employee_record(&["Loki", "God", "God of Mischief", "40"]).unwrap();
/// create_time_in_event(&mut record, "2025-03-24 0900").unwrap();
/// create_time_out_event(&mut record, "2025-03-24 1700").unwrap();
///
/// let report = build_payroll_report(&[record], DatePolicy::EachTimeIn).unwrap();
/// assert_eq!(report.total, Decimal::new(320, 0));
/// assert_eq!(report.employees[0].days[0].hours, Decimal::new(8, 0));
/// ```
pub fn build_payroll_report(
    records: &[EmployeeRecord],
    policy: DatePolicy,
) -> PayrollResult<PayrollReport> {
    let start_time = Instant::now();
    let run_id = Uuid::new_v4();

    let mut employees = Vec::with_capacity(records.len());
    let mut total = Decimal::ZERO;
    for record in records {
        let wages = employee_wages(record, policy)?;
        total = add_wages(total, wages.total, "payroll report")?;
        employees.push(wages);
    }

    info!(
        run_id = %run_id,
        employees = employees.len(),
        total = %total,
        duration_us = start_time.elapsed().as_micros(),
        "Payroll report generated"
    );

    Ok(PayrollReport {
        run_id,
        generated_at: Utc::now(),
        date_policy: policy,
        employees,
        total,
    })
}
