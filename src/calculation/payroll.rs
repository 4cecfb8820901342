//! Wage aggregation across dates and employees.

use rust_decimal::Decimal;
use tracing::info;

use crate::error::PayrollResult;
use crate::models::{DatePolicy, EmployeeRecord};

use super::wages::{add_wages, wages_earned_on_date};

/// Sums the wages earned on the date of every time-in event.
///
/// A date clocked into twice is paid twice. Use [`all_wages_for_with`] and
/// [`DatePolicy::DistinctDates`] to pay each date once.
///
/// # Errors
///
/// Returns `MissingEvent` for the first time-in date lacking a time-out, and
/// `CalculationError` if the total does not fit in a decimal.
///
/// # Examples
///
/// ```
/// use timecard_payroll::calculation::{
///     all_wages_for, create_employee_record, create_time_in_event, create_time_out_event,
/// };
/// use rust_decimal::Decimal;
///
/// let mut record = create_employee_record(&["Loki", "God", "God of Mischief", "40"]).unwrap();
/// for date in ["2025-03-24", "2025-03-25"] {
///     create_time_in_event(&mut record, &format!("{} 0900", date)).unwrap();
///     create_time_out_event(&mut record, &format!("{} 1700", date)).unwrap();
/// }
///
/// assert_eq!(all_wages_for(&record).unwrap(), Decimal::new(640, 0));
/// ```
pub fn all_wages_for(record: &EmployeeRecord) -> PayrollResult<Decimal> {
    all_wages_for_with(record, DatePolicy::EachTimeIn)
}

/// Sums an employee's wages over the dates selected by `policy`.
pub fn all_wages_for_with(record: &EmployeeRecord, policy: DatePolicy) -> PayrollResult<Decimal> {
    let mut total = Decimal::ZERO;
    for date in policy.dates(record) {
        total = add_wages(total, wages_earned_on_date(record, date)?, &record.full_name())?;
    }
    Ok(total)
}

/// Sums [`all_wages_for`] over every record.
///
/// # Errors
///
/// Propagates the first `MissingEvent` or `CalculationError`; no partial
/// total is returned.
pub fn calculate_payroll(records: &[EmployeeRecord]) -> PayrollResult<Decimal> {
    calculate_payroll_with(records, DatePolicy::EachTimeIn)
}

/// Sums [`all_wages_for_with`] over every record under `policy`.
pub fn calculate_payroll_with(
    records: &[EmployeeRecord],
    policy: DatePolicy,
) -> PayrollResult<Decimal> {
    let mut total = Decimal::ZERO;
    for record in records {
        total = add_wages(total, all_wages_for_with(record, policy)?, "payroll")?;
    }

    info!(
        employees = records.len(),
        date_policy = ?policy,
        total = %total,
        "Payroll calculated"
    );

    Ok(total)
}
