//! Employee record construction.
//!
//! This module turns positional input rows of the form
//! `[first_name, family_name, title, pay_per_hour]` into [`EmployeeRecord`]s.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::{PayrollError, PayrollResult};
use crate::models::EmployeeRecord;

/// Number of positional fields an employee row must carry.
pub const EMPLOYEE_ROW_FIELDS: usize = 4;

/// Builds an employee record from a positional row.
///
/// Fields beyond the fourth are ignored. The pay rate must parse as a
/// non-negative decimal number.
///
/// # Errors
///
/// Returns `InvalidInput` if the row has fewer than four fields or the pay
/// rate is not a non-negative number.
///
/// # Examples
///
/// ```
/// use timecard_payroll::calculation::create_employee_record;
/// use rust_decimal::Decimal;
///
/// let record = create_employee_record(&["Loki", "God", "God of Mischief", "40"]).unwrap();
/// assert_eq!(record.first_name, "Loki");
/// assert_eq!(record.pay_per_hour, Decimal::new(40, 0));
/// assert!(record.time_in_events.is_empty());
/// ```
pub fn create_employee_record<S: AsRef<str>>(row: &[S]) -> PayrollResult<EmployeeRecord> {
    if row.len() < EMPLOYEE_ROW_FIELDS {
        return Err(PayrollError::InvalidInput {
            field: "row".to_string(),
            message: format!(
                "expected {} fields, got {}",
                EMPLOYEE_ROW_FIELDS,
                row.len()
            ),
        });
    }

    let pay_per_hour = parse_pay_rate(row[3].as_ref())?;

    Ok(EmployeeRecord::new(
        row[0].as_ref(),
        row[1].as_ref(),
        row[2].as_ref(),
        pay_per_hour,
    ))
}

/// Builds one record per row, preserving input order.
///
/// The first malformed row aborts the whole batch.
///
/// # Examples
///
/// ```
/// use timecard_payroll::calculation::create_employee_records;
///
/// let records = create_employee_records(&[
///     vec!["Loki", "God", "God of Mischief", "40"],
///     vec!["Natalia", "Romanoff", "Black Widow", "50"],
/// ])
/// .unwrap();
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[1].first_name, "Natalia");
/// ```
pub fn create_employee_records<S: AsRef<str>>(
    rows: &[Vec<S>],
) -> PayrollResult<Vec<EmployeeRecord>> {
    rows.iter()
        .map(|row| create_employee_record(row))
        .collect()
}

fn parse_pay_rate(raw: &str) -> PayrollResult<Decimal> {
    let rate = Decimal::from_str(raw.trim()).map_err(|_| PayrollError::InvalidInput {
        field: "pay_per_hour".to_string(),
        message: format!("'{}' is not a number", raw),
    })?;

    if rate.is_sign_negative() && !rate.is_zero() {
        return Err(PayrollError::InvalidInput {
            field: "pay_per_hour".to_string(),
            message: format!("'{}' must not be negative", raw),
        });
    }

    Ok(rate)
}
