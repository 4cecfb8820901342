//! Hours and wages for a single date.
//!
//! Clock times are HHMM integers, and hours are the difference of the two
//! values divided by 100. This is only exact when both events fall on whole
//! hours with matching minutes (0900 to 1730 yields 8.3, not 8.5).

use rust_decimal::Decimal;
use tracing::warn;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{EmployeeRecord, EventKind};

/// Divisor converting an HHMM difference into hours.
const HHMM_SCALE: i64 = 100;

/// Calculates the hours worked on `date`.
///
/// Uses the first time-in and the first time-out recorded for the date.
/// A time-out earlier than the time-in yields negative hours.
///
/// # Errors
///
/// Returns `MissingEvent` if either event is absent for the date.
///
/// # Examples
///
/// ```
/// use timecard_payroll::calculation::{
///     create_employee_record, create_time_in_event, create_time_out_event, hours_worked_on_date,
/// };
/// use rust_decimal::Decimal;
///
/// let mut record = create_employee_record(&["Loki", "God", "God of Mischief", "40"]).unwrap();
/// create_time_in_event(&mut record, "2025-03-24 0900").unwrap();
/// create_time_out_event(&mut record, "2025-03-24 1700").unwrap();
///
/// assert_eq!(hours_worked_on_date(&record, "2025-03-24").unwrap(), Decimal::new(8, 0));
/// ```
pub fn hours_worked_on_date(record: &EmployeeRecord, date: &str) -> PayrollResult<Decimal> {
    let time_in = record.first_event_on(EventKind::TimeIn, date);
    let time_out = record.first_event_on(EventKind::TimeOut, date);

    let (Some(time_in), Some(time_out)) = (time_in, time_out) else {
        warn!(
            employee = %record.first_name,
            date = %date,
            has_time_in = time_in.is_some(),
            has_time_out = time_out.is_some(),
            "Unpaired clock events"
        );
        return Err(PayrollError::MissingEvent {
            date: date.to_string(),
        });
    };

    let difference = i64::from(time_out.hour) - i64::from(time_in.hour);
    Ok(Decimal::new(difference, 0) / Decimal::new(HHMM_SCALE, 0))
}

/// Calculates the wages earned on `date` (hours * pay_per_hour).
///
/// # Errors
///
/// Propagates `MissingEvent` from [`hours_worked_on_date`], and returns
/// `CalculationError` if the product does not fit in a decimal.
pub fn wages_earned_on_date(record: &EmployeeRecord, date: &str) -> PayrollResult<Decimal> {
    let hours = hours_worked_on_date(record, date)?;
    wages_for_hours(record, date, hours)
}

pub(crate) fn wages_for_hours(
    record: &EmployeeRecord,
    date: &str,
    hours: Decimal,
) -> PayrollResult<Decimal> {
    hours
        .checked_mul(record.pay_per_hour)
        .ok_or_else(|| PayrollError::CalculationError {
            message: format!(
                "wages overflowed for {} on {}",
                record.full_name(),
                date
            ),
        })
}

/// Adds `amount` to `total`, failing instead of overflowing.
pub(crate) fn add_wages(total: Decimal, amount: Decimal, context: &str) -> PayrollResult<Decimal> {
    total
        .checked_add(amount)
        .ok_or_else(|| PayrollError::CalculationError {
            message: format!("total overflowed for {}", context),
        })
}
