//! Clock event recording.
//!
//! This module parses `"YYYY-MM-DD HHMM"` date-time strings and appends the
//! resulting time-in or time-out [`Event`] to an [`EmployeeRecord`].

use tracing::debug;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{EmployeeRecord, Event, EventKind};

const EXPECTED_FORMAT: &str = "expected \"YYYY-MM-DD HHMM\"";

/// Splits a date-time string into its date key and HHMM value.
///
/// The date token is kept verbatim. The hour token must be an unsigned
/// integer; `"0900"` yields `900`.
///
/// # Errors
///
/// Returns `InvalidFormat` if the input is empty, does not contain exactly
/// two whitespace-separated tokens, or the hour token is not a number.
///
/// # Examples
///
/// ```
/// use timecard_payroll::calculation::parse_date_time;
///
/// let (date, hour) = parse_date_time("2025-03-24 0900").unwrap();
/// assert_eq!(date, "2025-03-24");
/// assert_eq!(hour, 900);
/// ```
pub fn parse_date_time(date_time: &str) -> PayrollResult<(String, u32)> {
    if date_time.trim().is_empty() {
        return Err(PayrollError::InvalidFormat {
            input: date_time.to_string(),
            message: "date-time cannot be empty".to_string(),
        });
    }

    let tokens: Vec<&str> = date_time.split_whitespace().collect();
    let [date, hour] = tokens.as_slice() else {
        return Err(PayrollError::InvalidFormat {
            input: date_time.to_string(),
            message: format!("{}, got {} token(s)", EXPECTED_FORMAT, tokens.len()),
        });
    };

    let hour = hour.parse::<u32>().map_err(|_| PayrollError::InvalidFormat {
        input: date_time.to_string(),
        message: format!("{}, hour '{}' is not a number", EXPECTED_FORMAT, hour),
    })?;

    Ok((date.to_string(), hour))
}

/// Records a clock-in on `record` and returns the updated record.
///
/// # Examples
///
/// ```
/// use timecard_payroll::calculation::{create_employee_record, create_time_in_event};
///
/// let mut record = create_employee_record(&["Loki", "God", "God of Mischief", "40"]).unwrap();
/// let record = create_time_in_event(&mut record, "2025-03-24 0900").unwrap();
/// assert_eq!(record.time_in_events.len(), 1);
/// assert_eq!(record.time_in_events[0].date, "2025-03-24");
/// ```
pub fn create_time_in_event<'a>(
    record: &'a mut EmployeeRecord,
    date_time: &str,
) -> PayrollResult<&'a mut EmployeeRecord> {
    record_event(record, EventKind::TimeIn, date_time)
}

/// Records a clock-out on `record` and returns the updated record.
pub fn create_time_out_event<'a>(
    record: &'a mut EmployeeRecord,
    date_time: &str,
) -> PayrollResult<&'a mut EmployeeRecord> {
    record_event(record, EventKind::TimeOut, date_time)
}

/// Records an event of `kind`. Nothing is appended when parsing fails.
pub fn record_event<'a>(
    record: &'a mut EmployeeRecord,
    kind: EventKind,
    date_time: &str,
) -> PayrollResult<&'a mut EmployeeRecord> {
    let (date, hour) = parse_date_time(date_time)?;

    debug!(
        employee = %record.first_name,
        kind = ?kind,
        date = %date,
        hour,
        "Recording clock event"
    );

    record.events_mut(kind).push(Event { kind, date, hour });
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn create_test_record() -> EmployeeRecord {
        EmployeeRecord::new("Loki", "God", "God of Mischief", Decimal::new(40, 0))
    }

    fn assert_invalid_format(result: PayrollResult<(String, u32)>) {
        match result {
            Err(PayrollError::InvalidFormat { .. }) => {}
            other => panic!("Expected InvalidFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_leading_zero_hour() {
        assert_eq!(
            parse_date_time("2025-03-24 0900").unwrap(),
            ("2025-03-24".to_string(), 900)
        );
    }

    #[test]
    fn test_parse_tolerates_extra_whitespace() {
        assert_eq!(
            parse_date_time("  2025-03-24\t1700 ").unwrap(),
            ("2025-03-24".to_string(), 1700)
        );
    }

    #[test]
    fn test_parse_empty_returns_invalid_format() {
        assert_invalid_format(parse_date_time(""));
        assert_invalid_format(parse_date_time("   "));
    }

    #[test]
    fn test_parse_single_token_returns_invalid_format() {
        assert_invalid_format(parse_date_time("2025-03-24"));
    }

    #[test]
    fn test_parse_three_tokens_returns_invalid_format() {
        assert_invalid_format(parse_date_time("2025-03-24 0900 PM"));
    }

    #[test]
    fn test_parse_non_numeric_hour_returns_invalid_format() {
        let result = parse_date_time("2025-03-24 nine");

        match result {
            Err(PayrollError::InvalidFormat { input, message }) => {
                assert_eq!(input, "2025-03-24 nine");
                assert!(message.contains("nine"));
            }
            other => panic!("Expected InvalidFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_time_in_appends_exactly_one_event() {
        let mut record = create_test_record();
        create_time_in_event(&mut record, "2025-03-24 0900").unwrap();

        assert_eq!(record.time_in_events.len(), 1);
        assert!(record.time_out_events.is_empty());
        assert_eq!(
            record.time_in_events[0],
            Event {
                kind: EventKind::TimeIn,
                date: "2025-03-24".to_string(),
                hour: 900,
            }
        );
    }

    #[test]
    fn test_time_out_appends_exactly_one_event() {
        let mut record = create_test_record();
        create_time_out_event(&mut record, "2025-03-24 1700").unwrap();

        assert_eq!(record.time_out_events.len(), 1);
        assert!(record.time_in_events.is_empty());
        assert_eq!(record.time_out_events[0].kind, EventKind::TimeOut);
        assert_eq!(record.time_out_events[0].date, "2025-03-24");
        assert_eq!(record.time_out_events[0].hour, 1700);
    }

    #[test]
    fn test_events_keep_recorded_order() {
        let mut record = create_test_record();
        create_time_in_event(&mut record, "2025-03-25 0900").unwrap();
        create_time_in_event(&mut record, "2025-03-24 0800").unwrap();

        let dates: Vec<&str> = record
            .time_in_events
            .iter()
            .map(|e| e.date.as_str())
            .collect();
        assert_eq!(dates, vec!["2025-03-25", "2025-03-24"]);
    }

    #[test]
    fn test_returned_record_is_chainable() {
        let mut record = create_test_record();
        let updated = create_time_in_event(&mut record, "2025-03-24 0900").unwrap();
        create_time_out_event(updated, "2025-03-24 1700").unwrap();

        assert_eq!(record.time_in_events.len(), 1);
        assert_eq!(record.time_out_events.len(), 1);
    }

    #[test]
    fn test_failed_parse_leaves_record_untouched() {
        let mut record = create_test_record();
        let result = create_time_in_event(&mut record, "2025-03-24");

        assert!(result.is_err());
        assert!(record.time_in_events.is_empty());
    }
}
