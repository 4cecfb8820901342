//! Error types for the payroll calculator.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the record builder, event recorder, wage calculator
//! and configuration loader can report.

use thiserror::Error;

/// The main error type for the payroll calculator.
///
/// # Example
///
/// ```
/// use timecard_payroll::error::PayrollError;
///
/// let error = PayrollError::MissingEvent {
///     date: "2025-03-24".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Missing time-in or time-out event for date: 2025-03-24"
/// );
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// An employee row or roster entry was malformed.
    #[error("Invalid input field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A date-time string did not match `YYYY-MM-DD HHMM`.
    #[error("Invalid date-time '{input}': {message}")]
    InvalidFormat {
        /// The offending input.
        input: String,
        /// A description of the format problem.
        message: String,
    },

    /// Hours were requested for a date lacking a time-in or time-out event.
    #[error("Missing time-in or time-out event for date: {date}")]
    MissingEvent {
        /// The date key that could not be paired.
        date: String,
    },

    /// A wage amount or total does not fit in a decimal.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_displays_field_and_message() {
        let error = PayrollError::InvalidInput {
            field: "pay_per_hour".to_string(),
            message: "must be a non-negative number".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid input field 'pay_per_hour': must be a non-negative number"
        );
    }

    #[test]
    fn test_invalid_format_displays_input_and_message() {
        let error = PayrollError::InvalidFormat {
            input: "2025-03-24".to_string(),
            message: "expected \"YYYY-MM-DD HHMM\"".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid date-time '2025-03-24': expected \"YYYY-MM-DD HHMM\""
        );
    }

    #[test]
    fn test_missing_event_displays_date() {
        let error = PayrollError::MissingEvent {
            date: "2025-03-25".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Missing time-in or time-out event for date: 2025-03-25"
        );
    }

    #[test]
    fn test_calculation_error_displays_message() {
        let error = PayrollError::CalculationError {
            message: "wages overflowed for Loki on 2025-03-24".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Calculation error: wages overflowed for Loki on 2025-03-24"
        );
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = PayrollError::ConfigNotFound {
            path: "/missing/roster.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/roster.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = PayrollError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<PayrollError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_missing_event() -> PayrollResult<()> {
            Err(PayrollError::MissingEvent {
                date: "2025-03-24".to_string(),
            })
        }

        fn propagates_error() -> PayrollResult<()> {
            returns_missing_event()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
