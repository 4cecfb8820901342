//! Employee lookup by first name.

use crate::models::EmployeeRecord;

/// Returns the first record whose first name equals `first_name` exactly.
///
/// Matching is case-sensitive.
///
/// # Examples
///
/// ```
/// use timecard_payroll::calculation::{create_employee_records, find_employee_by_first_name};
///
/// let records = create_employee_records(&[
///     vec!["Loki", "God", "God of Mischief", "40"],
///     vec!["Natalia", "Romanoff", "Black Widow", "50"],
/// ])
/// .unwrap();
///
/// let found = find_employee_by_first_name(&records, "Natalia").unwrap();
/// assert_eq!(found.family_name, "Romanoff");
/// assert!(find_employee_by_first_name(&records, "Bruce").is_none());
/// ```
pub fn find_employee_by_first_name<'a>(
    records: &'a [EmployeeRecord],
    first_name: &str,
) -> Option<&'a EmployeeRecord> {
    records.iter().find(|r| r.first_name == first_name)
}

/// Mutable counterpart of [`find_employee_by_first_name`].
pub fn find_employee_by_first_name_mut<'a>(
    records: &'a mut [EmployeeRecord],
    first_name: &str,
) -> Option<&'a mut EmployeeRecord> {
    records.iter_mut().find(|r| r.first_name == first_name)
}
