//! Date enumeration policy for wage aggregation.

use serde::{Deserialize, Serialize};

use super::EmployeeRecord;

/// Controls which dates contribute to an employee's total wages.
///
/// `EachTimeIn` visits the date of every time-in event, so a date clocked
/// into twice is paid twice. `DistinctDates` visits each date once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatePolicy {
    /// One entry per time-in event, in recorded order.
    #[default]
    EachTimeIn,
    /// One entry per distinct time-in date, in first-seen order.
    DistinctDates,
}

impl DatePolicy {
    /// Returns the dates to pay for `record` under this policy.
    ///
    /// # Examples
    ///
    /// ```
    /// use timecard_payroll::calculation::{create_employee_record, create_time_in_event};
    /// use timecard_payroll::models::DatePolicy;
    ///
    /// let mut record = create_employee_record(&["Loki", "God", "God of Mischief", "40"]).unwrap();
    /// create_time_in_event(&mut record, "2025-03-24 0900").unwrap();
    /// create_time_in_event(&mut record, "2025-03-24 1300").unwrap();
    ///
    /// assert_eq!(DatePolicy::EachTimeIn.dates(&record).len(), 2);
    /// assert_eq!(DatePolicy::DistinctDates.dates(&record), vec!["2025-03-24"]);
    /// ```
    pub fn dates<'a>(&self, record: &'a EmployeeRecord) -> Vec<&'a str> {
        let all = record.time_in_events.iter().map(|e| e.date.as_str());
        match self {
            DatePolicy::EachTimeIn => all.collect(),
            DatePolicy::DistinctDates => {
                let mut seen: Vec<&str> = Vec::new();
                for date in all {
                    if !seen.contains(&date) {
                        seen.push(date);
                    }
                }
                seen
            }
        }
    }
}
