//! Payroll report models.
//!
//! This module contains the [`PayrollReport`] type and its line items, which
//! itemise a payroll run per employee and per date.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::DatePolicy;

/// Hours and wages for one employee on one date.
///
/// # Example
///
/// ```
/// use timecard_payroll::models::DailyWage;
/// use rust_decimal::Decimal;
///
/// let day = DailyWage {
///     date: "2025-03-24".to_string(),
///     hours: Decimal::new(8, 0),
///     amount: Decimal::new(320, 0),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyWage {
    /// The date key these wages were earned on.
    pub date: String,
    /// Hours worked on the date.
    pub hours: Decimal,
    /// Wages earned on the date (hours * pay_per_hour).
    pub amount: Decimal,
}

/// All wages owed to a single employee in a payroll run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeWages {
    /// The employee's first name.
    pub first_name: String,
    /// The employee's family name.
    pub family_name: String,
    /// The hourly pay rate used.
    pub pay_per_hour: Decimal,
    /// One line per paid date, in the order the date policy visits them.
    pub days: Vec<DailyWage>,
    /// Sum of all day amounts.
    pub total: Decimal,
}

impl EmployeeWages {
    /// Total hours across all paid dates.
    pub fn total_hours(&self) -> Decimal {
        self.days.iter().map(|d| d.hours).sum()
    }
}

/// The itemised result of a payroll run.
///
/// # Example
///
/// ```
/// use timecard_payroll::models::{DatePolicy, PayrollReport};
/// use chrono::Utc;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let report = PayrollReport {
///     run_id: Uuid::new_v4(),
///     generated_at: Utc::now(),
///     date_policy: DatePolicy::EachTimeIn,
///     employees: vec![],
///     total: Decimal::ZERO,
/// };
/// assert!(report.find_employee("Loki").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollReport {
    /// Unique identifier for this payroll run.
    pub run_id: Uuid,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// The date policy the totals were computed under.
    pub date_policy: DatePolicy,
    /// Per-employee breakdown, in input order.
    pub employees: Vec<EmployeeWages>,
    /// Sum of all employee totals.
    pub total: Decimal,
}

impl PayrollReport {
    /// Returns the first employee entry whose first name equals `first_name`.
    pub fn find_employee(&self, first_name: &str) -> Option<&EmployeeWages> {
        self.employees.iter().find(|e| e.first_name == first_name)
    }
}
