//! Clock event model.
//!
//! This module defines the [`Event`] struct and [`EventKind`] enum used to
//! record clock-in and clock-out occurrences on an employee record.

use serde::{Deserialize, Serialize};

/// Whether an event opens or closes a working day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// The employee clocked in.
    TimeIn,
    /// The employee clocked out.
    TimeOut,
}

/// A single clock-in or clock-out occurrence.
///
/// # Example
///
/// ```
/// use timecard_payroll::models::{Event, EventKind};
///
/// let event = Event {
///     kind: EventKind::TimeIn,
///     date: "2025-03-24".to_string(),
///     hour: 900,
/// };
/// assert!(event.is_on("2025-03-24"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Whether this is a time-in or time-out event.
    #[serde(rename = "type")]
    pub kind: EventKind,
    /// The calendar date key (`YYYY-MM-DD`), compared by equality only.
    pub date: String,
    /// Clock time encoded as HHMM (e.g. 1700 for 5pm).
    pub hour: u32,
}

impl Event {
    /// Returns true if the event falls on `date`.
    pub fn is_on(&self, date: &str) -> bool {
        self.date == date
    }
}
