//! Employee record model.
//!
//! This module defines the [`EmployeeRecord`] struct: one employee's
//! identifying fields, pay rate and clock event history.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Event, EventKind};

/// Represents one employee together with their clock events.
///
/// Records are built by the record builder and mutated in place by the
/// event recorder; nothing ever removes an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// The employee's first name, used for lookups.
    pub first_name: String,
    /// The employee's family name.
    pub family_name: String,
    /// The employee's job title.
    pub title: String,
    /// The hourly pay rate.
    pub pay_per_hour: Decimal,
    /// Time-in events in the order they were recorded.
    #[serde(default)]
    pub time_in_events: Vec<Event>,
    /// Time-out events in the order they were recorded.
    #[serde(default)]
    pub time_out_events: Vec<Event>,
}

impl EmployeeRecord {
    /// Creates a record with no events.
    ///
    /// # Examples
    ///
    /// ```
    /// use timecard_payroll::models::EmployeeRecord;
    /// use rust_decimal::Decimal;
    ///
    /// let record = EmployeeRecord::new("Loki", "God", "God of Mischief", Decimal::new(40, 0));
    /// assert!(record.time_in_events.is_empty());
    /// assert!(record.time_out_events.is_empty());
    /// ```
    pub fn new(
        first_name: impl Into<String>,
        family_name: impl Into<String>,
        title: impl Into<String>,
        pay_per_hour: Decimal,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            family_name: family_name.into(),
            title: title.into(),
            pay_per_hour,
            time_in_events: Vec::new(),
            time_out_events: Vec::new(),
        }
    }

    /// Returns the event sequence for `kind`.
    pub fn events(&self, kind: EventKind) -> &[Event] {
        match kind {
            EventKind::TimeIn => &self.time_in_events,
            EventKind::TimeOut => &self.time_out_events,
        }
    }

    /// Returns the first event of `kind` recorded on `date`.
    pub fn first_event_on(&self, kind: EventKind, date: &str) -> Option<&Event> {
        self.events(kind).iter().find(|e| e.is_on(date))
    }

    pub(crate) fn events_mut(&mut self, kind: EventKind) -> &mut Vec<Event> {
        match kind {
            EventKind::TimeIn => &mut self.time_in_events,
            EventKind::TimeOut => &mut self.time_out_events,
        }
    }

    /// Returns the employee's full name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.family_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_record() -> EmployeeRecord {
        EmployeeRecord::new("Loki", "God", "God of Mischief", Decimal::new(40, 0))
    }

    fn make_event(kind: EventKind, date: &str, hour: u32) -> Event {
        Event {
            kind,
            date: date.to_string(),
            hour,
        }
    }

    #[test]
    fn test_new_record_has_no_events() {
        let record = create_test_record();
        assert_eq!(record.first_name, "Loki");
        assert_eq!(record.family_name, "God");
        assert_eq!(record.title, "God of Mischief");
        assert_eq!(record.pay_per_hour, Decimal::new(40, 0));
        assert!(record.events(EventKind::TimeIn).is_empty());
        assert!(record.events(EventKind::TimeOut).is_empty());
    }

    #[test]
    fn test_first_event_on_returns_earliest_recorded() {
        let mut record = create_test_record();
        record
            .time_in_events
            .push(make_event(EventKind::TimeIn, "2025-03-24", 900));
        record
            .time_in_events
            .push(make_event(EventKind::TimeIn, "2025-03-24", 1300));

        let first = record.first_event_on(EventKind::TimeIn, "2025-03-24").unwrap();
        assert_eq!(first.hour, 900);
        assert!(record.first_event_on(EventKind::TimeOut, "2025-03-24").is_none());
    }

    #[test]
    fn test_full_name() {
        assert_eq!(create_test_record().full_name(), "Loki God");
    }

    #[test]
    fn test_deserialize_record_without_events() {
        let json = r#"{
            "first_name": "Natalia",
            "family_name": "Romanoff",
            "title": "Black Widow",
            "pay_per_hour": "50.00"
        }"#;

        let record: EmployeeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.first_name, "Natalia");
        assert_eq!(record.pay_per_hour, Decimal::new(5000, 2));
        assert!(record.time_in_events.is_empty());
    }

    #[test]
    fn test_serialize_record_keeps_events() {
        let mut record = create_test_record();
        record
            .time_out_events
            .push(make_event(EventKind::TimeOut, "2025-03-24", 1700));

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: EmployeeRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
