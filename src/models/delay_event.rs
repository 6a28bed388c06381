use super::reason::DelayReason;
use crate::utils::time::{format_timestamp, minutes_between};
use chrono::{NaiveDate, NaiveDateTime};

/// One delay interval.
///
/// Timestamps are naive UTC. `end_time == None` marks the open event.
#[derive(Debug, Clone, PartialEq)]
pub struct DelayEvent {
    pub id: i64,                         // ⇔ delay_event.id
    pub start_time: NaiveDateTime,       // ⇔ delay_event.start_time
    pub end_time: Option<NaiveDateTime>, // ⇔ delay_event.end_time (NULL = open)
    pub reason: DelayReason,             // ⇔ delay_event.reason
}

impl DelayEvent {
    pub fn is_open(&self) -> bool {
        self.end_time.is_none()
    }

    /// Elapsed minutes between start and end; `None` while the event is open.
    pub fn duration_minutes(&self) -> Option<f64> {
        self.end_time
            .map(|end| minutes_between(self.start_time, end))
    }

    /// Calendar day the event is bucketed under (always the start day).
    pub fn start_date(&self) -> NaiveDate {
        self.start_time.date()
    }

    pub fn start_time_str(&self) -> String {
        format_timestamp(&self.start_time)
    }

    pub fn end_time_str(&self) -> Option<String> {
        self.end_time.as_ref().map(format_timestamp)
    }
}
