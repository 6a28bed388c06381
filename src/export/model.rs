// src/export/model.rs

use crate::models::DelayEvent;
use serde::Serialize;

/// Flat view of an event as served by `GET /data`.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct EventView {
    pub id: i64,
    pub start_time: String,
    pub end_time: Option<String>,
    pub reason: String,
    pub duration_minutes: Option<f64>,
}

impl From<&DelayEvent> for EventView {
    fn from(ev: &DelayEvent) -> Self {
        Self {
            id: ev.id,
            start_time: ev.start_time_str(),
            end_time: ev.end_time_str(),
            reason: ev.reason.as_str().to_string(),
            duration_minutes: ev.duration_minutes(),
        }
    }
}

/// Header row for CSV
pub(crate) const CSV_HEADERS: [&str; 5] = [
    "ID",
    "Start Time",
    "End Time",
    "Reason",
    "Duration (minutes)",
];

/// One CSV row; absent values become empty fields.
pub(crate) fn event_to_row(ev: &DelayEvent) -> [String; 5] {
    [
        ev.id.to_string(),
        ev.start_time_str(),
        ev.end_time_str().unwrap_or_default(),
        ev.reason.as_str().to_string(),
        ev.duration_minutes()
            .map(crate::utils::time::format_minutes)
            .unwrap_or_default(),
    ]
}
