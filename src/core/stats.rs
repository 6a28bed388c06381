//! Per-day / per-reason totals over closed delay events.

use crate::models::{DelayEvent, DelayReason};
use serde::Serialize;
use std::collections::BTreeMap;

/// Minutes per reason for a single day. Always holds all four reasons.
pub type ReasonTotals = BTreeMap<&'static str, f64>;

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct DelayStats {
    /// `YYYY-MM-DD` (start day) → reason → minutes
    pub daily_stats: BTreeMap<String, ReasonTotals>,
    pub total_duration_minutes: f64,
}

fn empty_day() -> ReasonTotals {
    DelayReason::ALL.iter().map(|r| (r.as_str(), 0.0)).collect()
}

/// Sum closed events by start day and reason. Open events are ignored.
pub fn aggregate<'a, I>(events: I) -> DelayStats
where
    I: IntoIterator<Item = &'a DelayEvent>,
{
    let mut stats = DelayStats::default();

    for ev in events {
        let Some(minutes) = ev.duration_minutes() else {
            continue;
        };

        let day = ev.start_date().format("%Y-%m-%d").to_string();
        let bucket = stats.daily_stats.entry(day).or_insert_with(empty_day);
        *bucket.entry(ev.reason.as_str()).or_insert(0.0) += minutes;
        stats.total_duration_minutes += minutes;
    }

    stats
}
