//! Time utilities: timestamp formats used in storage and on the wire,
//! duration computations, minute rendering.

use chrono::NaiveDateTime;

/// Format used for JSON and CSV output.
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format written to the `delay_event` table (microsecond precision).
pub const STORAGE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Accepts both `YYYY-MM-DD HH:MM:SS` and any fractional part after it.
const STORAGE_PARSE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(DISPLAY_FORMAT).to_string()
}

pub fn to_storage(ts: &NaiveDateTime) -> String {
    ts.format(STORAGE_FORMAT).to_string()
}

pub fn parse_storage(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, STORAGE_PARSE_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f"))
        .ok()
}

/// Fractional minutes from `start` to `end`.
pub fn minutes_between(start: NaiveDateTime, end: NaiveDateTime) -> f64 {
    let delta = end - start;
    match delta.num_microseconds() {
        Some(us) => us as f64 / 60_000_000.0,
        None => delta.num_milliseconds() as f64 / 60_000.0,
    }
}

/// Decimal rendering for minute values: whole numbers keep one decimal
/// (`10.0`), everything else is printed as-is (`2.5`).
pub fn format_minutes(mins: f64) -> String {
    if mins.fract() == 0.0 {
        format!("{:.1}", mins)
    } else {
        format!("{}", mins)
    }
}
