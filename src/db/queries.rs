use crate::errors::AppError;
use crate::models::{DelayEvent, DelayReason};
use crate::utils::time::{parse_storage, to_storage};
use chrono::NaiveDateTime;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const SELECT_COLUMNS: &str = "SELECT id, start_time, end_time, reason FROM delay_event";

fn conversion_error(idx: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(err))
}

pub fn map_row(row: &Row) -> Result<DelayEvent> {
    let start_str: String = row.get("start_time")?;
    let end_str: Option<String> = row.get("end_time")?;
    let reason_str: String = row.get("reason")?;

    let start_time = parse_storage(&start_str)
        .ok_or_else(|| conversion_error(1, AppError::InvalidTimestamp(start_str.clone())))?;

    let end_time = match end_str {
        Some(s) => Some(
            parse_storage(&s).ok_or_else(|| conversion_error(2, AppError::InvalidTimestamp(s)))?,
        ),
        None => None,
    };

    let reason = DelayReason::from_db_str(&reason_str)
        .ok_or_else(|| conversion_error(3, AppError::InvalidReason(reason_str.clone())))?;

    Ok(DelayEvent {
        id: row.get("id")?,
        start_time,
        end_time,
        reason,
    })
}

fn collect(conn: &Connection, sql: &str) -> Result<Vec<DelayEvent>> {
    let mut stmt = conn.prepare_cached(sql)?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// All events, open or closed, in insertion (id) order.
pub fn load_all_events(conn: &Connection) -> Result<Vec<DelayEvent>> {
    collect(conn, &format!("{SELECT_COLUMNS} ORDER BY id ASC"))
}

/// Only events with an end time, in id order.
pub fn load_closed_events(conn: &Connection) -> Result<Vec<DelayEvent>> {
    collect(
        conn,
        &format!("{SELECT_COLUMNS} WHERE end_time IS NOT NULL ORDER BY id ASC"),
    )
}

/// The open event, if any. Lowest id wins should legacy data hold several.
pub fn find_open_event(conn: &Connection) -> Result<Option<DelayEvent>> {
    conn.query_row(
        &format!("{SELECT_COLUMNS} WHERE end_time IS NULL ORDER BY id ASC LIMIT 1"),
        [],
        map_row,
    )
    .optional()
}

/// Insert a new open event only if no open event exists.
///
/// Returns the new id, or `None` when the guard refused the insert.
pub fn insert_open_event(
    conn: &Connection,
    reason: DelayReason,
    start_time: &NaiveDateTime,
) -> Result<Option<i64>> {
    let inserted = conn.execute(
        "INSERT INTO delay_event (start_time, end_time, reason)
         SELECT ?1, NULL, ?2
         WHERE NOT EXISTS (SELECT 1 FROM delay_event WHERE end_time IS NULL)",
        params![to_storage(start_time), reason.as_str()],
    )?;

    if inserted == 0 {
        return Ok(None);
    }
    Ok(Some(conn.last_insert_rowid()))
}

/// Set `end_time` on the given event only if it is still open.
///
/// Returns false when the row was already closed (or no longer exists).
pub fn close_event(conn: &Connection, id: i64, end_time: &NaiveDateTime) -> Result<bool> {
    let updated = conn.execute(
        "UPDATE delay_event SET end_time = ?1 WHERE id = ?2 AND end_time IS NULL",
        params![to_storage(end_time), id],
    )?;
    Ok(updated == 1)
}

/// Wipe the whole collection. Returns the number of rows removed.
pub fn delete_all_events(conn: &Connection) -> Result<usize> {
    conn.execute("DELETE FROM delay_event", [])
}

pub fn count_events(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM delay_event", [], |row| row.get(0))
}

pub fn count_open_events(conn: &Connection) -> Result<i64> {
    conn.query_row(
        "SELECT COUNT(*) FROM delay_event WHERE end_time IS NULL",
        [],
        |row| row.get(0),
    )
}
