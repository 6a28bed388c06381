//! The delay ledger: create / close / list / wipe delay events and derive
//! the read views (stats, CSV) from the stored rows.
//!
//! Whether the ledger is idle or active is never cached: it is always the
//! answer to "is there a row with no end time", so an event left open by a
//! crash is picked up by the next call.

use crate::core::clock::{Clock, SystemClock};
use crate::core::stats::{DelayStats, aggregate};
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::export;
use crate::models::{DelayEvent, DelayReason};
use std::sync::Arc;

/// Result of closing the open event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosedEvent {
    pub id: i64,
    pub duration_minutes: f64,
}

pub struct DelayLedger {
    pool: DbPool,
    clock: Arc<dyn Clock>,
    reset_password: String,
}

impl DelayLedger {
    pub fn new(pool: DbPool, reset_password: impl Into<String>) -> Self {
        Self::with_clock(pool, reset_password, Arc::new(SystemClock))
    }

    pub fn with_clock(
        pool: DbPool,
        reset_password: impl Into<String>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            pool,
            clock,
            reset_password: reset_password.into(),
        }
    }

    /// The currently open event, if any.
    pub fn active(&self) -> AppResult<Option<DelayEvent>> {
        Ok(queries::find_open_event(&self.pool.conn)?)
    }

    /// Open a new delay event. Returns its id.
    pub fn start(&mut self, reason: &str) -> AppResult<i64> {
        let reason = DelayReason::from_db_str(reason)
            .ok_or_else(|| AppError::InvalidReason(reason.to_string()))?;

        let now = self.clock.now();
        let id = queries::insert_open_event(&self.pool.conn, reason, &now)?
            .ok_or(AppError::ActiveEventExists)?;

        tracing::info!(event_id = id, reason = %reason, "delay started");

        Ok(id)
    }

    /// Close the open event. Returns its id and duration in minutes.
    pub fn end(&mut self) -> AppResult<ClosedEvent> {
        let open = self.active()?.ok_or(AppError::NoActiveEvent)?;

        // A wall clock stepping backwards must not yield a negative interval.
        let end_time = self.clock.now().max(open.start_time);

        if !queries::close_event(&self.pool.conn, open.id, &end_time)? {
            return Err(AppError::NoActiveEvent);
        }

        let closed = DelayEvent {
            end_time: Some(end_time),
            ..open
        };
        let duration_minutes = closed.duration_minutes().unwrap_or(0.0);

        tracing::info!(event_id = closed.id, duration_minutes, "delay ended");

        Ok(ClosedEvent {
            id: closed.id,
            duration_minutes,
        })
    }

    /// Every event, open or closed, in id order.
    pub fn list(&self) -> AppResult<Vec<DelayEvent>> {
        Ok(queries::load_all_events(&self.pool.conn)?)
    }

    /// Daily / per-reason totals over closed events.
    pub fn stats(&self) -> AppResult<DelayStats> {
        let closed = queries::load_closed_events(&self.pool.conn)?;
        Ok(aggregate(&closed))
    }

    /// Full CSV export of the ledger.
    pub fn export_csv(&self) -> AppResult<Vec<u8>> {
        let events = self.list()?;
        export::to_csv(&events)
    }

    /// Delete every event, open ones included. Irreversible.
    pub fn reset_all(&mut self, password: &str) -> AppResult<usize> {
        if password != self.reset_password {
            tracing::warn!("reset refused: wrong password");
            return Err(AppError::InvalidPassword);
        }

        let deleted = queries::delete_all_events(&self.pool.conn)?;

        tracing::info!(deleted, "ledger reset");

        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::ManualClock;
    use chrono::{NaiveDateTime, TimeDelta};

    const PW: &str = "letmein";

    fn t0() -> NaiveDateTime {
        NaiveDateTime::parse_from_str("2024-01-01 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn ledger() -> (DelayLedger, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(t0()));
        let pool = DbPool::in_memory().unwrap();
        let ledger = DelayLedger::with_clock(pool, PW, clock.clone());
        (ledger, clock)
    }

    fn open_count(ledger: &DelayLedger) -> usize {
        ledger.list().unwrap().iter().filter(|e| e.is_open()).count()
    }

    #[test]
    fn start_then_end_round_trip() {
        let (mut ledger, clock) = ledger();

        let id = ledger.start("out body").unwrap();
        assert_eq!(id, 1);
        assert!(ledger.active().unwrap().is_some());

        clock.advance(TimeDelta::seconds(90));
        let closed = ledger.end().unwrap();
        assert_eq!(closed.id, 1);
        assert!((closed.duration_minutes - 1.5).abs() < 1e-9);

        let events = ledger.list().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, 1);
        assert_eq!(events[0].reason, DelayReason::OutBody);
        assert!(ledger.active().unwrap().is_none());
    }

    #[test]
    fn immediate_end_has_zero_duration() {
        let (mut ledger, _clock) = ledger();
        ledger.start("out body").unwrap();
        let closed = ledger.end().unwrap();
        assert_eq!(closed.id, 1);
        assert!(closed.duration_minutes >= 0.0);
    }

    #[test]
    fn invalid_reason_creates_nothing() {
        let (mut ledger, _clock) = ledger();
        let err = ledger.start("coffee").unwrap_err();
        assert!(matches!(err, AppError::InvalidReason(_)));
        assert!(ledger.list().unwrap().is_empty());
    }

    #[test]
    fn start_while_active_is_a_conflict() {
        let (mut ledger, clock) = ledger();
        ledger.start("out body").unwrap();
        clock.advance(TimeDelta::minutes(1));

        let err = ledger.start("out of 3 dot battery").unwrap_err();
        assert!(matches!(err, AppError::ActiveEventExists));

        let events = ledger.list().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].reason, DelayReason::OutBody);
    }

    #[test]
    fn end_while_idle_is_not_found() {
        let (mut ledger, _clock) = ledger();
        assert!(matches!(ledger.end(), Err(AppError::NoActiveEvent)));

        ledger.start("out body").unwrap();
        ledger.end().unwrap();
        assert!(matches!(ledger.end(), Err(AppError::NoActiveEvent)));
    }

    #[test]
    fn clock_going_backwards_clamps_to_zero() {
        let (mut ledger, clock) = ledger();
        ledger.start("out body").unwrap();
        clock.set(t0() - TimeDelta::minutes(5));
        let closed = ledger.end().unwrap();
        assert_eq!(closed.duration_minutes, 0.0);
    }

    #[test]
    fn end_time_is_never_rewritten() {
        let (mut ledger, clock) = ledger();
        ledger.start("out body").unwrap();
        clock.advance(TimeDelta::minutes(4));
        ledger.end().unwrap();
        let before = ledger.list().unwrap();

        clock.advance(TimeDelta::minutes(30));
        let _ = ledger.end();
        assert_eq!(ledger.list().unwrap(), before);
    }

    #[test]
    fn at_most_one_open_event_over_a_sequence() {
        let (mut ledger, clock) = ledger();
        let script = [
            "start", "start", "end", "end", "start", "end", "start", "start", "end",
        ];
        for (i, op) in script.iter().enumerate() {
            clock.advance(TimeDelta::minutes(1));
            let reason = DelayReason::ALL[i % 4].as_str();
            let _ = match *op {
                "start" => ledger.start(reason).map(|_| ()),
                _ => ledger.end().map(|_| ()),
            };
            assert!(open_count(&ledger) <= 1);
        }
        assert_eq!(ledger.list().unwrap().len(), 3);
    }

    #[test]
    fn reset_with_wrong_password_keeps_everything() {
        let (mut ledger, _clock) = ledger();
        ledger.start("out body").unwrap();
        ledger.end().unwrap();

        assert!(matches!(
            ledger.reset_all("nope"),
            Err(AppError::InvalidPassword)
        ));
        assert_eq!(ledger.list().unwrap().len(), 1);
    }

    #[test]
    fn reset_deletes_all_including_open() {
        let (mut ledger, clock) = ledger();
        ledger.start("out body").unwrap();
        clock.advance(TimeDelta::minutes(2));
        ledger.end().unwrap();
        ledger.start("out 1-dot battery").unwrap();

        let before = ledger.list().unwrap().len();
        assert_eq!(ledger.reset_all(PW).unwrap(), before);
        assert!(ledger.list().unwrap().is_empty());
        assert!(ledger.active().unwrap().is_none());

        // Back to idle: a fresh start is accepted again.
        assert_eq!(ledger.start("out body").unwrap(), 1);
    }

    #[test]
    fn stats_follow_closed_events() {
        let (mut ledger, clock) = ledger();

        ledger.start("out body").unwrap();
        clock.advance(TimeDelta::minutes(10));
        ledger.end().unwrap();

        clock.advance(TimeDelta::minutes(60));
        ledger.start("out body").unwrap();
        clock.advance(TimeDelta::minutes(5));
        ledger.end().unwrap();

        clock.set(t0() + TimeDelta::days(1));
        ledger.start("out 1-dot battery").unwrap();
        clock.advance(TimeDelta::minutes(20));
        ledger.end().unwrap();

        // Still open: excluded.
        ledger.start("out of 3 dot battery").unwrap();
        clock.advance(TimeDelta::minutes(99));

        let stats = ledger.stats().unwrap();
        assert_eq!(stats.daily_stats["2024-01-01"]["out body"], 15.0);
        assert_eq!(stats.daily_stats["2024-01-01"]["out 1-dot battery"], 0.0);
        assert_eq!(stats.daily_stats["2024-01-02"]["out 1-dot battery"], 20.0);
        assert_eq!(stats.daily_stats["2024-01-02"]["out of 3 dot battery"], 0.0);
        assert_eq!(stats.total_duration_minutes, 35.0);
    }

    #[test]
    fn operations_persist_nothing_besides_delay_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.sqlite");
        let path = path.to_string_lossy().to_string();

        {
            let pool = DbPool::open_initialized(&path).unwrap();
            let mut ledger = DelayLedger::new(pool, PW);
            ledger.start("out body").unwrap();
            ledger.end().unwrap();
            ledger.start("out 1-dot battery").unwrap();
            ledger.reset_all(PW).unwrap();
        }

        let conn = rusqlite::Connection::open(&path).unwrap();
        let mut stmt = conn
            .prepare("SELECT name FROM sqlite_master WHERE type = 'table'")
            .unwrap();
        let tables: Vec<String> = stmt
            .query_map([], |r| r.get(0))
            .unwrap()
            .map(|r| r.unwrap())
            .collect();
        assert_eq!(tables, vec!["delay_event"]);
    }

    #[test]
    fn open_event_survives_reopen_of_database() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.sqlite");
        let path = path.to_string_lossy().to_string();

        {
            let pool = DbPool::open_initialized(&path).unwrap();
            let mut ledger = DelayLedger::new(pool, PW);
            ledger.start("out of 2 dot battery").unwrap();
        }

        let pool = DbPool::open_initialized(&path).unwrap();
        let mut ledger = DelayLedger::new(pool, PW);
        assert!(matches!(
            ledger.start("out body"),
            Err(AppError::ActiveEventExists)
        ));
        assert_eq!(ledger.end().unwrap().id, 1);
    }
}
