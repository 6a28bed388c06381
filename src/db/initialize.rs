use crate::db::migrate::{MigrationReport, run_pending_migrations};
use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database.
/// Delegates all schema creation / upgrades to the migration engine.
pub fn init_db(conn: &Connection) -> AppResult<MigrationReport> {
    Ok(run_pending_migrations(conn)?)
}
