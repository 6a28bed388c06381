//! SQLite connection wrapper (one connection per process).

use crate::db::initialize::init_db;
use crate::db::migrate::MigrationReport;
use crate::errors::AppResult;
use rusqlite::{Connection, Result};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        Ok(Self { conn })
    }

    /// Open the database and bring its schema up to date.
    pub fn open_initialized(path: &str) -> AppResult<Self> {
        Ok(Self::open_migrated(path)?.0)
    }

    /// Like [`DbPool::open_initialized`], also returning what the migrations did.
    pub fn open_migrated(path: &str) -> AppResult<(Self, MigrationReport)> {
        let pool = Self::new(path)?;
        let report = init_db(&pool.conn)?;
        Ok((pool, report))
    }

    /// Fresh in-memory database with the full schema, used by tests.
    pub fn in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        init_db(&conn)?;
        Ok(Self { conn })
    }

    /// Helper to execute a closure with a mutable connection reference.
    pub fn with_conn<F, T>(&mut self, func: F) -> Result<T>
    where
        F: FnOnce(&mut Connection) -> Result<T>,
    {
        func(&mut self.conn)
    }
}
