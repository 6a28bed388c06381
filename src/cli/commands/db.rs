//! `db` maintenance flags. When several are given they run in the order
//! migrate, info, check, vacuum.

use crate::cli::commands::print_migration_report;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use rusqlite::Connection;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Db {
        migrate,
        check,
        vacuum,
        info,
    } = cmd
    else {
        return Ok(());
    };

    if !(*migrate || *check || *vacuum || *info) {
        warning("Nothing to do: pass --migrate, --info, --check or --vacuum.");
        return Ok(());
    }

    let mut pool = if *migrate {
        let (pool, report) = DbPool::open_migrated(&cfg.database)?;
        print_migration_report(&report);
        pool
    } else {
        DbPool::new(&cfg.database)?
    };

    if *info {
        stats::print_db_info(&mut pool, &cfg.database)?;
    }

    if *check {
        integrity_check(&pool.conn)?;
        success("Integrity check passed.");
    }

    if *vacuum {
        pool.with_conn(|conn| conn.execute_batch("VACUUM;"))?;
        success(format!("Database compacted: {}", cfg.database));
    }

    Ok(())
}

/// `PRAGMA integrity_check` answers a single `ok` row, or one row per problem.
fn integrity_check(conn: &Connection) -> AppResult<()> {
    let mut stmt = conn.prepare("PRAGMA integrity_check")?;
    let problems = stmt
        .query_map([], |row| row.get::<_, String>(0))?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    match problems.as_slice() {
        [only] if only == "ok" => Ok(()),
        _ => Err(AppError::IntegrityCheck(problems.join("; "))),
    }
}
