pub mod config;
pub mod db;
pub mod end;
pub mod export;
pub mod init;
pub mod list;
pub mod reset;
pub mod serve;
pub mod start;
pub mod stats;

use crate::config::Config;
use crate::core::ledger::DelayLedger;
use crate::db::migrate::MigrationReport;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Open (and migrate) the configured database and wrap it in a ledger.
pub(crate) fn open_ledger(cfg: &Config) -> AppResult<DelayLedger> {
    let pool = DbPool::open_initialized(&cfg.database)?;
    Ok(DelayLedger::new(pool, cfg.reset_password.clone()))
}

/// Terminal rendering of a migration run.
pub(crate) fn print_migration_report(report: &MigrationReport) {
    if report.created_table {
        success("Created delay_event table.");
    }
    for step in &report.applied {
        success(format!("Migration applied: {}", step));
    }
    for note in &report.skipped {
        warning(note);
    }
    if report.is_noop() {
        info("Schema already up to date.");
    }
}
