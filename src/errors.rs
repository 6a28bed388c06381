//! Unified application error type.
//! All modules (db, core, server, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Invalid timestamp in database: {0}")]
    InvalidTimestamp(String),

    #[error("Database integrity check failed: {0}")]
    IntegrityCheck(String),

    // ---------------------------
    // Request validation
    // ---------------------------
    #[error("Invalid reason")]
    InvalidReason(String),

    // ---------------------------
    // Ledger state
    // ---------------------------
    #[error("There is already an active delay event")]
    ActiveEventExists,

    #[error("No active delay event found")]
    NoActiveEvent,

    #[error("Invalid password")]
    InvalidPassword,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// True for errors caused by the caller (bad input or a request that does
    /// not fit the current ledger state), false for infrastructure failures.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            AppError::InvalidReason(_)
                | AppError::ActiveEventExists
                | AppError::NoActiveEvent
                | AppError::InvalidPassword
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
