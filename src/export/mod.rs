// src/export/mod.rs

pub mod csv;
mod fs_utils;
pub mod json;
mod model;

pub use self::csv::{CSV_FILE_NAME, to_csv, write_csv_file};
pub use json::{to_json, write_json_file};
pub use model::EventView;

use crate::errors::AppResult;
use crate::models::DelayEvent;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Write `events` to `path` in the requested format, asking before
/// overwriting an existing file unless `force` is set.
pub fn export_to_file(
    events: &[DelayEvent],
    format: ExportFormat,
    path: &Path,
    force: bool,
) -> AppResult<()> {
    fs_utils::ensure_writable(path, force)?;

    match format {
        ExportFormat::Csv => write_csv_file(path, events)?,
        ExportFormat::Json => write_json_file(path, events)?,
    }

    success(format!(
        "{} export completed: {} ({} events)",
        format.as_str().to_uppercase(),
        path.display(),
        events.len()
    ));
    Ok(())
}
