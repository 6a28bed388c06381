use crate::cli::commands::open_ledger;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::export_to_file;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let ledger = open_ledger(cfg)?;
        let events = ledger.list()?;
        export_to_file(&events, *format, Path::new(file), *force)?;
    }
    Ok(())
}
