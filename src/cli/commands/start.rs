use crate::cli::commands::open_ledger;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Start { reason } = cmd {
        let mut ledger = open_ledger(cfg)?;
        let id = ledger.start(reason)?;
        success(format!("Delay started (event #{}, reason: {})", id, reason));
    }
    Ok(())
}
