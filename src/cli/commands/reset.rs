use crate::cli::commands::open_ledger;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reset { password } = cmd {
        let mut ledger = open_ledger(cfg)?;
        let deleted = ledger.reset_all(password)?;
        success(format!("Reset successful, deleted {} events.", deleted));
    }
    Ok(())
}
