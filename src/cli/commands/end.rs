use crate::cli::commands::open_ledger;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut ledger = open_ledger(cfg)?;
    let closed = ledger.end()?;
    success(format!(
        "Delay ended (event #{}, duration: {:.2} minutes)",
        closed.id, closed.duration_minutes
    ));
    Ok(())
}
