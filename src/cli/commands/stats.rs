use crate::cli::commands::open_ledger;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::DelayReason;
use crate::ui::messages::{header, info};
use crate::utils::colors::{CYAN, RESET};
use crate::utils::time::format_minutes;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let ledger = open_ledger(cfg)?;
    let stats = ledger.stats()?;

    if stats.daily_stats.is_empty() {
        info("No closed delay events yet.");
        return Ok(());
    }

    header("DAILY DELAY (minutes)");
    for (day, totals) in &stats.daily_stats {
        println!("{}{}{}", CYAN, day, RESET);
        for reason in DelayReason::ALL {
            let mins = totals.get(reason.as_str()).copied().unwrap_or(0.0);
            println!("    {:<22} {:>10.2}", reason.as_str(), mins);
        }
    }
    println!();
    println!("{}", total_line(stats.total_duration_minutes));

    Ok(())
}

fn total_line(total: f64) -> String {
    format!("Total: {} minutes", format_minutes((total * 100.0).round() / 100.0))
}
