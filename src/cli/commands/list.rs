use crate::cli::commands::open_ledger;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::DelayEvent;
use crate::ui::messages::{header, info};
use crate::utils::colors::{GREEN, GREY, RESET, YELLOW, color_for_optional_field};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let ledger = open_ledger(cfg)?;
    let events = ledger.list()?;

    if events.is_empty() {
        info("No delay events recorded.");
        return Ok(());
    }

    header("DELAY EVENTS");
    println!(
        "{:>5}  {:<19}  {:<19}  {:<22}  {:>10}",
        "ID", "START", "END", "REASON", "MINUTES"
    );
    for ev in &events {
        print_event(ev);
    }

    Ok(())
}

fn print_event(ev: &DelayEvent) {
    let end = ev.end_time_str();
    let minutes = ev.duration_minutes().map(|m| format!("{:.2}", m));

    let end_color = color_for_optional_field(end.as_deref());
    let state_color = if ev.is_open() { YELLOW } else { GREEN };

    println!(
        "{:>5}  {:<19}  {}{:<19}{}  {:<22}  {}{:>10}{}",
        ev.id,
        ev.start_time_str(),
        end_color,
        end.unwrap_or_else(|| "--".to_string()),
        RESET,
        ev.reason.as_str(),
        state_color,
        minutes.unwrap_or_else(|| format!("{GREY}open{RESET}")),
        RESET
    );
}

