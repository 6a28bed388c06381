//! rDelaylogger main entrypoint.

use rdelaylogger::run;
use rdelaylogger::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
