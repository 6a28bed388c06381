use crate::cli::commands::open_ledger;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::server;
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rdelaylogger=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Serve { bind } = cmd {
        init_tracing();

        let raw = bind.as_deref().unwrap_or(&cfg.bind_address);
        let addr: SocketAddr = raw
            .parse()
            .map_err(|e| AppError::Config(format!("invalid bind address '{}': {}", raw, e)))?;

        let ledger = open_ledger(cfg)?;
        match ledger.active()? {
            Some(ev) => tracing::info!(event_id = ev.id, reason = %ev.reason, "resuming with open delay event"),
            None => tracing::info!("ledger idle"),
        }
        tracing::info!(database = %cfg.database, "ledger opened");

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;
        runtime.block_on(server::serve(ledger, addr))?;
    }
    Ok(())
}
