//! HTTP surface of the delay ledger.
//!
//! # Endpoints
//!
//! - `GET /` - operator page (`GET /static/js/script.js` for its script)
//! - `POST /start` - open a delay event `{reason}`
//! - `POST /end` - close the open delay event
//! - `GET /data` - all events as JSON
//! - `GET /download` - all events as a CSV attachment
//! - `POST /reset` - wipe the ledger `{password}`
//! - `GET /stats` - daily / per-reason totals
//! - `GET /health` - liveness probe

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use tower_http::trace::TraceLayer;

use crate::core::ledger::DelayLedger;
use crate::errors::{AppError, AppResult};

pub mod error;
pub mod handlers;
pub mod health;
pub mod ui;

pub use handlers::{
    data_handler, download_handler, end_handler, reset_handler, start_handler, stats_handler,
};
pub use health::health_handler;

/// Shared application state.
///
/// Every request goes through the one ledger behind a mutex, so writes
/// (start / end / reset) are serialized on top of the conditional SQL writes.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    ledger: Mutex<DelayLedger>,
}

impl AppState {
    pub fn new(ledger: DelayLedger) -> Self {
        AppState {
            inner: Arc::new(AppStateInner {
                ledger: Mutex::new(ledger),
            }),
        }
    }

    /// Run `f` with exclusive access to the ledger.
    pub fn with_ledger<T>(
        &self,
        f: impl FnOnce(&mut DelayLedger) -> AppResult<T>,
    ) -> AppResult<T> {
        let mut guard = self
            .inner
            .ledger
            .lock()
            .map_err(|_| AppError::Other("ledger lock poisoned".to_string()))?;
        f(&mut guard)
    }
}

/// Builds the axum Router with all endpoints.
pub fn build_router(app_state: AppState) -> axum::Router {
    use axum::routing::{get, post};

    axum::Router::new()
        .route("/", get(ui::index_handler))
        .route("/static/js/script.js", get(ui::script_handler))
        .route("/start", post(start_handler))
        .route("/end", post(end_handler))
        .route("/data", get(data_handler))
        .route("/download", get(download_handler))
        .route("/reset", post(reset_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// Bind `addr` and serve until Ctrl-C.
pub async fn serve(ledger: DelayLedger, addr: SocketAddr) -> AppResult<()> {
    let app = build_router(AppState::new(ledger));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
