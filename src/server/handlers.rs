//! Ledger endpoints.

use axum::Json;
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::AppState;
use crate::core::stats::DelayStats;
use crate::errors::{AppError, AppResult};
use crate::export::{CSV_FILE_NAME, EventView};

#[derive(Debug, Serialize, Deserialize)]
pub struct StartResponse {
    pub message: String,
    pub event_id: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EndResponse {
    pub message: String,
    pub event_id: i64,
    pub duration_minutes: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// String value of `key` in a JSON object body.
///
/// A body that is not an object, an absent key and a non-string value all
/// give `None`; the handlers turn that into the same rejection as a bad value.
fn string_field<'a>(body: &'a Value, key: &str) -> Option<&'a str> {
    body.as_object()?.get(key)?.as_str()
}

/// `POST /start` with `{"reason": "..."}`.
pub async fn start_handler(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> AppResult<Json<StartResponse>> {
    let reason = string_field(&body, "reason").unwrap_or_default();
    let event_id = state.with_ledger(|ledger| ledger.start(reason))?;

    Ok(Json(StartResponse {
        message: "Delay started".to_string(),
        event_id,
    }))
}

/// `POST /end`, no body.
pub async fn end_handler(State(state): State<AppState>) -> AppResult<Json<EndResponse>> {
    let closed = state.with_ledger(|ledger| ledger.end())?;

    Ok(Json(EndResponse {
        message: "Delay ended".to_string(),
        event_id: closed.id,
        duration_minutes: closed.duration_minutes,
    }))
}

/// `GET /data`: every event as a flat JSON object.
pub async fn data_handler(State(state): State<AppState>) -> AppResult<Json<Vec<EventView>>> {
    let events = state.with_ledger(|ledger| ledger.list())?;
    Ok(Json(events.iter().map(EventView::from).collect()))
}

/// `GET /download`: CSV attachment.
pub async fn download_handler(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let csv = state.with_ledger(|ledger| ledger.export_csv())?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", CSV_FILE_NAME),
            ),
        ],
        csv,
    ))
}

/// `POST /reset` with `{"password": "..."}`.
pub async fn reset_handler(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> AppResult<Json<MessageResponse>> {
    let password = string_field(&body, "password").ok_or(AppError::InvalidPassword)?;
    let deleted = state.with_ledger(|ledger| ledger.reset_all(password))?;

    Ok(Json(MessageResponse {
        message: format!("Reset successful, deleted {} events.", deleted),
    }))
}

/// `GET /stats`
pub async fn stats_handler(State(state): State<AppState>) -> AppResult<Json<DelayStats>> {
    let stats = state.with_ledger(|ledger| ledger.stats())?;
    Ok(Json(stats))
}
