//! Mapping of application errors onto HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::errors::AppError;

/// Body used for every 5xx: storage details stay in the server log.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidReason(_) | AppError::ActiveEventExists | AppError::NoActiveEvent => {
                StatusCode::BAD_REQUEST
            }
            AppError::InvalidPassword => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = if self.is_rejection() {
            tracing::warn!(%status, error = %self, "request rejected");
            self.to_string()
        } else {
            tracing::error!(%status, error = %self, "request failed");
            INTERNAL_ERROR_MESSAGE.to_string()
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
