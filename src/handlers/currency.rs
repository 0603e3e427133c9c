//! Currency-rate proxy.

use crate::state::AppState;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

/// Body message returned when the upstream cannot be read.
pub const CURRENCY_ERROR_MESSAGE: &str = "Не удалось получить курс валют";

/// Relays the upstream rates JSON verbatim; any upstream failure is a 500 with a fixed message.
pub async fn currency_proxy(State(state): State<AppState>) -> Response {
    match state.rates.fetch().await {
        Ok(body) => ([(header::CONTENT_TYPE, "application/json")], body).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "currency rates fetch failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": CURRENCY_ERROR_MESSAGE })),
            )
                .into_response()
        }
    }
}
