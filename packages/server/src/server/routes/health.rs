use axum::{extract::Extension, http::StatusCode, Json};
use serde::Serialize;

use crate::server::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    store: StoreHealth,
    event_bus: String,
}

#[derive(Serialize)]
pub struct StoreHealth {
    users: usize,
    messages: usize,
}

/// Health check endpoint
///
/// Reports the in-memory store record counts and event bus status. The
/// store has no external backing, so a responding process is a healthy one.
pub async fn health_handler(
    Extension(state): Extension<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let store = StoreHealth {
        users: state.store.user_count().await,
        messages: state.store.message_count().await,
    };

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            store,
            event_bus: "ok".to_string(),
        }),
    )
}
