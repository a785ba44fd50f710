use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::{main_lib::AppState, models::ReadyStatus};

#[utoipa::path(get, path = "/api/v1/healthz", responses((status = 200, description = "Health")))]
pub async fn healthz() -> &'static str {
    "ok"
}

/// Ready once the state is built; reports the configured source.
#[utoipa::path(get, path = "/api/v1/readyz", responses((status = 200, body = ReadyStatus)))]
pub async fn readyz(State(state): State<Arc<AppState>>) -> Json<ReadyStatus> {
    Json(ReadyStatus {
        source: state.source_id.to_string(),
        open_sessions: state.sessions.len(),
    })
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
}
