//! Dashboard controls: one endpoint per user-facing control, plus read-only
//! accessors for the parts of the page.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::{get, post, put},
    Json, Router,
};
use pricedesk_core::{DashboardView, GridView, ProductOption, RefreshStatus, TableOption};

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{SelectProductsRequest, SelectTableRequest},
    sessions::session_id,
};

/// Current page for the caller's session. The first call loads the data.
#[utoipa::path(get, path = "/api/v1/dashboard", responses((status = 200, description = "Dashboard view")))]
pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> ApiResult<Json<DashboardView>> {
    let session = state.sessions.get_or_create(&session_id(&headers)?);
    Ok(Json(session.load().await))
}

/// Drops the cached datasets, stamps the time and reloads.
#[utoipa::path(post, path = "/api/v1/dashboard/refresh", responses((status = 200, description = "Reloaded dashboard view")))]
pub async fn refresh_dashboard(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> ApiResult<Json<DashboardView>> {
    let id = session_id(&headers)?;
    tracing::info!("Refreshing data for session '{}'", id);
    let session = state.sessions.get_or_create(&id);
    Ok(Json(session.refresh().await))
}

#[utoipa::path(
    put,
    path = "/api/v1/dashboard/table",
    request_body = SelectTableRequest,
    responses(
        (status = 200, description = "Dashboard view for the new table"),
        (status = 400, description = "Unknown price table")
    )
)]
pub async fn select_table(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<SelectTableRequest>,
) -> ApiResult<Json<DashboardView>> {
    let session = state.sessions.get_or_create(&session_id(&headers)?);
    let view = session.select_table(body.table).await?;
    Ok(Json(view))
}

#[utoipa::path(
    put,
    path = "/api/v1/dashboard/products",
    request_body = SelectProductsRequest,
    responses(
        (status = 200, description = "Dashboard view for the new products"),
        (status = 400, description = "Product not offered under the selected table")
    )
)]
pub async fn select_products(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<SelectProductsRequest>,
) -> ApiResult<Json<DashboardView>> {
    let session = state.sessions.get_or_create(&session_id(&headers)?);
    let view = session.select_products(body.products).await?;
    Ok(Json(view))
}

#[utoipa::path(get, path = "/api/v1/dashboard/tables", responses((status = 200, description = "Price table options")))]
pub async fn get_tables(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> ApiResult<Json<Vec<TableOption>>> {
    let session = state.sessions.get_or_create(&session_id(&headers)?);
    Ok(Json(session.tables().await))
}

#[utoipa::path(get, path = "/api/v1/dashboard/products", responses((status = 200, description = "Product options under the selected table")))]
pub async fn get_products(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> ApiResult<Json<Vec<ProductOption>>> {
    let session = state.sessions.get_or_create(&session_id(&headers)?);
    Ok(Json(session.products().await))
}

/// Grid input for the current selection; `null` when there is no data.
#[utoipa::path(get, path = "/api/v1/dashboard/rows", responses((status = 200, description = "Grid input")))]
pub async fn get_rows(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> ApiResult<Json<Option<GridView>>> {
    let session = state.sessions.get_or_create(&session_id(&headers)?);
    Ok(Json(session.grid().await))
}

/// Last refresh of the caller's session. Never opens a session.
#[utoipa::path(get, path = "/api/v1/dashboard/status", responses((status = 200, description = "Last refresh")))]
pub async fn get_status(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> ApiResult<Json<RefreshStatus>> {
    let status = match state.sessions.get(&session_id(&headers)?) {
        Some(session) => session.status().await,
        None => RefreshStatus::new(None),
    };
    Ok(Json(status))
}

#[utoipa::path(delete, path = "/api/v1/dashboard/session", responses((status = 204, description = "Session discarded")))]
pub async fn end_session(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> ApiResult<StatusCode> {
    state.sessions.remove(&session_id(&headers)?);
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/dashboard", get(get_dashboard))
        .route("/dashboard/refresh", post(refresh_dashboard))
        .route("/dashboard/table", put(select_table))
        .route("/dashboard/products", get(get_products).put(select_products))
        .route("/dashboard/tables", get(get_tables))
        .route("/dashboard/rows", get(get_rows))
        .route("/dashboard/status", get(get_status))
        .route("/dashboard/session", axum::routing::delete(end_session))
}
