use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of `PUT /dashboard/table`. `null` clears the selection.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct SelectTableRequest {
    #[serde(default)]
    pub table: Option<String>,
}

/// Body of `PUT /dashboard/products`. An empty list shows every product.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct SelectProductsRequest {
    #[serde(default)]
    pub products: Vec<String>,
}

/// Body of `GET /readyz`.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ReadyStatus {
    pub source: String,
    pub open_sessions: usize,
}
