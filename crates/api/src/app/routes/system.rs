use std::sync::Arc;

use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};

use itemdex_catalog::Catalog;

use crate::app::errors;

pub async fn health(Extension(catalog): Extension<Arc<Catalog>>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "ok",
            "items": catalog.len(),
        })),
    )
}

/// Fallback for unmatched routes (distinct from `item_not_found`).
pub async fn not_found() -> axum::response::Response {
    errors::json_error(StatusCode::NOT_FOUND, "not_found", "route not found")
}
