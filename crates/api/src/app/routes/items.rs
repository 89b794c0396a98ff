use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query, rejection::{PathRejection, QueryRejection}},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use itemdex_catalog::Catalog;

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_items))
        .route("/:name", get(get_item))
}

pub async fn list_items(
    Extension(catalog): Extension<Arc<Catalog>>,
    query: Result<Query<dto::ListItemsQuery>, QueryRejection>,
) -> axum::response::Response {
    let Query(params) = match query {
        Ok(q) => q,
        Err(rejection) => {
            tracing::error!(error = %rejection, "failed to read list query");
            return errors::internal_error();
        }
    };

    let criteria = match params.into_criteria() {
        Ok(c) => c,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let result = itemdex_catalog::filter(&catalog, &criteria);
    tracing::debug!(total = result.total, "items filtered");

    (StatusCode::OK, Json(result)).into_response()
}

pub async fn get_item(
    Extension(catalog): Extension<Arc<Catalog>>,
    path: Result<Path<String>, PathRejection>,
) -> axum::response::Response {
    let Path(name) = match path {
        Ok(p) => p,
        Err(rejection) => {
            tracing::error!(error = %rejection, "failed to read item name");
            return errors::internal_error();
        }
    };

    match itemdex_catalog::find_exact(&catalog, &name) {
        Ok(item) => (StatusCode::OK, Json(item)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
