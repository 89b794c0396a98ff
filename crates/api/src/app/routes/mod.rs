use axum::{Router, routing::get};

pub mod items;
pub mod system;

/// Router for all endpoints; unmatched paths fall through to a generic 404.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .nest("/items", items::router())
        .fallback(system::not_found)
}
