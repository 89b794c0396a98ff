//! HTTP API application wiring (Axum router + shared catalog).
//!
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: query-parameter DTOs and their conversion to domain criteria
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;

use itemdex_catalog::Catalog;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
///
/// The catalog is shared read-only with every handler.
pub fn build_app(catalog: Arc<Catalog>) -> Router {
    routes::router().layer(
        ServiceBuilder::new()
            .layer(axum::middleware::from_fn(middleware::request_tracing))
            .layer(Extension(catalog)),
    )
}
