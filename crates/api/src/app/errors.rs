use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use itemdex_core::DomainError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match &err {
        DomainError::NotFound(_) => json_error(StatusCode::NOT_FOUND, "item_not_found", err.to_string()),
        DomainError::Validation(detail) => {
            tracing::error!(%detail, "query evaluation failed");
            internal_error()
        }
    }
}

/// Generic 500; details are logged by the caller, never returned.
pub fn internal_error() -> axum::response::Response {
    json_error(
        StatusCode::INTERNAL_SERVER_ERROR,
        "internal_error",
        "internal server error",
    )
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
