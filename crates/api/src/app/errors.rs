use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use chaintrack_core::DomainError;
use chaintrack_infra::StoreError;

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

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
    }
}

pub fn store_error_to_response(err: StoreError) -> axum::response::Response {
    match err {
        StoreError::Duplicate(what) => {
            json_error(StatusCode::BAD_REQUEST, "duplicate", format!("duplicate {what}"))
        }
        StoreError::Unavailable(msg) => {
            tracing::error!("store unavailable: {msg}");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "store_error", msg)
        }
    }
}
