use axum::{Json, body::Bytes, extract::Path, http::StatusCode, response::IntoResponse};

// CSV handling is not yet specified (format and column mapping are open);
// both endpoints acknowledge the request without touching any store.

/// `POST /import/{entity_type}/` — accept and discard an upload.
pub async fn import_records(Path(entity_type): Path<String>, _body: Bytes) -> impl IntoResponse {
    tracing::info!(%entity_type, "import requested");
    (
        StatusCode::CREATED,
        Json(serde_json::json!({
            "message": format!("imported {entity_type} data"),
        })),
    )
}

/// `GET /export/{entity_type}/` — canned acknowledgement.
pub async fn export_records(Path(entity_type): Path<String>) -> impl IntoResponse {
    tracing::info!(%entity_type, "export requested");
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "message": format!("exported {entity_type} data"),
        })),
    )
}
