use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::Utc;

use chaintrack_core::ItemId;
use chaintrack_infra::RecordStore;
use chaintrack_inventory::{InventoryItem, ItemDraft};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_items).post(create_item))
        .route("/:id", get(get_item).put(update_item))
}

pub async fn list_items(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::ListQuery>,
) -> axum::response::Response {
    match services.inventory.list(query.into()).await {
        Ok(items) => {
            let items = items.iter().map(dto::item_to_json).collect::<Vec<_>>();
            (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
        }
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn get_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ItemId = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid inventory id");
        }
    };

    match services.inventory.get(id).await {
        Ok(Some(item)) => (StatusCode::OK, Json(dto::item_to_json(&item))).into_response(),
        Ok(None) => errors::json_error(StatusCode::NOT_FOUND, "not_found", "inventory item not found"),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn create_item(
    Extension(services): Extension<Arc<AppServices>>,
    Json(draft): Json<ItemDraft>,
) -> axum::response::Response {
    let item = match InventoryItem::create(ItemId::new(), draft, Utc::now()) {
        Ok(item) => item,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.inventory.insert(item).await {
        Ok(stored) => (StatusCode::OK, Json(dto::item_to_json(&stored))).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn update_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(draft): Json<ItemDraft>,
) -> axum::response::Response {
    let id: ItemId = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid inventory id");
        }
    };

    let existing = match services.inventory.get(id).await {
        Ok(Some(item)) => item,
        Ok(None) => {
            return errors::json_error(StatusCode::NOT_FOUND, "not_found", "inventory item not found");
        }
        Err(e) => return errors::store_error_to_response(e),
    };

    let updated = match existing.replace_with(draft, Utc::now()) {
        Ok(item) => item,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.inventory.replace(updated).await {
        Ok(Some(stored)) => (StatusCode::OK, Json(dto::item_to_json(&stored))).into_response(),
        Ok(None) => errors::json_error(StatusCode::NOT_FOUND, "not_found", "inventory item not found"),
        Err(e) => errors::store_error_to_response(e),
    }
}
