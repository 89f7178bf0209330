use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::Utc;

use chaintrack_core::OrderId;
use chaintrack_infra::RecordStore;
use chaintrack_orders::{Order, OrderDraft};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_orders).post(create_order))
        .route("/:id", get(get_order).put(update_order))
}

pub async fn list_orders(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::ListQuery>,
) -> axum::response::Response {
    match services.orders.list(query.into()).await {
        Ok(orders) => {
            let items = orders.iter().map(dto::order_to_json).collect::<Vec<_>>();
            (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
        }
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn get_order(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: OrderId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid order id"),
    };

    match services.orders.get(id).await {
        Ok(Some(order)) => (StatusCode::OK, Json(dto::order_to_json(&order))).into_response(),
        Ok(None) => errors::json_error(StatusCode::NOT_FOUND, "not_found", "order not found"),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn create_order(
    Extension(services): Extension<Arc<AppServices>>,
    Json(draft): Json<OrderDraft>,
) -> axum::response::Response {
    let order = match Order::create(OrderId::new(), draft, Utc::now()) {
        Ok(order) => order,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.orders.insert(order).await {
        Ok(stored) => (StatusCode::OK, Json(dto::order_to_json(&stored))).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn update_order(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(draft): Json<OrderDraft>,
) -> axum::response::Response {
    let id: OrderId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid order id"),
    };

    let existing = match services.orders.get(id).await {
        Ok(Some(order)) => order,
        Ok(None) => return errors::json_error(StatusCode::NOT_FOUND, "not_found", "order not found"),
        Err(e) => return errors::store_error_to_response(e),
    };

    let updated = match existing.replace_with(draft, Utc::now()) {
        Ok(order) => order,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.orders.replace(updated).await {
        Ok(Some(stored)) => (StatusCode::OK, Json(dto::order_to_json(&stored))).into_response(),
        Ok(None) => errors::json_error(StatusCode::NOT_FOUND, "not_found", "order not found"),
        Err(e) => errors::store_error_to_response(e),
    }
}
