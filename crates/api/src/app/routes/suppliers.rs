use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::Utc;

use chaintrack_core::SupplierId;
use chaintrack_infra::RecordStore;
use chaintrack_suppliers::{Supplier, SupplierDraft};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_suppliers).post(create_supplier))
        .route("/:id", get(get_supplier).put(update_supplier))
}

pub async fn list_suppliers(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::ListQuery>,
) -> axum::response::Response {
    match services.suppliers.list(query.into()).await {
        Ok(suppliers) => {
            let items = suppliers.iter().map(dto::supplier_to_json).collect::<Vec<_>>();
            (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
        }
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn get_supplier(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: SupplierId = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid supplier id");
        }
    };

    match services.suppliers.get(id).await {
        Ok(Some(supplier)) => (StatusCode::OK, Json(dto::supplier_to_json(&supplier))).into_response(),
        Ok(None) => errors::json_error(StatusCode::NOT_FOUND, "not_found", "supplier not found"),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn create_supplier(
    Extension(services): Extension<Arc<AppServices>>,
    Json(draft): Json<SupplierDraft>,
) -> axum::response::Response {
    let supplier = match Supplier::create(SupplierId::new(), draft, Utc::now()) {
        Ok(supplier) => supplier,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.suppliers.insert(supplier).await {
        Ok(stored) => (StatusCode::OK, Json(dto::supplier_to_json(&stored))).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn update_supplier(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(draft): Json<SupplierDraft>,
) -> axum::response::Response {
    let id: SupplierId = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid supplier id");
        }
    };

    let existing = match services.suppliers.get(id).await {
        Ok(Some(supplier)) => supplier,
        Ok(None) => return errors::json_error(StatusCode::NOT_FOUND, "not_found", "supplier not found"),
        Err(e) => return errors::store_error_to_response(e),
    };

    let updated = match existing.replace_with(draft, Utc::now()) {
        Ok(supplier) => supplier,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.suppliers.replace(updated).await {
        Ok(Some(stored)) => (StatusCode::OK, Json(dto::supplier_to_json(&stored))).into_response(),
        Ok(None) => errors::json_error(StatusCode::NOT_FOUND, "not_found", "supplier not found"),
        Err(e) => errors::store_error_to_response(e),
    }
}
