use axum::{
    Router,
    routing::{get, post},
};

pub mod activity;
pub mod inventory;
pub mod orders;
pub mod suppliers;
pub mod system;
pub mod tokens;
pub mod transfer;
pub mod users;

/// Router for all authenticated endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/users/me/", get(users::me))
        .nest("/inventory", inventory::router())
        .nest("/orders", orders::router())
        .nest("/suppliers", suppliers::router())
        .route("/logs/activity/", post(activity::log_activity))
        .route("/import/:entity_type/", post(transfer::import_records))
        .route("/export/:entity_type/", get(transfer::export_records))
}
