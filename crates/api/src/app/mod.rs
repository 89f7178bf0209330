//! HTTP application wiring (axum router + service construction).
//!
//! Layout:
//! - `services.rs`: store/token wiring chosen at startup (in-memory or
//!   Postgres behind the `postgres` feature)
//! - `routes/`: HTTP routes + handlers, one file per domain area
//! - `dto.rs`: request DTOs and JSON response mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get, routing::post};
use tower::ServiceBuilder;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

use services::AppServices;

/// Build the full router with services chosen from the environment
/// (public entrypoint used by `main.rs`).
pub async fn build_app(jwt_secret: String) -> Router {
    let services = Arc::new(services::build_services(jwt_secret).await);
    build_router(services)
}

/// Wire the routing tree around an explicit set of services.
///
/// Every dependency a handler touches is injected here; there is no
/// ambient global state.
pub fn build_router(services: Arc<AppServices>) -> Router {
    let auth_state = middleware::AuthState {
        tokens: services.tokens.clone(),
        users: services.users.clone(),
    };

    // Protected routes: bearer token required, caller context attached.
    let protected = routes::router().layer(axum::middleware::from_fn_with_state(
        auth_state,
        middleware::auth_middleware,
    ));

    Router::new()
        .route("/health", get(routes::system::health))
        .route("/token", post(routes::tokens::issue_token))
        .route("/users/", post(routes::users::create_user))
        .merge(protected)
        .layer(ServiceBuilder::new().layer(Extension(services)))
}
