use std::sync::Arc;

use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};
use chrono::Utc;

use chaintrack_auth::{RegisterError, User, normalize_email};
use chaintrack_core::UserId;
use chaintrack_infra::{StoreError, UserStore};

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::context::CallerContext;

/// `POST /users/` — signup. Open endpoint; duplicate emails are a 400.
pub async fn create_user(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateUserRequest>,
) -> axum::response::Response {
    match services.users.find_by_email(&normalize_email(&body.email)).await {
        Ok(Some(_)) => {
            return errors::json_error(
                StatusCode::BAD_REQUEST,
                "email_taken",
                "email already registered",
            );
        }
        Ok(None) => {}
        Err(e) => return errors::store_error_to_response(e),
    }

    let user = match User::register(UserId::new(), &body.email, &body.password, Utc::now()) {
        Ok(user) => user,
        Err(RegisterError::Invalid(e)) => return errors::domain_error_to_response(e),
        Err(e @ RegisterError::Hash(_)) => {
            return errors::json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                e.to_string(),
            );
        }
    };

    match services.users.insert(user).await {
        Ok(stored) => (StatusCode::OK, Json(dto::user_to_json(&stored))).into_response(),
        // Lost a race with a concurrent signup for the same email.
        Err(StoreError::Duplicate(_)) => errors::json_error(
            StatusCode::BAD_REQUEST,
            "email_taken",
            "email already registered",
        ),
        Err(e) => errors::store_error_to_response(e),
    }
}

/// `GET /users/me/` — the caller resolved by the auth middleware.
pub async fn me(Extension(caller): Extension<CallerContext>) -> impl IntoResponse {
    Json(dto::user_to_json(caller.user()))
}
