use std::sync::Arc;

use axum::{Form, Json, extract::Extension, http::StatusCode, response::IntoResponse};

use chaintrack_auth::{AuthError, normalize_email};
use chaintrack_infra::UserStore;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

/// `POST /token` — verify credentials, mint a bearer token.
pub async fn issue_token(
    Extension(services): Extension<Arc<AppServices>>,
    Form(body): Form<dto::TokenRequest>,
) -> axum::response::Response {
    let email = normalize_email(&body.username);

    let user = match services.users.find_by_email(&email).await {
        Ok(user) => user,
        Err(e) => return errors::store_error_to_response(e),
    };

    // Unknown email and hash mismatch are indistinguishable to the caller.
    let user = match user {
        Some(u) if u.verify_password(&body.password) => u,
        _ => {
            return errors::json_error(
                StatusCode::UNAUTHORIZED,
                "invalid_credentials",
                AuthError::InvalidCredentials.to_string(),
            );
        }
    };

    match services.tokens.issue(&user.email) {
        Ok(minted) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "access_token": minted.token,
                "token_type": "bearer",
                "expires_in": minted.expires_in,
            })),
        )
            .into_response(),
        Err(e) => errors::json_error(StatusCode::INTERNAL_SERVER_ERROR, "token_error", e.to_string()),
    }
}
