use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};

use chaintrack_auth::{AuthError, TokenIssuer};
use chaintrack_infra::UserStore;

use crate::context::CallerContext;

#[derive(Clone)]
pub struct AuthState {
    pub tokens: Arc<TokenIssuer>,
    pub users: Arc<dyn UserStore>,
}

/// Bearer-token gate for protected routes.
///
/// Verifies signature/expiry, re-resolves the subject against the user
/// store, and rejects deactivated accounts. On success the resolved user is
/// attached as a [`CallerContext`] request extension.
pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let token = extract_bearer(req.headers())?;

    let claims = state.tokens.verify(token).map_err(status_for)?;

    let user = state
        .users
        .find_by_email(&claims.sub)
        .await
        .map_err(|e| {
            tracing::error!("user lookup failed during auth: {e}");
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .ok_or_else(|| status_for(AuthError::UnknownSubject))?;

    if !user.is_active {
        return Err(status_for(AuthError::Inactive));
    }

    req.extensions_mut().insert(CallerContext::new(user));

    Ok(next.run(req).await)
}

/// Wire status for an authentication failure.
///
/// A valid token over a deactivated account is a bad request rather than a
/// credential failure (the token itself checked out).
fn status_for(err: AuthError) -> StatusCode {
    match err {
        AuthError::Inactive => StatusCode::BAD_REQUEST,
        AuthError::Signing(_) => StatusCode::INTERNAL_SERVER_ERROR,
        AuthError::InvalidCredentials | AuthError::InvalidToken | AuthError::UnknownSubject => {
            StatusCode::UNAUTHORIZED
        }
    }
}

fn extract_bearer(headers: &HeaderMap) -> Result<&str, StatusCode> {
    let header = headers
        .get(axum::http::header::AUTHORIZATION)
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let header = header.to_str().map_err(|_| StatusCode::UNAUTHORIZED)?;

    let header = header
        .strip_prefix("Bearer ")
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let token = header.trim();
    if token.is_empty() {
        return Err(StatusCode::UNAUTHORIZED);
    }

    Ok(token)
}
