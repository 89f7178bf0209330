use std::sync::Arc;

use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};
use chrono::Utc;

use chaintrack_activity::ActivityLogEntry;
use chaintrack_core::LogEntryId;
use chaintrack_infra::ActivityStore;

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::context::CallerContext;

/// `POST /logs/activity/` — append an audit entry attributed to the caller.
pub async fn log_activity(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(caller): Extension<CallerContext>,
    Json(body): Json<dto::LogActivityRequest>,
) -> axum::response::Response {
    let entry = match ActivityLogEntry::record(
        LogEntryId::new(),
        caller.user_id(),
        &body.action,
        Utc::now(),
    ) {
        Ok(entry) => entry,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.activity.append(entry).await {
        Ok(stored) => (StatusCode::CREATED, Json(dto::log_entry_to_json(&stored))).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}
