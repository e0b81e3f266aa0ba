use axum::{extract::Extension, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::server::app::AppState;

/// Which relay credentials are configured. Presence only, never values.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugResponse {
    has_api_key: bool,
    has_list_id: bool,
    has_access_key: bool,
    timestamp: DateTime<Utc>,
}

pub async fn debug_handler(Extension(state): Extension<AppState>) -> Json<DebugResponse> {
    let status = state.deps.config_status;

    Json(DebugResponse {
        has_api_key: status.has_api_key,
        has_list_id: status.has_list_id,
        has_access_key: status.has_access_key,
        timestamp: Utc::now(),
    })
}
