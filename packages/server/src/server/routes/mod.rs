// HTTP routes
pub mod catalog_api;
pub mod cors;
pub mod debug;
pub mod health;
pub mod submit;
pub mod subscribe;

pub use catalog_api::*;
pub use cors::*;
pub use debug::*;
pub use health::*;
pub use submit::*;
pub use subscribe::*;

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

/// `{ "error": "..." }`
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Upstream statuses pass through; anything unusable becomes 502.
pub fn upstream_status(status: u16) -> StatusCode {
    StatusCode::from_u16(status)
        .ok()
        .filter(|s| s.is_client_error() || s.is_server_error())
        .unwrap_or(StatusCode::BAD_GATEWAY)
}
