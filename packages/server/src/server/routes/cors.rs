//! Open CORS for the relay endpoints.
//!
//! The relays are called from any origin, so every answer carries
//! `Access-Control-Allow-Origin: *` (added by a response header layer in
//! `app.rs`) and preflights are answered here with an empty 204.

use axum::{
    http::{
        header::{ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS},
        HeaderValue, StatusCode,
    },
    response::{IntoResponse, Response},
};

pub const RELAY_ALLOW_ORIGIN: &str = "*";
pub const RELAY_ALLOW_METHODS: &str = "POST, OPTIONS";
pub const RELAY_ALLOW_HEADERS: &str = "Content-Type";

/// `OPTIONS` on a relay endpoint
pub async fn preflight_handler() -> Response {
    (
        StatusCode::NO_CONTENT,
        [
            (
                ACCESS_CONTROL_ALLOW_METHODS,
                HeaderValue::from_static(RELAY_ALLOW_METHODS),
            ),
            (
                ACCESS_CONTROL_ALLOW_HEADERS,
                HeaderValue::from_static(RELAY_ALLOW_HEADERS),
            ),
        ],
    )
        .into_response()
}

/// Any other method on a relay endpoint
pub async fn method_not_allowed_handler() -> Response {
    super::error_response(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}
