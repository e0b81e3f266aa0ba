use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::{error_response, upstream_status};
use crate::domains::newsletter::{subscribe, SubscribeError, SubscribeRequest, SubscribeResponse};
use crate::server::app::AppState;

impl IntoResponse for SubscribeError {
    fn into_response(self) -> Response {
        match self {
            SubscribeError::InvalidEmail => {
                error_response(StatusCode::BAD_REQUEST, self.to_string())
            }
            SubscribeError::NotConfigured | SubscribeError::Internal(_) => {
                error_response(StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            SubscribeError::Upstream { status, message } => error_response(
                upstream_status(status),
                message.unwrap_or_else(|| "Subscription failed".to_string()),
            ),
        }
    }
}

/// `POST /api/subscribe`
///
/// An unreadable body is treated like one without an email.
pub async fn subscribe_handler(
    Extension(state): Extension<AppState>,
    body: Result<Json<SubscribeRequest>, JsonRejection>,
) -> Result<Json<SubscribeResponse>, SubscribeError> {
    let request = body.map(|Json(request)| request).unwrap_or_default();

    let outcome = subscribe(
        request.email.as_deref(),
        state.deps.mailing_list.as_deref(),
    )
    .await?;

    Ok(Json(outcome.into()))
}
