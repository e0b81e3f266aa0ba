use std::collections::HashMap;

use axum::{
    extract::{multipart::MultipartRejection, Extension, Multipart},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::warn;

use super::upstream_status;
use crate::domains::submissions::{
    submit_tool, SubmissionError, SubmissionOutcome, SubmissionResponse,
};
use crate::server::app::AppState;

impl IntoResponse for SubmissionError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            SubmissionError::InvalidForm(_) | SubmissionError::MissingField(_) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            SubmissionError::NotConfigured | SubmissionError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            SubmissionError::Upstream { status, message } => {
                let message = if message.trim().is_empty() {
                    "Submission failed".to_string()
                } else {
                    message
                };
                (upstream_status(status), message)
            }
        };

        (status, Json(SubmissionResponse::failed(message))).into_response()
    }
}

/// Collect every multipart field as text. Later duplicates win.
async fn read_fields(mut multipart: Multipart) -> Result<HashMap<String, String>, SubmissionError> {
    let mut fields = HashMap::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| SubmissionError::InvalidForm(e.to_string()))?
    {
        let Some(name) = field.name().map(String::from) else {
            continue;
        };
        let value = field
            .text()
            .await
            .map_err(|e| SubmissionError::InvalidForm(e.to_string()))?;
        fields.insert(name, value);
    }

    Ok(fields)
}

/// `POST /api/submit`
pub async fn submit_handler(
    Extension(state): Extension<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<SubmissionResponse>, SubmissionError> {
    let multipart = multipart.map_err(|e| {
        warn!(error = %e, "Rejected non-multipart submission");
        SubmissionError::InvalidForm(e.to_string())
    })?;
    let fields = read_fields(multipart).await?;

    let outcome = submit_tool(
        &fields,
        state.deps.catalogs.base(),
        state.deps.form_relay.as_deref(),
    )
    .await?;

    let response = match outcome {
        SubmissionOutcome::Relayed { message } => SubmissionResponse::ok(message),
        SubmissionOutcome::Discarded => SubmissionResponse::ok("Submission received"),
    };

    Ok(Json(response))
}
