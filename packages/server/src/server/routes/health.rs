use axum::{extract::Extension, Json};
use serde::Serialize;

use crate::server::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    tools: usize,
    categories: usize,
}

/// Health check endpoint
///
/// The catalog is loaded before the listener binds, so a running server is
/// always healthy; the counts confirm which dataset is being served.
pub async fn health_handler(Extension(state): Extension<AppState>) -> Json<HealthResponse> {
    let catalog = state.deps.catalogs.base();

    Json(HealthResponse {
        status: "healthy",
        tools: catalog.tools().len(),
        categories: catalog.categories().len(),
    })
}
