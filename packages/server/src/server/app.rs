//! Application setup and server configuration.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::Extension,
    http::{header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue, Method},
    routing::{get, post, MethodRouter},
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::kernel::ServerDeps;
use crate::server::routes::{
    category_page_handler, collections_handler, debug_handler, featured_handler, health_handler,
    list_categories_handler, list_tools_handler, locales_handler, method_not_allowed_handler,
    preflight_handler, submit_handler, subscribe_handler, tool_detail_handler,
    translations_handler, RELAY_ALLOW_ORIGIN,
};

/// Upper bound for a whole request, relay round trips included
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub deps: Arc<ServerDeps>,
}

/// A relay endpoint: POST plus preflight, everything else is 405.
fn relay_route<H, T>(handler: H) -> MethodRouter
where
    H: axum::handler::Handler<T, ()>,
    T: 'static,
{
    post(handler)
        .options(preflight_handler)
        .fallback(method_not_allowed_handler)
}

/// CORS for the read API. An empty list allows any origin.
fn read_api_cors(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods([Method::GET]);

    if allowed_origins.is_empty() {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    cors.allow_origin(AllowOrigin::list(origins))
}

/// Build the Axum application router
///
/// Relay routes answer every origin with `*`; the read API uses the
/// configured origin list.
pub fn build_app(deps: Arc<ServerDeps>, allowed_origins: &[String]) -> Router {
    let app_state = AppState { deps };

    let relay_routes = Router::new()
        .route("/api/subscribe", relay_route(subscribe_handler))
        .route("/api/submit", relay_route(submit_handler))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static(RELAY_ALLOW_ORIGIN),
        ));

    let read_routes = Router::new()
        .route("/api/tools", get(list_tools_handler))
        .route("/api/tools/:id", get(tool_detail_handler))
        .route("/api/categories", get(list_categories_handler))
        .route("/api/categories/:slug", get(category_page_handler))
        .route("/api/collections", get(collections_handler))
        .route("/api/featured", get(featured_handler))
        .route("/api/locales", get(locales_handler))
        .route(
            "/api/translations/:locale/:namespace",
            get(translations_handler),
        )
        .route("/api/debug", get(debug_handler))
        .layer(read_api_cors(allowed_origins));

    Router::new()
        // Health check
        .route("/health", get(health_handler))
        .merge(relay_routes)
        .merge(read_routes)
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(app_state))
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(TraceLayer::new_for_http())
}
