//! Read-only catalog endpoints. Every handler takes an optional
//! `?locale=`; unknown codes fall back to English.

use ::catalog::Locale;
use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

use super::error_response;
use crate::domains::catalog::{
    data::{CategoryListData, CategoryPageParams, CollectionsData, FeaturedData, LocaleData},
    query_categories, query_category_page, query_collections, query_featured, query_locales,
    query_tool, query_tools, query_translations, LocaleParams, ToolListData, ToolListParams,
};
use crate::server::app::AppState;

fn locale_of(raw: Option<&str>) -> Locale {
    Locale::parse_or_fallback(raw)
}

/// `GET /api/tools`
pub async fn list_tools_handler(
    Extension(state): Extension<AppState>,
    Query(params): Query<ToolListParams>,
) -> Json<ToolListData> {
    let locale = locale_of(params.locale.as_deref());
    Json(query_tools(&state.deps, locale, &params))
}

/// `GET /api/tools/:id`
pub async fn tool_detail_handler(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
    Query(params): Query<LocaleParams>,
) -> Response {
    let locale = locale_of(params.locale.as_deref());

    match query_tool(&state.deps, locale, &id) {
        Some(detail) => Json(detail).into_response(),
        None => error_response(StatusCode::NOT_FOUND, "Tool not found"),
    }
}

/// `GET /api/categories`
pub async fn list_categories_handler(
    Extension(state): Extension<AppState>,
    Query(params): Query<LocaleParams>,
) -> Json<CategoryListData> {
    let locale = locale_of(params.locale.as_deref());
    Json(query_categories(&state.deps, locale))
}

/// `GET /api/categories/:slug`
pub async fn category_page_handler(
    Extension(state): Extension<AppState>,
    Path(slug): Path<String>,
    Query(params): Query<CategoryPageParams>,
) -> Response {
    let locale = locale_of(params.locale.as_deref());

    match query_category_page(&state.deps, locale, &slug, params.sort.as_deref()) {
        Some(page) => Json(page).into_response(),
        None => error_response(StatusCode::NOT_FOUND, "Category not found"),
    }
}

/// `GET /api/collections`
pub async fn collections_handler(
    Extension(state): Extension<AppState>,
    Query(params): Query<LocaleParams>,
) -> Json<CollectionsData> {
    let locale = locale_of(params.locale.as_deref());
    Json(query_collections(&state.deps, locale))
}

/// `GET /api/featured`
pub async fn featured_handler(
    Extension(state): Extension<AppState>,
    Query(params): Query<LocaleParams>,
) -> Json<FeaturedData> {
    let locale = locale_of(params.locale.as_deref());
    Json(query_featured(&state.deps, locale))
}

/// `GET /api/locales`
pub async fn locales_handler() -> Json<Vec<LocaleData>> {
    Json(query_locales())
}

/// `GET /api/translations/:locale/:namespace`
pub async fn translations_handler(
    Extension(state): Extension<AppState>,
    Path((locale, namespace)): Path<(String, String)>,
) -> Result<Json<Value>, Response> {
    let locale = locale_of(Some(&locale));

    query_translations(&state.deps.translations, locale, &namespace)
        .map(Json)
        .ok_or_else(|| error_response(StatusCode::NOT_FOUND, "Namespace not found"))
}
