//! Integration tests for the read-only catalog API.

mod common;

use crate::common::TestHarness;
use axum::http::StatusCode;
use serde_json::{json, Value};

fn tool_ids(body: &Value, key: &str) -> Vec<String> {
    body[key]
        .as_array()
        .expect("tool list")
        .iter()
        .map(|t| t["id"].as_str().unwrap_or_default().to_string())
        .collect()
}

// =============================================================================
// Tools
// =============================================================================

#[tokio::test]
async fn tool_list_defaults_to_everything_trending() {
    let ctx = TestHarness::new();

    let response = ctx.get("/api/tools").await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["count"], 12);
    let ids = tool_ids(&body, "tools");
    assert_eq!(&ids[..3], ["t1", "t2", "t4"]);
}

#[tokio::test]
async fn tool_list_filters_and_sorts() {
    let ctx = TestHarness::new();

    let body = ctx
        .get("/api/tools?tags=IDE%20Integration&sort=newest")
        .await
        .json();
    assert_eq!(tool_ids(&body, "tools"), vec!["t9", "t4"]);

    let body = ctx.get("/api/tools?category=coding&sort=rating").await.json();
    assert_eq!(body["count"], 2);

    let body = ctx.get("/api/tools?category=does-not-exist").await.json();
    assert_eq!(body, json!({"tools": [], "count": 0}));

    let body = ctx.get("/api/tools?q=%20%20").await.json();
    assert_eq!(body["count"], 12);
}

#[tokio::test]
async fn tool_list_items_carry_display_labels() {
    let ctx = TestHarness::new();

    let body = ctx.get("/api/tools?q=midjourney").await.json();
    let tool = &body["tools"][0];

    assert_eq!(tool["id"], "t2");
    assert_eq!(tool["categoryId"], "2");
    assert_eq!(tool["categoryName"], "Image Generation");
    assert!(tool["pricingLabel"].is_string());
    assert!(tool["visitCount"].is_u64());
}

#[tokio::test]
async fn tool_detail_and_missing_tool() {
    let ctx = TestHarness::new();

    let response = ctx.get("/api/tools/t4").await;
    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["tool"]["name"], "GitHub Copilot");
    assert_eq!(body["category"]["id"], "3");
    assert_eq!(tool_ids(&body, "related"), vec!["t9"]);

    let missing = ctx.get("/api/tools/nope").await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.json(), json!({"error": "Tool not found"}));
}

#[tokio::test]
async fn localized_tool_detail() {
    let ctx = TestHarness::new();

    let en = ctx.get("/api/tools/t4").await.json();
    let zh = ctx.get("/api/tools/t4?locale=zh-CN").await.json();

    assert_eq!(en["tool"]["name"], zh["tool"]["name"]);
    assert_eq!(
        zh["tool"]["description"],
        "你的 AI 结对编程伙伴，通过建议代码实时辅助开发。"
    );
    assert_eq!(zh["category"]["name"], "编程开发");

    // unknown locales fall back to English
    let xx = ctx.get("/api/tools/t4?locale=xx").await.json();
    assert_eq!(xx, en);
}

// =============================================================================
// Categories, collections and featured
// =============================================================================

#[tokio::test]
async fn categories_with_counts() {
    let ctx = TestHarness::new();

    let body = ctx.get("/api/categories").await.json();
    let categories = body["categories"].as_array().expect("category list");

    assert_eq!(categories.len(), 10);
    let coding = categories
        .iter()
        .find(|c| c["slug"] == "coding")
        .expect("coding category");
    assert_eq!(coding["toolCount"], 2);
    assert_eq!(coding["iconName"], "Code");
}

#[tokio::test]
async fn category_page_and_missing_slug() {
    let ctx = TestHarness::new();

    let response = ctx.get("/api/categories/video-creation?sort=rating").await;
    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["category"]["id"], "4");
    assert_eq!(body["count"], 2);
    assert_eq!(tool_ids(&body, "tools"), vec!["t5", "t10"]);

    let unsorted = ctx.get("/api/categories/video-creation").await.json();
    assert_eq!(tool_ids(&unsorted, "tools"), vec!["t5", "t10"]);

    let trending = ctx
        .get("/api/categories/video-creation?sort=trending")
        .await
        .json();
    assert_eq!(tool_ids(&trending, "tools"), vec!["t10", "t5"]);

    let missing = ctx.get("/api/categories/nope").await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.json(), json!({"error": "Category not found"}));
}

#[tokio::test]
async fn collections_are_titled_and_ordered() {
    let ctx = TestHarness::new();

    let body = ctx.get("/api/collections").await.json();
    let collections = body["collections"].as_array().expect("collections");

    let ids: Vec<&str> = collections
        .iter()
        .map(|c| c["id"].as_str().unwrap_or_default())
        .collect();
    assert_eq!(ids, vec!["featured", "top-rated", "trending", "latest"]);

    let top_rated = &collections[1];
    assert_eq!(top_rated["title"], "Top Rated");
    assert_eq!(tool_ids(top_rated, "tools")[0], "t5");

    let latest = &collections[3];
    assert_eq!(tool_ids(latest, "tools")[0], "t12");

    assert!(collections
        .iter()
        .all(|c| c["tools"].as_array().map_or(0, Vec::len) <= 8));
}

#[tokio::test]
async fn featured_tools_in_source_order() {
    let ctx = TestHarness::new();

    let body = ctx.get("/api/featured").await.json();
    assert_eq!(
        tool_ids(&body, "tools"),
        vec!["t1", "t2", "t3", "t5", "t8", "t9"]
    );
}

// =============================================================================
// Locales and translations
// =============================================================================

#[tokio::test]
async fn locale_list() {
    let ctx = TestHarness::new();

    let body = ctx.get("/api/locales").await.json();
    let locales = body.as_array().expect("locale list");

    assert_eq!(locales.len(), 8);
    assert_eq!(locales[0]["code"], "en");
    assert!(locales.iter().all(|l| l["nativeName"].is_string()));
}

#[tokio::test]
async fn translation_namespace_falls_back_to_english() {
    let ctx = TestHarness::new();

    let ko = ctx.get("/api/translations/ko/common").await;
    assert_eq!(ko.status, StatusCode::OK);
    let ko = ko.json();
    assert_eq!(ko["category"]["uncategorized"], "미분류");
    assert_eq!(ko["siteName"], "AIBench");

    let missing = ctx.get("/api/translations/en/nope").await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn korean_and_russian_categories_are_localized() {
    let ctx = TestHarness::new();

    let ko = ctx.get("/api/categories?locale=ko").await.json();
    assert_eq!(ko["categories"][0]["name"], "글쓰기");

    let ru = ctx.get("/api/tools/t4?locale=ru").await.json();
    assert_eq!(ru["category"]["name"], "Разработка кода");
    assert_eq!(ru["tool"]["name"], "GitHub Copilot");
}

// =============================================================================
// Health and debug
// =============================================================================

#[tokio::test]
async fn health_reports_dataset_size() {
    let ctx = TestHarness::new();

    let response = ctx.get("/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.json(),
        json!({"status": "healthy", "tools": 12, "categories": 10})
    );
}

#[tokio::test]
async fn debug_reports_presence_only() {
    let configured = TestHarness::new().get("/api/debug").await.json();
    assert_eq!(configured["hasApiKey"], true);
    assert_eq!(configured["hasListId"], true);
    assert_eq!(configured["hasAccessKey"], true);
    assert!(configured["timestamp"].is_string());

    let bare = TestHarness::unconfigured().get("/api/debug").await.json();
    assert_eq!(bare["hasApiKey"], false);
    assert_eq!(bare["hasAccessKey"], false);
    assert_eq!(bare.as_object().map(|o| o.len()), Some(4));
}

#[tokio::test]
async fn read_api_allows_cross_origin_gets() {
    let ctx = TestHarness::new();

    let request = axum::http::Request::builder()
        .uri("/api/tools")
        .header("origin", "https://somewhere.example")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = ctx.send(request).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.header("access-control-allow-origin"), Some("*"));
}
