//! Category data types for the read API.

use catalog::{CategoryRecord, IconName};
use serde::Serialize;

use super::ToolData;

/// A category with the number of tools filed under it
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryData {
    #[serde(flatten)]
    pub category: CategoryRecord,
    pub tool_count: usize,
}

/// Category reference on a tool detail page. `id` is null when the tool
/// points at a category that does not exist.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRefData {
    pub id: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_name: Option<IconName>,
}

impl CategoryRefData {
    pub fn uncategorized(label: String) -> Self {
        Self {
            id: None,
            name: label,
            slug: None,
            icon_name: None,
        }
    }
}

impl From<&CategoryRecord> for CategoryRefData {
    fn from(category: &CategoryRecord) -> Self {
        Self {
            id: Some(category.id.clone()),
            name: category.name.clone(),
            slug: Some(category.slug.clone()),
            icon_name: Some(category.icon_name),
        }
    }
}

/// `{ "category", "tools", "count" }`
#[derive(Debug, Clone, Serialize)]
pub struct CategoryPageData {
    pub category: CategoryData,
    pub tools: Vec<ToolData>,
    pub count: usize,
}

/// `{ "categories": [...] }`
#[derive(Debug, Clone, Serialize)]
pub struct CategoryListData {
    pub categories: Vec<CategoryData>,
}
