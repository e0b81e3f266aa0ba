//! Response and parameter types for the catalog read API.

pub mod category;
pub mod tool;

pub use category::{CategoryData, CategoryListData, CategoryPageData, CategoryRefData};
pub use tool::{uncategorized_label, FeaturedData, ToolData, ToolListData};

use catalog::Locale;
use serde::{Deserialize, Serialize};

/// `?q=&category=&tags=a,b&sort=&locale=` on `GET /api/tools`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToolListParams {
    pub q: Option<String>,
    /// Category id or slug
    pub category: Option<String>,
    /// Comma separated, all must match
    pub tags: Option<String>,
    pub sort: Option<String>,
    pub locale: Option<String>,
}

/// `?sort=&locale=` on category pages
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoryPageParams {
    pub sort: Option<String>,
    pub locale: Option<String>,
}

/// `?locale=` on everything else
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocaleParams {
    pub locale: Option<String>,
}

/// `{ "tool", "category", "related" }`
#[derive(Debug, Clone, Serialize)]
pub struct ToolDetailData {
    pub tool: ToolData,
    pub category: CategoryRefData,
    pub related: Vec<ToolData>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CollectionData {
    pub id: &'static str,
    pub title: String,
    pub description: String,
    pub tools: Vec<ToolData>,
}

/// `{ "collections": [...] }`
#[derive(Debug, Clone, Serialize)]
pub struct CollectionsData {
    pub collections: Vec<CollectionData>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleData {
    pub code: &'static str,
    pub name: &'static str,
    pub native_name: &'static str,
}

impl From<Locale> for LocaleData {
    fn from(locale: Locale) -> Self {
        Self {
            code: locale.code(),
            name: locale.name(),
            native_name: locale.native_name(),
        }
    }
}
