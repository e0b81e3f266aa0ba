//! Tool data types for the read API.

use catalog::{Catalog, Locale, ToolRecord, Translations};
use serde::Serialize;

/// A tool as rendered in lists: the record plus display labels
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolData {
    #[serde(flatten)]
    pub tool: ToolRecord,
    /// Localized category name, or the "uncategorized" label
    pub category_name: String,
    pub pricing_label: String,
}

impl ToolData {
    /// `catalog` must already be localized for `locale`.
    pub fn new(
        tool: &ToolRecord,
        catalog: &Catalog,
        translations: &Translations,
        locale: Locale,
    ) -> Self {
        let category_name = match catalog.category_of(tool) {
            Some(category) => category.name.clone(),
            None => uncategorized_label(translations, locale),
        };

        Self {
            tool: tool.clone(),
            category_name,
            pricing_label: translations.translate(
                "common",
                &format!("pricing.{}", tool.pricing.as_str()),
                locale,
            ),
        }
    }

    pub fn list(
        tools: &[&ToolRecord],
        catalog: &Catalog,
        translations: &Translations,
        locale: Locale,
    ) -> Vec<Self> {
        tools
            .iter()
            .map(|tool| Self::new(tool, catalog, translations, locale))
            .collect()
    }
}

pub fn uncategorized_label(translations: &Translations, locale: Locale) -> String {
    translations.translate("common", "category.uncategorized", locale)
}

/// `{ "tools": [...], "count": n }`
#[derive(Debug, Clone, Serialize)]
pub struct ToolListData {
    pub tools: Vec<ToolData>,
    pub count: usize,
}

impl From<Vec<ToolData>> for ToolListData {
    fn from(tools: Vec<ToolData>) -> Self {
        Self {
            count: tools.len(),
            tools,
        }
    }
}

/// `{ "tools": [...] }`
#[derive(Debug, Clone, Serialize)]
pub struct FeaturedData {
    pub tools: Vec<ToolData>,
}
