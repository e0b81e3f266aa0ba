//! Locale-substituted catalog views.
//!
//! Only free text changes: tool descriptions and category names and
//! descriptions. Tool names and every id stay as loaded, so query results
//! are the same set in every locale.

use std::collections::HashMap;
use std::sync::Arc;

use crate::dataset::Catalog;
use crate::i18n::{Locale, Translations};
use crate::models::{CategoryRecord, ToolRecord};

const TOOLS_NS: &str = "tools";
const CATEGORIES_NS: &str = "categories";

impl Catalog {
    /// Copy of this catalog with text substituted for `locale`.
    pub fn localized(&self, translations: &Translations, locale: Locale) -> Catalog {
        let tools: Vec<ToolRecord> = self
            .tools()
            .iter()
            .map(|tool| localize_tool(tool, translations, locale))
            .collect();

        let categories: Vec<CategoryRecord> = self
            .categories()
            .iter()
            .map(|category| localize_category(category, translations, locale))
            .collect();

        Catalog::from_parts(Arc::from(tools), Arc::from(categories))
    }
}

fn localize_tool(tool: &ToolRecord, translations: &Translations, locale: Locale) -> ToolRecord {
    let mut localized = tool.clone();

    if let Some(description) =
        translations.lookup(TOOLS_NS, &format!("{}.description", tool.id), locale)
    {
        localized.description = description.to_string();
    }

    if let Some(long) =
        translations.lookup(TOOLS_NS, &format!("{}.longDescription", tool.id), locale)
    {
        localized.long_description = Some(long.to_string());
    }

    localized
}

fn localize_category(
    category: &CategoryRecord,
    translations: &Translations,
    locale: Locale,
) -> CategoryRecord {
    let mut localized = category.clone();

    if let Some(name) = translations.lookup(CATEGORIES_NS, &format!("{}.name", category.id), locale)
    {
        localized.name = name.to_string();
    }

    if let Some(description) =
        translations.lookup(CATEGORIES_NS, &format!("{}.description", category.id), locale)
    {
        localized.description = Some(description.to_string());
    }

    localized
}

/// One localized catalog per supported locale, built once at startup.
#[derive(Debug, Clone)]
pub struct LocalizedCatalogs {
    base: Arc<Catalog>,
    by_locale: HashMap<Locale, Arc<Catalog>>,
}

impl LocalizedCatalogs {
    pub fn build(base: &Catalog, translations: &Translations) -> Self {
        let by_locale = Locale::ALL
            .iter()
            .map(|&locale| (locale, Arc::new(base.localized(translations, locale))))
            .collect();

        Self {
            base: Arc::new(base.clone()),
            by_locale,
        }
    }

    pub fn get(&self, locale: Locale) -> Arc<Catalog> {
        self.by_locale
            .get(&locale)
            .cloned()
            .unwrap_or_else(|| self.base.clone())
    }

    /// The catalog as loaded, before any substitution.
    pub fn base(&self) -> &Catalog {
        &self.base
    }
}
