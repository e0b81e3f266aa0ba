//! The static catalog: tool and category lists plus lookups over them.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use serde::Deserialize;
use tracing::debug;

use crate::error::{CatalogError, Result};
use crate::models::{CategoryRecord, ToolRecord};
use crate::query::{apply_query, QueryState};
use crate::search::ToolSearch;

const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

#[derive(Deserialize)]
struct CatalogFile {
    categories: Vec<CategoryRecord>,
    tools: Vec<ToolRecord>,
}

/// Immutable tool and category lists.
///
/// Cloning is cheap; both lists are shared.
#[derive(Debug, Clone)]
pub struct Catalog {
    tools: Arc<[ToolRecord]>,
    categories: Arc<[CategoryRecord]>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and slugs.
    ///
    /// Tools whose `category_id` matches no category are accepted; they
    /// display as uncategorized.
    pub fn new(tools: Vec<ToolRecord>, categories: Vec<CategoryRecord>) -> Result<Self> {
        let mut tool_ids = HashSet::new();
        for tool in &tools {
            if !tool_ids.insert(tool.id.as_str()) {
                return Err(CatalogError::DuplicateToolId(tool.id.clone()));
            }
        }

        let mut category_ids = HashSet::new();
        let mut slugs = HashSet::new();
        for category in &categories {
            if !category_ids.insert(category.id.as_str()) {
                return Err(CatalogError::DuplicateCategoryId(category.id.clone()));
            }
            if !slugs.insert(category.slug.as_str()) {
                return Err(CatalogError::DuplicateSlug(category.slug.clone()));
            }
        }

        let dangling = tools
            .iter()
            .filter(|t| !category_ids.contains(t.category_id.as_str()))
            .count();
        if dangling > 0 {
            debug!(dangling, "Tools reference unknown categories");
        }

        Ok(Self {
            tools: tools.into(),
            categories: categories.into(),
        })
    }

    /// Parse a `{ "categories": [...], "tools": [...] }` document.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.tools, file.categories)
    }

    /// The dataset compiled into the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    pub(crate) fn from_parts(tools: Arc<[ToolRecord]>, categories: Arc<[CategoryRecord]>) -> Self {
        Self { tools, categories }
    }

    pub fn tools(&self) -> &[ToolRecord] {
        &self.tools
    }

    /// Shared handle to the tool list, for [`ToolSearch`].
    pub fn shared_tools(&self) -> Arc<[ToolRecord]> {
        self.tools.clone()
    }

    pub fn categories(&self) -> &[CategoryRecord] {
        &self.categories
    }

    /// Start a stateful search over this catalog.
    pub fn search(&self) -> ToolSearch {
        ToolSearch::new(self.shared_tools())
    }

    pub fn query(&self, state: &QueryState) -> Vec<&ToolRecord> {
        apply_query(&self.tools, state)
    }

    pub fn tool(&self, id: &str) -> Option<&ToolRecord> {
        self.tools.iter().find(|t| t.id == id)
    }

    pub fn category(&self, id: &str) -> Option<&CategoryRecord> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn category_by_slug(&self, slug: &str) -> Option<&CategoryRecord> {
        self.categories.iter().find(|c| c.slug == slug)
    }

    /// `None` when the tool points at a category that does not exist.
    pub fn category_of(&self, tool: &ToolRecord) -> Option<&CategoryRecord> {
        self.category(&tool.category_id)
    }

    pub fn tools_in_category(&self, category_id: &str) -> Vec<&ToolRecord> {
        self.tools
            .iter()
            .filter(|t| t.category_id == category_id)
            .collect()
    }

    /// Other tools from the same category, in source order.
    pub fn related_tools(&self, tool: &ToolRecord, limit: usize) -> Vec<&ToolRecord> {
        self.tools
            .iter()
            .filter(|t| t.category_id == tool.category_id && t.id != tool.id)
            .take(limit)
            .collect()
    }

    pub fn featured(&self, limit: usize) -> Vec<&ToolRecord> {
        self.tools
            .iter()
            .filter(|t| t.is_featured)
            .take(limit)
            .collect()
    }

    /// Tool count per category id. Categories with no tools are absent.
    pub fn category_counts(&self) -> HashMap<&str, usize> {
        let mut counts = HashMap::new();
        for tool in self.tools.iter() {
            *counts.entry(tool.category_id.as_str()).or_insert(0) += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::SortKey;

    fn catalog() -> Catalog {
        Catalog::builtin().unwrap()
    }

    #[test]
    fn builtin_dataset_loads() {
        let catalog = catalog();
        assert_eq!(catalog.tools().len(), 12);
        assert_eq!(catalog.categories().len(), 10);
    }

    #[test]
    fn duplicate_tool_id_is_rejected() {
        let catalog = catalog();
        let mut tools = catalog.tools().to_vec();
        tools.push(tools[0].clone());

        let err = Catalog::new(tools, catalog.categories().to_vec()).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateToolId(id) if id == "t1"));
    }

    #[test]
    fn duplicate_slug_is_rejected() {
        let catalog = catalog();
        let mut categories = catalog.categories().to_vec();
        let mut copy = categories[0].clone();
        copy.id = "99".into();
        categories.push(copy);

        let err = Catalog::new(catalog.tools().to_vec(), categories).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateSlug(slug) if slug == "text-writing"));
    }

    #[test]
    fn duplicate_category_id_is_rejected() {
        let catalog = catalog();
        let mut categories = catalog.categories().to_vec();
        let mut copy = categories[0].clone();
        copy.slug = "another-slug".into();
        categories.push(copy);

        let err = Catalog::new(catalog.tools().to_vec(), categories).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateCategoryId(_)));
    }

    #[test]
    fn unknown_icon_fails_at_load() {
        let json = r#"{
            "categories": [{ "id": "1", "name": "X", "slug": "x", "iconName": "Unicorn" }],
            "tools": []
        }"#;
        assert!(matches!(Catalog::from_json(json), Err(CatalogError::Parse(_))));
    }

    #[test]
    fn dangling_category_is_accepted_and_resolves_to_none() {
        let catalog = catalog();
        let mut tools = catalog.tools().to_vec();
        tools[0].category_id = "404".into();

        let catalog = Catalog::new(tools, catalog.categories().to_vec()).unwrap();
        let tool = catalog.tool("t1").unwrap();
        assert!(catalog.category_of(tool).is_none());
    }

    #[test]
    fn lookups() {
        let catalog = catalog();
        assert_eq!(catalog.tool("t3").unwrap().name, "Claude");
        assert!(catalog.tool("t999").is_none());
        assert_eq!(catalog.category_by_slug("coding").unwrap().id, "3");
        assert!(catalog.category_by_slug("cooking").is_none());
    }

    #[test]
    fn related_tools_exclude_self_and_other_categories() {
        let catalog = catalog();
        let chatgpt = catalog.tool("t1").unwrap();

        let related: Vec<&str> = catalog
            .related_tools(chatgpt, 4)
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(related, vec!["t3"]);
    }

    #[test]
    fn category_counts() {
        let catalog = catalog();
        let counts = catalog.category_counts();
        assert_eq!(counts.get("1"), Some(&2));
        assert_eq!(counts.get("3"), Some(&2));
        assert_eq!(counts.get("7"), None);
    }

    #[test]
    fn featured_keeps_source_order() {
        let catalog = catalog();
        let ids: Vec<&str> = catalog.featured(3).iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["t1", "t2", "t3"]);
    }

    #[test]
    fn query_over_builtin_dataset() {
        let catalog = catalog();
        let state = QueryState::new()
            .with_tags(["IDE Integration"])
            .with_sort(SortKey::Newest);

        let ids: Vec<&str> = catalog.query(&state).iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["t9", "t4"]);
    }
}
