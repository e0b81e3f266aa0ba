//! Curated lists shown on the collections page.

use serde::Serialize;

use crate::dataset::Catalog;
use crate::models::ToolRecord;
use crate::query::{sort_tools, SortKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CollectionKind {
    Featured,
    TopRated,
    Trending,
    Latest,
}

impl CollectionKind {
    /// Page order.
    pub const ALL: [CollectionKind; 4] = [
        CollectionKind::Featured,
        CollectionKind::TopRated,
        CollectionKind::Trending,
        CollectionKind::Latest,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            CollectionKind::Featured => "featured",
            CollectionKind::TopRated => "top-rated",
            CollectionKind::Trending => "trending",
            CollectionKind::Latest => "latest",
        }
    }

    /// Key segment under `collections.collections.*` in the locale bundles.
    pub fn translation_key(&self) -> &'static str {
        match self {
            CollectionKind::Featured => "featured",
            CollectionKind::TopRated => "topRated",
            CollectionKind::Trending => "trending",
            CollectionKind::Latest => "latest",
        }
    }

    fn sort_key(&self) -> Option<SortKey> {
        match self {
            CollectionKind::Featured => None,
            CollectionKind::TopRated => Some(SortKey::Rating),
            CollectionKind::Trending => Some(SortKey::Trending),
            CollectionKind::Latest => Some(SortKey::Newest),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Collection<'a> {
    pub kind: CollectionKind,
    pub tools: Vec<&'a ToolRecord>,
}

/// Build one collection of at most `limit` tools.
pub fn collection(catalog: &Catalog, kind: CollectionKind, limit: usize) -> Collection<'_> {
    let tools = match kind.sort_key() {
        None => catalog.featured(limit),
        Some(key) => {
            let mut tools: Vec<&ToolRecord> = catalog.tools().iter().collect();
            sort_tools(&mut tools, key);
            tools.truncate(limit);
            tools
        }
    };

    Collection { kind, tools }
}

/// All collections in page order.
pub fn collections(catalog: &Catalog, limit: usize) -> Vec<Collection<'_>> {
    CollectionKind::ALL
        .iter()
        .map(|&kind| collection(catalog, kind, limit))
        .collect()
}
