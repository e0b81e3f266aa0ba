//! Search, filter and sort over a tool list.
//!
//! The pipeline is text filter, category filter, tag filter, then a stable
//! sort. Each filter stage can only narrow the candidate set.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::models::ToolRecord;

/// Ordering applied after filtering. All orderings are descending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Most visited first
    #[default]
    Trending,
    /// Most recently created first; unparseable dates sort last
    Newest,
    /// Highest rated first
    Rating,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Trending => "trending",
            SortKey::Newest => "newest",
            SortKey::Rating => "rating",
        }
    }

    /// Compare two tools under this ordering. Equal keys compare `Equal` so
    /// a stable sort keeps their source order.
    pub fn compare(&self, a: &ToolRecord, b: &ToolRecord) -> Ordering {
        match self {
            SortKey::Trending => b.visit_count.cmp(&a.visit_count),
            SortKey::Newest => b.created_at_timestamp().cmp(&a.created_at_timestamp()),
            SortKey::Rating => rating_key(b).total_cmp(&rating_key(a)),
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SortKey {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trending" => Ok(SortKey::Trending),
            "newest" => Ok(SortKey::Newest),
            "rating" => Ok(SortKey::Rating),
            _ => Err(CatalogError::InvalidValue {
                field: "sort",
                value: s.to_string(),
            }),
        }
    }
}

// NaN ratings sort below every real rating
fn rating_key(tool: &ToolRecord) -> f64 {
    if tool.rating.is_nan() {
        f64::NEG_INFINITY
    } else {
        tool.rating
    }
}

/// The four inputs that drive a filtered view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct QueryState {
    pub query: String,
    pub category_id: Option<String>,
    pub tags: BTreeSet<String>,
    pub sort: SortKey,
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_category(mut self, category_id: impl Into<String>) -> Self {
        self.category_id = Some(category_id.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Add the tag if absent, remove it if present. Returns whether the tag
    /// is selected afterwards.
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        if self.tags.remove(tag) {
            false
        } else {
            self.tags.insert(tag.to_string());
            true
        }
    }

    /// Clear every filter and restore the default sort.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True when any filter (not the sort) narrows the view.
    pub fn has_active_filters(&self) -> bool {
        !self.query.trim().is_empty() || self.category_id.is_some() || !self.tags.is_empty()
    }
}

fn matches_text(tool: &ToolRecord, needle: &str) -> bool {
    tool.name.to_lowercase().contains(needle)
        || tool.description.to_lowercase().contains(needle)
        || tool.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
}

fn matches(tool: &ToolRecord, needle: Option<&str>, state: &QueryState) -> bool {
    if let Some(needle) = needle {
        if !matches_text(tool, needle) {
            return false;
        }
    }

    if let Some(category_id) = &state.category_id {
        if &tool.category_id != category_id {
            return false;
        }
    }

    state.tags.iter().all(|tag| tool.has_tag(tag))
}

/// Positions (into `tools`) of the tools selected by `state`, in result order.
pub fn select_indices(tools: &[ToolRecord], state: &QueryState) -> Vec<usize> {
    let trimmed = state.query.trim();
    let needle = (!trimmed.is_empty()).then(|| trimmed.to_lowercase());

    let mut selected: Vec<usize> = tools
        .iter()
        .enumerate()
        .filter(|(_, tool)| matches(tool, needle.as_deref(), state))
        .map(|(idx, _)| idx)
        .collect();

    // sort_by is stable and `selected` starts in source order
    selected.sort_by(|&a, &b| state.sort.compare(&tools[a], &tools[b]));
    selected
}

/// Apply `state` to `tools`, returning a new ordered view. `tools` is not
/// modified.
pub fn apply_query<'a>(tools: &'a [ToolRecord], state: &QueryState) -> Vec<&'a ToolRecord> {
    select_indices(tools, state)
        .into_iter()
        .map(|idx| &tools[idx])
        .collect()
}

/// Stable sort of borrowed tools under `key`.
pub fn sort_tools(tools: &mut [&ToolRecord], key: SortKey) {
    tools.sort_by(|a, b| key.compare(a, b));
}
