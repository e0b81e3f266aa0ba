//! Stateful search container with a memoized result view.

use std::cell::OnceCell;
use std::sync::Arc;

use crate::models::ToolRecord;
use crate::query::{select_indices, QueryState, SortKey};

/// Holds the query state for one listing and caches the derived view.
///
/// The cache is keyed by the dataset (pointer identity of the shared list)
/// and the query state. Setters that leave the state unchanged keep it.
pub struct ToolSearch {
    tools: Arc<[ToolRecord]>,
    state: QueryState,
    cache: OnceCell<Vec<usize>>,
}

impl ToolSearch {
    pub fn new(tools: Arc<[ToolRecord]>) -> Self {
        Self::with_state(tools, QueryState::default())
    }

    pub fn with_state(tools: Arc<[ToolRecord]>, state: QueryState) -> Self {
        Self {
            tools,
            state,
            cache: OnceCell::new(),
        }
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    pub fn tools(&self) -> &Arc<[ToolRecord]> {
        &self.tools
    }

    /// Swap the underlying dataset. A different list invalidates the view;
    /// the same `Arc` does not.
    pub fn set_tools(&mut self, tools: Arc<[ToolRecord]>) {
        if !Arc::ptr_eq(&self.tools, &tools) {
            self.tools = tools;
            self.invalidate();
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if self.state.query != query {
            self.state.query = query;
            self.invalidate();
        }
    }

    pub fn set_category(&mut self, category_id: Option<String>) {
        if self.state.category_id != category_id {
            self.state.category_id = category_id;
            self.invalidate();
        }
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        if self.state.sort != sort {
            self.state.sort = sort;
            self.invalidate();
        }
    }

    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        let selected = self.state.toggle_tag(tag);
        self.invalidate();
        selected
    }

    pub fn reset(&mut self) {
        if self.state != QueryState::default() {
            self.state.reset();
            self.invalidate();
        }
    }

    pub fn has_active_filters(&self) -> bool {
        self.state.has_active_filters()
    }

    /// Current filtered and sorted view.
    pub fn results(&self) -> Vec<&ToolRecord> {
        self.indices().iter().map(|&idx| &self.tools[idx]).collect()
    }

    /// Number of tools in the current view ("N results found").
    pub fn count(&self) -> usize {
        self.indices().len()
    }

    pub fn is_cached(&self) -> bool {
        self.cache.get().is_some()
    }

    fn indices(&self) -> &[usize] {
        self.cache
            .get_or_init(|| select_indices(&self.tools, &self.state))
    }

    fn invalidate(&mut self) {
        self.cache.take();
    }
}
