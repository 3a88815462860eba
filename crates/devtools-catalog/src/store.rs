//! Session state over a catalog
//!
//! The [`ToolStore`] owns the catalog and the transient UI state: which
//! tool is open, the selected category, and the search text. Everything
//! derived from that state (filtered list, category counts) is recomputed
//! on each call rather than cached.

use crate::catalog::Catalog;
use crate::filter::{QueryPolicy, filter_tools};
use crate::tool::{ALL_CATEGORY, CategoryLabel, CategorySummary, Tool};

/// Catalog plus the current session state.
#[derive(Debug, Clone)]
pub struct ToolStore {
    catalog: Catalog,
    current_tool: Option<Tool>,
    selected_category: String,
    search_query: String,
    query_policy: QueryPolicy,
}

impl ToolStore {
    /// Create a store with default session state.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            current_tool: None,
            selected_category: ALL_CATEGORY.to_string(),
            search_query: String::new(),
            query_policy: QueryPolicy::default(),
        }
    }

    /// Set how the search query is prepared (builder pattern).
    pub fn with_query_policy(mut self, policy: QueryPolicy) -> Self {
        self.query_policy = policy;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn tools(&self) -> &[Tool] {
        self.catalog.tools()
    }

    pub fn query_policy(&self) -> QueryPolicy {
        self.query_policy
    }

    /// Open a tool by id.
    ///
    /// An unknown id leaves the slot empty; it is not an error.
    pub fn open_tool(&mut self, id: &str) {
        self.current_tool = self.catalog.get(id).cloned();
        match &self.current_tool {
            Some(tool) => tracing::debug!(tool = %tool.id, "Opened tool"),
            None => tracing::debug!(tool = id, "No tool with this id, slot cleared"),
        }
    }

    /// Clear the current-tool slot.
    pub fn close_tool(&mut self) {
        self.current_tool = None;
    }

    pub fn current_tool(&self) -> Option<&Tool> {
        self.current_tool.as_ref()
    }

    pub fn select_category(&mut self, category: impl Into<String>) {
        self.selected_category = category.into();
    }

    pub fn selected_category(&self) -> &str {
        &self.selected_category
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Tools visible under the current category and search text.
    pub fn filtered_tools(&self) -> Vec<&Tool> {
        let query = self.query_policy.apply(&self.search_query);
        filter_tools(self.catalog.tools(), &self.selected_category, query)
    }

    /// Categories with counts derived from the catalog.
    pub fn categories(&self) -> Vec<CategorySummary> {
        self.catalog.categories()
    }

    pub fn recent_tools(&self) -> &[Tool] {
        self.catalog.recent()
    }

    pub fn popular_tools(&self) -> &[Tool] {
        self.catalog.popular()
    }

    pub fn category_name(&self, id: &str) -> String {
        self.catalog.category_name(id)
    }

    pub fn category_icon(&self, id: &str) -> String {
        self.catalog.category_icon(id)
    }

    /// Label for the currently selected category.
    pub fn selected_label(&self) -> CategoryLabel {
        self.catalog.lookup_category(&self.selected_category)
    }

    /// Return all session state to its defaults.
    pub fn reset(&mut self) {
        self.current_tool = None;
        self.selected_category = ALL_CATEGORY.to_string();
        self.search_query.clear();
    }
}

impl Default for ToolStore {
    fn default() -> Self {
        Self::new(Catalog::builtin())
    }
}
