//! Catalog record types

use serde::{Deserialize, Serialize};

/// Identifier of the synthetic category that matches every tool.
pub const ALL_CATEGORY: &str = "all";

/// Label used when a category id is not recognized.
pub const DEFAULT_CATEGORY_NAME: &str = "All Tools";

/// Icon used when a category id is not recognized.
pub const DEFAULT_CATEGORY_ICON: &str = "fas fa-th";

/// A single developer utility in the catalog.
///
/// Tools are immutable once the catalog is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    /// Stable machine identifier (e.g., "regex", "json")
    pub id: String,
    /// Display name
    pub name: String,
    /// Icon reference (e.g., "fas fa-lock")
    pub icon: String,
    /// Category code this tool belongs to
    pub category: String,
    /// Human-readable category label
    #[serde(rename = "categoryName")]
    pub category_name: String,
    /// One-line description
    pub description: String,
}

impl Tool {
    /// Create a new tool record.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        icon: impl Into<String>,
        category: impl Into<String>,
        category_name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: icon.into(),
            category: category.into(),
            category_name: category_name.into(),
            description: description.into(),
        }
    }

    /// Case-insensitive substring match against name or description.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

/// A category as declared in the catalog. Counts are never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: String,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: icon.into(),
        }
    }

    /// The synthetic "all" category.
    pub fn all() -> Self {
        Self::new(ALL_CATEGORY, "All", DEFAULT_CATEGORY_ICON)
    }
}

/// A category together with its derived membership count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub count: usize,
}

/// Display name and icon for a category id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryLabel {
    pub name: String,
    pub icon: String,
}

impl Default for CategoryLabel {
    fn default() -> Self {
        Self {
            name: DEFAULT_CATEGORY_NAME.to_string(),
            icon: DEFAULT_CATEGORY_ICON.to_string(),
        }
    }
}
