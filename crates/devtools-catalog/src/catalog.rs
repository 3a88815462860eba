//! The tool catalog
//!
//! A catalog is a fixed, ordered list of [`Tool`] records plus the declared
//! [`Category`] set. The built-in catalog is embedded at compile time from
//! `data/catalog.toml`; alternative catalogs can be loaded from TOML, JSON,
//! or YAML files with the same schema:
//!
//! ```toml
//! [[tools]]
//! id = "json"
//! name = "JSON Formatter"
//! icon = "fas fa-indent"
//! category = "data"
//! categoryName = "Data Formats"
//! description = "Format, minify and validate JSON data"
//!
//! [[categories]]
//! id = "data"
//! name = "Data Formats"
//! icon = "fas fa-database"
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::filter::filter_tools;
use crate::tool::{ALL_CATEGORY, Category, CategoryLabel, CategorySummary, Tool};

const BUILTIN_CATALOG: &str = include_str!("../data/catalog.toml");

/// Number of tools shown in the "recent" strip.
pub const RECENT_LIMIT: usize = 3;

/// Number of tools shown in the "popular" strip.
pub const POPULAR_LIMIT: usize = 4;

/// On-disk catalog schema.
#[derive(Debug, Default, Serialize, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    tools: Vec<Tool>,
    #[serde(default)]
    categories: Vec<Category>,
}

/// Supported catalog file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Toml,
    Json,
    Yaml,
}

impl CatalogFormat {
    /// Detect format from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Immutable collection of tools and categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    tools: Vec<Tool>,
    categories: Vec<Category>,
}

impl Catalog {
    /// Build a catalog from tools and declared categories.
    ///
    /// Rejects empty or duplicate tool ids and duplicate category ids. The
    /// `"all"` category is prepended when it is not declared.
    pub fn new(tools: Vec<Tool>, mut categories: Vec<Category>) -> Result<Self> {
        let mut seen = HashSet::new();
        for (index, tool) in tools.iter().enumerate() {
            if tool.id.is_empty() {
                return Err(Error::EmptyToolId { index });
            }
            if !seen.insert(tool.id.as_str()) {
                return Err(Error::DuplicateTool {
                    id: tool.id.clone(),
                });
            }
        }

        let mut seen = HashSet::new();
        for category in &categories {
            if !seen.insert(category.id.as_str()) {
                return Err(Error::DuplicateCategory {
                    id: category.id.clone(),
                });
            }
        }
        if !seen.contains(ALL_CATEGORY) {
            categories.insert(0, Category::all());
        }

        for tool in &tools {
            if !categories.iter().any(|c| c.id == tool.category) {
                tracing::warn!(
                    tool = %tool.id,
                    category = %tool.category,
                    "Tool references an undeclared category"
                );
            }
        }

        Ok(Self { tools, categories })
    }

    /// The catalog compiled into the binary.
    pub fn builtin() -> Self {
        // Covered by test_builtin_parses
        Self::parse(BUILTIN_CATALOG, CatalogFormat::Toml)
            .unwrap_or_else(|e| panic!("built-in catalog is invalid: {e}"))
    }

    /// Parse catalog content in the given format.
    pub fn parse(content: &str, format: CatalogFormat) -> Result<Self> {
        let file: CatalogFile = match format {
            CatalogFormat::Toml => toml::from_str(content)?,
            CatalogFormat::Json => serde_json::from_str(content)?,
            CatalogFormat::Yaml => serde_yaml::from_str(content)?,
        };
        Self::new(file.tools, file.categories)
    }

    /// Load a catalog file, choosing the parser by extension.
    pub fn load(path: &Path) -> Result<Self> {
        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(CatalogFormat::from_extension)
            .ok_or_else(|| Error::UnsupportedFormat {
                path: path.to_path_buf(),
            })?;

        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let catalog = Self::parse(&content, format)?;
        tracing::debug!(path = %path.display(), tools = catalog.len(), "Loaded catalog");
        Ok(catalog)
    }

    /// All tools in catalog order.
    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    /// Declared categories in catalog order.
    pub fn declared_categories(&self) -> &[Category] {
        &self.categories
    }

    /// Get a tool by id.
    pub fn get(&self, id: &str) -> Option<&Tool> {
        self.tools.iter().find(|t| t.id == id)
    }

    /// Number of tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the catalog has no tools.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Categories with membership counts recomputed from the tool list.
    pub fn categories(&self) -> Vec<CategorySummary> {
        self.categories
            .iter()
            .map(|c| CategorySummary {
                id: c.id.clone(),
                name: c.name.clone(),
                icon: c.icon.clone(),
                count: self.count_in(&c.id),
            })
            .collect()
    }

    /// Number of tools in a category. `"all"` counts every tool.
    pub fn count_in(&self, category: &str) -> usize {
        if category == ALL_CATEGORY {
            self.tools.len()
        } else {
            self.tools.iter().filter(|t| t.category == category).count()
        }
    }

    /// Display name and icon for a category, or the default label.
    pub fn lookup_category(&self, id: &str) -> CategoryLabel {
        match self.categories.iter().find(|c| c.id == id) {
            Some(c) => CategoryLabel {
                name: c.name.clone(),
                icon: c.icon.clone(),
            },
            None => {
                tracing::debug!(category = id, "Unknown category, using default label");
                CategoryLabel::default()
            }
        }
    }

    /// Display name for a category id.
    pub fn category_name(&self, id: &str) -> String {
        self.lookup_category(id).name
    }

    /// Icon for a category id.
    pub fn category_icon(&self, id: &str) -> String {
        self.lookup_category(id).icon
    }

    /// Filter this catalog. See [`filter_tools`].
    pub fn filter(&self, category: &str, query: &str) -> Vec<&Tool> {
        filter_tools(&self.tools, category, query)
    }

    /// The leading tools shown as "recent".
    pub fn recent(&self) -> &[Tool] {
        &self.tools[..RECENT_LIMIT.min(self.tools.len())]
    }

    /// The leading tools shown as "popular".
    pub fn popular(&self) -> &[Tool] {
        &self.tools[..POPULAR_LIMIT.min(self.tools.len())]
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
