//! Tool catalog for devtools.
//!
//! This crate holds the catalog of developer utilities and the state a
//! front end needs to browse it:
//!
//! - [`Catalog`] - the immutable tool list and declared categories, either
//!   built in or loaded from a TOML/JSON/YAML file
//! - [`filter_tools`] - category + case-insensitive substring filtering
//! - [`ToolStore`] - the session: open tool, selected category, search text
//! - [`AppConfig`] - profile/base-path and user settings
//!
//! Derived values (filtered lists, category counts) are always recomputed
//! from the catalog; nothing is cached.
//!
//! # Example
//!
//! ```
//! use devtools_catalog::ToolStore;
//!
//! let mut store = ToolStore::default();
//! store.set_search_query("json");
//! let visible: Vec<_> = store.filtered_tools().iter().map(|t| t.id.as_str()).collect();
//! assert_eq!(visible, vec!["json"]);
//!
//! store.open_tool("json");
//! assert_eq!(store.current_tool().map(|t| t.name.as_str()), Some("JSON Formatter"));
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod logging;
pub mod store;
pub mod tool;

pub use catalog::{Catalog, CatalogFormat, POPULAR_LIMIT, RECENT_LIMIT};
pub use config::{AppConfig, PROFILE_ENV, Profile};
pub use error::{Error, Result};
pub use filter::{QueryPolicy, filter_tools};
pub use store::ToolStore;
pub use tool::{
    ALL_CATEGORY, Category, CategoryLabel, CategorySummary, DEFAULT_CATEGORY_ICON,
    DEFAULT_CATEGORY_NAME, Tool,
};
