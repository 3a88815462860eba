//! Effective settings for a CLI invocation

use std::path::Path;

use devtools_catalog::{AppConfig, ToolStore};

use crate::error::Result;

/// Resolved configuration plus the global flag overrides.
#[derive(Debug, Clone)]
pub struct Context {
    pub config: AppConfig,
}

impl Context {
    /// Resolve the config file and apply `--catalog`.
    pub fn load(config_path: Option<&Path>, catalog: Option<&Path>) -> Result<Self> {
        let mut config = AppConfig::resolve(config_path)?;
        if let Some(path) = catalog {
            config.catalog = Some(path.to_path_buf());
        }
        Ok(Self { config })
    }

    /// A fresh session over the configured catalog.
    pub fn store(&self) -> Result<ToolStore> {
        let catalog = self.config.load_catalog()?;
        tracing::debug!(tools = catalog.len(), "Catalog loaded");
        Ok(ToolStore::new(catalog).with_query_policy(self.config.query_policy))
    }
}
