//! Application configuration
//!
//! Settings come from an optional `config.toml`, with the profile
//! overridable by the `DEVTOOLS_ENV` environment variable:
//!
//! ```toml
//! profile = "production"      # or "development"
//! base_path = "/tools/"       # overrides the profile's base path
//! catalog = "my-catalog.toml" # relative to the config file
//! query_policy = "trim"       # or "literal"
//! indent = 4
//! ```
//!
//! The profile only affects generated link prefixes.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::filter::QueryPolicy;

/// Environment variable selecting the profile.
pub const PROFILE_ENV: &str = "DEVTOOLS_ENV";

/// Base path used for production links.
pub const PRODUCTION_BASE_PATH: &str = "/mydevToolsOL/";

/// Base path used for development links.
pub const DEVELOPMENT_BASE_PATH: &str = "/";

fn default_indent() -> usize {
    2
}

/// Deployment profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    Development,
    Production,
}

impl Profile {
    /// Parse an environment value. Only "production"/"prod" select production.
    pub fn from_env_value(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    /// Profile implied by how the binary was compiled.
    pub fn from_build() -> Self {
        if cfg!(debug_assertions) {
            Self::Development
        } else {
            Self::Production
        }
    }

    /// Link prefix for this profile.
    pub fn base_path(&self) -> &'static str {
        match self {
            Self::Development => DEVELOPMENT_BASE_PATH,
            Self::Production => PRODUCTION_BASE_PATH,
        }
    }
}

/// Raw config file contents
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    profile: Option<Profile>,
    base_path: Option<String>,
    catalog: Option<PathBuf>,
    #[serde(default)]
    query_policy: QueryPolicy,
    #[serde(default = "default_indent")]
    indent: usize,
}

/// Effective configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppConfig {
    pub profile: Profile,
    /// Explicit base path; `None` means use the profile's default
    pub base_path: Option<String>,
    /// Catalog file to load instead of the built-in one
    pub catalog: Option<PathBuf>,
    pub query_policy: QueryPolicy,
    /// Indent width for formatted JSON
    pub indent: usize,
    /// File the settings were read from, if any
    pub source: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            profile: Profile::from_build(),
            base_path: None,
            catalog: None,
            query_policy: QueryPolicy::default(),
            indent: default_indent(),
            source: None,
        }
    }
}

impl AppConfig {
    /// Default location: `<config dir>/devtools/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("devtools").join("config.toml"))
    }

    /// Parse config content read from `path`.
    ///
    /// Errors report `path`, and relative catalog paths resolve against its
    /// parent directory.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let file: ConfigFile = toml::from_str(content).map_err(|e| Error::InvalidConfig {
            path: path.to_path_buf(),
            message: e.message().to_string(),
            source: Some(e),
        })?;

        if file.indent == 0 || file.indent > 16 {
            return Err(Error::InvalidConfig {
                path: path.to_path_buf(),
                message: format!("indent must be between 1 and 16, got {}", file.indent),
                source: None,
            });
        }

        let catalog = file.catalog.map(|p| match path.parent() {
            Some(dir) if p.is_relative() => dir.join(p),
            _ => p,
        });

        Ok(Self {
            profile: file.profile.unwrap_or_else(Profile::from_build),
            base_path: file.base_path,
            catalog,
            query_policy: file.query_policy,
            indent: file.indent,
            source: None,
        })
    }

    /// Load a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let mut config = Self::parse(&content, path)?;
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    /// Resolve the effective configuration.
    ///
    /// An explicit path must exist. Otherwise the default location is used
    /// when present, and built-in defaults when not. `DEVTOOLS_ENV` is
    /// applied last.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => Self::load(path)?,
            None => match Self::default_path().filter(|p| p.is_file()) {
                Some(path) => Self::load(&path)?,
                None => Self::default(),
            },
        };
        config.apply_profile_env(std::env::var(PROFILE_ENV).ok().as_deref());
        tracing::debug!(profile = ?config.profile, base = config.base_path(), "Resolved config");
        Ok(config)
    }

    /// Override the profile from an environment value, if set.
    pub fn apply_profile_env(&mut self, value: Option<&str>) {
        if let Some(value) = value {
            self.profile = Profile::from_env_value(value);
        }
    }

    /// Effective base path for generated links.
    pub fn base_path(&self) -> &str {
        self.base_path
            .as_deref()
            .unwrap_or_else(|| self.profile.base_path())
    }

    /// Join the base path and a relative asset path with a single '/'.
    pub fn asset_url(&self, asset: &str) -> String {
        let base = self.base_path().trim_end_matches('/');
        let asset = asset.trim_start_matches('/');
        format!("{base}/{asset}")
    }

    /// The catalog this configuration points at.
    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog {
            Some(path) => Catalog::load(path),
            None => Ok(Catalog::builtin()),
        }
    }
}
